//! The [`Outcome`] container and its combinator surface.
//!
//! An [`Outcome`] holds either a success payload or a failure payload. This module is
//! split by concern:
//!
//! - construction, queries, inspection, combinators and terminal extraction
//! - capturing fallible actions with [`Outcome::of_throwable`]
//! - aggregating many outcomes with [`Outcome::all`], [`Outcome::some`] and
//!   [`Outcome::partition_with`]
//! - equality, hashing and display
//! - iterators over the success payload
//!
//! # Examples
//!
//! ```
//! use outcome_rail::Outcome;
//!
//! let outcome = Outcome::<&str, String>::success("21")
//!     .and(|raw| match raw.parse::<i32>() {
//!         Ok(v) => Outcome::success(v),
//!         Err(e) => Outcome::failure(e.to_string()),
//!     })
//!     .and_result_of(|v| v * 2)
//!     .filter(|v| *v > 0, "not positive".to_string());
//!
//! assert_eq!(outcome.to_string(), "Success(42)");
//! ```
pub mod aggregate;
pub mod attempt;
pub mod core;
pub mod equality;
pub mod iter;

pub use self::attempt::{Attempt, Thrown};
pub use self::core::*;
pub use self::iter::*;
