//! Each submodule re-exports its public surface from here, so consumers can
//! simply depend on `outcome_rail::*` or pick focused pieces as needed.
//!
//! # Examples
//!
//! ## Railway Composition
//!
//! ```
//! use outcome_rail::Outcome;
//!
//! let outcome = Outcome::<i32, &str>::success(4)
//!     .filter(|v| v % 2 == 0, "odd")
//!     .and_result_of(|v| v * 10)
//!     .map_failure(|e| format!("rejected: {e}"));
//!
//! assert_eq!(outcome.or_else(0), 40);
//! ```
//!
//! ## Aggregation
//!
//! ```
//! use outcome_rail::Outcome;
//!
//! let inputs = ["1", "x", "3"];
//! let parsed = inputs.iter().map(|raw| {
//!     Outcome::of_optional(raw.parse::<i32>().ok(), *raw)
//! });
//!
//! let some = Outcome::some(parsed);
//! assert_eq!(some.into_success().unwrap().as_slice(), &[1, 3]);
//! ```
//!
//! ## Capturing Failures
//!
//! ```
//! use outcome_rail::{Outcome, Thrown};
//!
//! let outcome = Outcome::of_throwable(|| "not a number".parse::<i32>());
//! assert!(matches!(outcome.into_failure(), Some(Thrown::Raised(_))));
//! ```
#![cfg_attr(not(feature = "std"), no_std)]

#[cfg(not(feature = "std"))]
extern crate alloc;

#[cfg(feature = "std")]
extern crate std;

/// Conversions between `Result` and `Outcome`
pub mod convert;
/// Outcome macros
pub mod macros;
/// The Outcome container and its combinators
pub mod outcome;
/// Convenience re-exports for quick starts
pub mod prelude;
/// Extension traits for standard containers
pub mod traits;
/// Supporting types: errors, partitions, aggregate storage
pub mod types;

pub use convert::*;
pub use outcome::*;
pub use traits::*;
pub use types::{OutcomeError, OutcomeVec, Partition, Side};
