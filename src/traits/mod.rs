//! Extension traits bridging standard containers and [`Outcome`](crate::Outcome).
//!
//! - [`IntoOutcome`]: converts a `Result` into an `Outcome`
//! - [`OptionOutcomeExt`]: converts an `Option` into an `Outcome` with an eager or lazy failure
//!
//! # Examples
//!
//! ```
//! use outcome_rail::traits::IntoOutcome;
//!
//! let outcome = Ok::<i32, &str>(1).into_outcome().and_result_of(|v| v + 1);
//! assert_eq!(outcome.into_success(), Some(2));
//! ```

pub mod into_outcome;

pub use into_outcome::{IntoOutcome, OptionOutcomeExt};
