//! Convenience re-exports for common usage patterns.
//!
//! ```
//! use outcome_rail::prelude::*;
//!
//! fn lookup(id: u32) -> Outcome<&'static str, String> {
//!     [(1, "alice"), (2, "bob")]
//!         .into_iter()
//!         .find(|(key, _)| *key == id)
//!         .map(|(_, name)| name)
//!         .success_or_else(|| format!("no user {id}"))
//! }
//!
//! assert_eq!(lookup(2).or_else("nobody"), "bob");
//! assert_eq!(lookup(3).or_else("nobody"), "nobody");
//! ```

// Macros
pub use crate::try_outcome;

// Core types
pub use crate::outcome::{Attempt, Outcome, Thrown};
pub use crate::types::{OutcomeError, OutcomeVec, Side};

// Traits
pub use crate::traits::{IntoOutcome, OptionOutcomeExt};
