//! Supporting types for [`Outcome`](crate::Outcome).
//!
//! This module holds the programmer-error type raised on misuse, the single-pass
//! [`Partition`] used by the aggregation helpers, and the inline-storage collection
//! those helpers return.
//!
//! # Examples
//!
//! ```
//! use outcome_rail::types::Partition;
//! use outcome_rail::Outcome;
//!
//! let partition: Partition<i32, &str> = vec![
//!     Outcome::success(1),
//!     Outcome::failure("bad"),
//!     Outcome::success(2),
//! ]
//! .into_iter()
//! .collect();
//!
//! assert_eq!(partition.successes(), &[1, 2]);
//! assert_eq!(partition.failures(), &["bad"]);
//! ```
use smallvec::SmallVec;

pub mod alloc_type;
pub mod outcome_error;
pub mod partition;

pub use outcome_error::*;
pub use partition::*;

/// SmallVec-backed collection used for aggregated success and failure payloads.
///
/// Uses inline storage for up to 2 elements to avoid heap allocations
/// in the common case of aggregating a handful of outcomes.
pub type OutcomeVec<T> = SmallVec<[T; 2]>;
