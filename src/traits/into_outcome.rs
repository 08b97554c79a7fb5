//! Extension traits for moving standard containers onto the outcome rail.
//!
//! # Examples
//!
//! ```
//! use outcome_rail::traits::{IntoOutcome, OptionOutcomeExt};
//!
//! let parsed = "7".parse::<u8>().into_outcome();
//! assert!(parsed.is_success());
//!
//! let user: Option<&str> = None;
//! let outcome = user.success_or("user not found");
//! assert_eq!(outcome.into_failure(), Some("user not found"));
//! ```

use crate::outcome::Outcome;

/// Converts a `Result`-like value into an [`Outcome`].
pub trait IntoOutcome<S, F> {
    /// Maps `Ok` to a success and `Err` to a failure.
    ///
    /// # Examples
    ///
    /// ```
    /// use outcome_rail::traits::IntoOutcome;
    ///
    /// let result: Result<i32, &str> = Err("boom");
    /// assert_eq!(result.into_outcome().into_failure(), Some("boom"));
    /// ```
    fn into_outcome(self) -> Outcome<S, F>;
}

impl<S, F> IntoOutcome<S, F> for Result<S, F> {
    #[inline]
    fn into_outcome(self) -> Outcome<S, F> {
        Outcome::from(self)
    }
}

/// Extension methods turning an `Option` into an [`Outcome`].
pub trait OptionOutcomeExt<S> {
    /// Wraps `Some` as a success, `None` as `Failure(on_absent)`.
    fn success_or<F>(self, on_absent: F) -> Outcome<S, F>;

    /// Wraps `Some` as a success; on `None`, runs `on_absent` for the failure payload.
    ///
    /// The closure is only called if the option is `None`.
    fn success_or_else<F, A>(self, on_absent: A) -> Outcome<S, F>
    where
        A: FnOnce() -> F;
}

impl<S> OptionOutcomeExt<S> for Option<S> {
    #[inline]
    fn success_or<F>(self, on_absent: F) -> Outcome<S, F> {
        Outcome::of_nullable(self, on_absent)
    }

    #[inline]
    fn success_or_else<F, A>(self, on_absent: A) -> Outcome<S, F>
    where
        A: FnOnce() -> F,
    {
        Outcome::of_nullable_with(self, on_absent)
    }
}
