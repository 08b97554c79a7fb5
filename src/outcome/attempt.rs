//! Capturing fallible actions as outcomes.
//!
//! [`Outcome::of_throwable`] runs an untrusted action and reifies every way it can end
//! abnormally into a [`Thrown`] failure payload:
//!
//! - a returned `Err(e)` becomes [`Thrown::Raised`]
//! - a returned `None` becomes [`Thrown::NullResult`]
//! - a panic becomes [`Thrown::Panicked`] (requires the `std` feature)
//!
//! A captured panic is still reported to the installed panic hook before it is caught, so
//! the default hook prints its message to stderr. Install a quiet hook with
//! `std::panic::set_hook` to silence it. Capture only works with `panic = "unwind"`; under
//! `panic = "abort"` the process aborts.
//!
//! # Examples
//!
//! ```
//! use outcome_rail::{Outcome, Thrown};
//!
//! let parsed = Outcome::of_throwable(|| "42".parse::<i32>());
//! assert_eq!(parsed.into_success(), Some(42));
//!
//! let divided = Outcome::of_throwable(|| 10i32.checked_div(0));
//! assert!(matches!(divided.into_failure(), Some(Thrown::NullResult)));
//! ```
use core::convert::Infallible;
use core::fmt::{self, Display};

use crate::macros::trace_event;
use crate::outcome::core::Outcome;
use crate::types::alloc_type::String;

/// Return value of an action passed to [`Outcome::of_throwable`].
///
/// Implemented for `Result<T, E>` (errors are raised) and `Option<T>` (absence is a
/// null result).
pub trait Attempt {
    type Value;
    type Error;

    /// Normalises the return value; `Ok(None)` marks an absent result.
    fn into_attempt(self) -> Result<Option<Self::Value>, Self::Error>;
}

impl<T, E> Attempt for Result<T, E> {
    type Value = T;
    type Error = E;

    #[inline]
    fn into_attempt(self) -> Result<Option<T>, E> {
        self.map(Some)
    }
}

impl<T> Attempt for Option<T> {
    type Value = T;
    type Error = Infallible;

    #[inline]
    fn into_attempt(self) -> Result<Option<T>, Infallible> {
        Ok(self)
    }
}

/// Failure payload produced by [`Outcome::of_throwable`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Thrown<E> {
    /// The action returned an error.
    Raised(E),
    /// The action returned no value.
    NullResult,
    /// The action panicked; holds the panic message. Only produced with the `std` feature.
    Panicked(String),
}

impl<E> Thrown<E> {
    /// Returns the raised error, if the action returned one.
    #[must_use]
    #[inline]
    pub fn raised(self) -> Option<E> {
        match self {
            Thrown::Raised(error) => Some(error),
            _ => None,
        }
    }

    /// Short label of the variant, used in log events.
    #[must_use]
    pub fn kind(&self) -> &'static str {
        match self {
            Thrown::Raised(_) => "raised",
            Thrown::NullResult => "null_result",
            Thrown::Panicked(_) => "panicked",
        }
    }
}

impl<E: Display> Display for Thrown<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Thrown::Raised(error) => write!(f, "{error}"),
            Thrown::NullResult => f.write_str("action returned no value"),
            Thrown::Panicked(message) => write!(f, "action panicked: {message}"),
        }
    }
}

impl<E> core::error::Error for Thrown<E>
where
    E: core::error::Error + 'static,
{
    fn source(&self) -> Option<&(dyn core::error::Error + 'static)> {
        match self {
            Thrown::Raised(error) => Some(error),
            _ => None,
        }
    }
}

impl<S, E> Outcome<S, Thrown<E>> {
    /// Runs `action` and captures its result, error, absence or panic as an outcome.
    ///
    /// # Panics
    ///
    /// With the `std` feature a panic inside `action` does not propagate, but the panic
    /// hook still runs first: the default hook writes the message to stderr. Callers that
    /// need silence install their own hook with `std::panic::set_hook`. Without `std`, or
    /// when built with `panic = "abort"`, a panic is not captured.
    ///
    /// # Examples
    ///
    /// ```
    /// use outcome_rail::{Outcome, Thrown};
    ///
    /// let failed = Outcome::of_throwable(|| "abc".parse::<i32>());
    /// assert!(matches!(failed.into_failure(), Some(Thrown::Raised(_))));
    /// ```
    pub fn of_throwable<A, R>(action: A) -> Self
    where
        A: FnOnce() -> R,
        R: Attempt<Value = S, Error = E>,
    {
        Self::of_throwable_with(action, core::convert::identity)
    }
}

impl<S, F> Outcome<S, F> {
    /// Like [`of_throwable`](Outcome::of_throwable), mapping the captured [`Thrown`] into a
    /// custom failure payload.
    ///
    /// `map` is only invoked when the action did not produce a value.
    ///
    /// # Examples
    ///
    /// ```
    /// use outcome_rail::Outcome;
    ///
    /// let outcome: Outcome<i32, String> =
    ///     Outcome::of_throwable_with(|| "x1".parse::<i32>(), |thrown| thrown.to_string());
    /// assert_eq!(outcome.into_failure().as_deref(), Some("invalid digit found in string"));
    /// ```
    pub fn of_throwable_with<A, R, M>(action: A, map: M) -> Self
    where
        A: FnOnce() -> R,
        R: Attempt<Value = S>,
        M: FnOnce(Thrown<R::Error>) -> F,
    {
        let thrown = match run_guarded(action) {
            Ok(Ok(Some(value))) => return Self::Success(value),
            Ok(Ok(None)) => Thrown::NullResult,
            Ok(Err(error)) => Thrown::Raised(error),
            Err(message) => Thrown::Panicked(message),
        };
        trace_event!(debug, kind = thrown.kind(), "captured failure from fallible action");
        Self::Failure(map(thrown))
    }
}

type Guarded<R> = Result<Result<Option<<R as Attempt>::Value>, <R as Attempt>::Error>, String>;

#[cfg(feature = "std")]
fn run_guarded<A, R>(action: A) -> Guarded<R>
where
    A: FnOnce() -> R,
    R: Attempt,
{
    std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| action().into_attempt()))
        .map_err(|payload| panic_message(payload.as_ref()))
}

#[cfg(not(feature = "std"))]
fn run_guarded<A, R>(action: A) -> Guarded<R>
where
    A: FnOnce() -> R,
    R: Attempt,
{
    Ok(action().into_attempt())
}

#[cfg(feature = "std")]
fn panic_message(payload: &(dyn std::any::Any + Send)) -> String {
    if let Some(message) = payload.downcast_ref::<&'static str>() {
        String::from(*message)
    } else if let Some(message) = payload.downcast_ref::<String>() {
        message.clone()
    } else {
        String::from("non-string panic payload")
    }
}
