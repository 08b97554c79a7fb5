//! Macros for working with [`Outcome`](crate::Outcome) in functions that return one.

/// Unwraps a success, or returns early with the failure.
///
/// This is the `?` operator for [`Outcome`](crate::Outcome): the failure payload is
/// converted with [`From`], so a function may widen its failure type.
///
/// # Examples
///
/// ```
/// use outcome_rail::{try_outcome, Outcome};
///
/// fn half(value: i32) -> Outcome<i32, String> {
///     if value % 2 == 0 {
///         Outcome::success(value / 2)
///     } else {
///         Outcome::failure(format!("{value} is odd"))
///     }
/// }
///
/// fn quarter(value: i32) -> Outcome<i32, String> {
///     let halved = try_outcome!(half(value));
///     half(halved)
/// }
///
/// assert_eq!(quarter(8).into_success(), Some(2));
/// assert_eq!(quarter(6).into_failure().as_deref(), Some("3 is odd"));
/// ```
#[macro_export]
macro_rules! try_outcome {
    ($expr:expr $(,)?) => {
        match $expr {
            $crate::Outcome::Success(value) => value,
            $crate::Outcome::Failure(error) => {
                return $crate::Outcome::Failure(::core::convert::From::from(error));
            }
        }
    };
}

#[cfg(feature = "tracing")]
macro_rules! trace_event {
    ($level:ident, $($arg:tt)+) => {
        ::tracing::$level!($($arg)+)
    };
}

#[cfg(not(feature = "tracing"))]
macro_rules! trace_event {
    ($level:ident, $($arg:tt)+) => {};
}

pub(crate) use trace_event;
