use core::fmt::{self, Display};

/// Names one of the two variants of an [`Outcome`](crate::Outcome).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Side {
    Success,
    Failure,
}

impl Side {
    /// Returns the other variant.
    #[must_use]
    #[inline]
    pub const fn opposite(self) -> Self {
        match self {
            Side::Success => Side::Failure,
            Side::Failure => Side::Success,
        }
    }
}

impl Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Side::Success => f.write_str("success"),
            Side::Failure => f.write_str("failure"),
        }
    }
}

/// Programmer error raised when an [`Outcome`](crate::Outcome) is misused.
///
/// These never travel through the failure rail: they signal a bug in the calling code,
/// such as wrapping an absent payload or asking a failure for its success value.
///
/// # Examples
///
/// ```
/// use outcome_rail::{OutcomeError, Side};
///
/// let err = OutcomeError::AbsentPayload(Side::Failure);
/// assert_eq!(err.to_string(), "failure payload must not be absent");
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum OutcomeError {
    /// A construction was attempted with a `None` payload.
    AbsentPayload(Side),
    /// A payload was requested from the wrong variant.
    InvalidState { expected: Side, found: Side },
}

impl OutcomeError {
    /// Builds the invalid-state error for a request of `expected` on the other variant.
    #[must_use]
    #[inline]
    pub const fn invalid_state(expected: Side) -> Self {
        OutcomeError::InvalidState { expected, found: expected.opposite() }
    }
}

impl Display for OutcomeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutcomeError::AbsentPayload(side) => write!(f, "{side} payload must not be absent"),
            OutcomeError::InvalidState { expected, found } => {
                write!(f, "invalid state: {expected} payload requested from a {found}")
            }
        }
    }
}

impl core::error::Error for OutcomeError {}
