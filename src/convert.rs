use crate::outcome::Outcome;

impl<S, F> From<Result<S, F>> for Outcome<S, F> {
    #[inline]
    fn from(result: Result<S, F>) -> Self {
        match result {
            Ok(value) => Outcome::Success(value),
            Err(error) => Outcome::Failure(error),
        }
    }
}

impl<S, F> From<Outcome<S, F>> for Result<S, F> {
    #[inline]
    fn from(outcome: Outcome<S, F>) -> Self {
        outcome.into_result()
    }
}

#[inline]
pub fn result_to_outcome<S, F>(result: Result<S, F>) -> Outcome<S, F> {
    Outcome::from(result)
}

#[inline]
pub fn outcome_to_result<S, F>(outcome: Outcome<S, F>) -> Result<S, F> {
    outcome.into_result()
}

/// Removes one level of nesting from a success that holds another outcome.
#[inline]
pub fn flatten_outcome<S, F>(outcome: Outcome<Outcome<S, F>, F>) -> Outcome<S, F> {
    outcome.and(core::convert::identity)
}
