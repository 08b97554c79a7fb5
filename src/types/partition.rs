use crate::outcome::Outcome;
use crate::types::OutcomeVec;

/// Ordered split of a sequence of outcomes into their success and failure payloads.
///
/// A `Partition` is filled in a single linear scan. Aggregation policies such as
/// [`Outcome::all`] and [`Outcome::some`] only decide what to do with the two lists,
/// so a new policy never has to rewrite the scan.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Partition<S, F> {
    successes: OutcomeVec<S>,
    failures: OutcomeVec<F>,
}

impl<S, F> Partition<S, F> {
    /// Creates a new empty partition.
    #[inline]
    pub fn new() -> Self {
        Self {
            successes: OutcomeVec::new(),
            failures: OutcomeVec::new(),
        }
    }

    /// Routes a single outcome to the matching list.
    #[inline]
    pub fn push(&mut self, outcome: Outcome<S, F>) {
        match outcome {
            Outcome::Success(value) => self.successes.push(value),
            Outcome::Failure(error) => self.failures.push(error),
        }
    }

    /// Success payloads seen so far, in input order.
    #[inline]
    pub fn successes(&self) -> &[S] {
        &self.successes
    }

    /// Failure payloads seen so far, in input order.
    #[inline]
    pub fn failures(&self) -> &[F] {
        &self.failures
    }

    #[inline]
    pub fn has_successes(&self) -> bool {
        !self.successes.is_empty()
    }

    #[inline]
    pub fn has_failures(&self) -> bool {
        !self.failures.is_empty()
    }

    /// Total number of outcomes pushed.
    #[inline]
    pub fn len(&self) -> usize {
        self.successes.len() + self.failures.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Consumes the partition and returns `(successes, failures)`.
    #[inline]
    pub fn into_parts(self) -> (OutcomeVec<S>, OutcomeVec<F>) {
        (self.successes, self.failures)
    }
}

impl<S, F> Default for Partition<S, F> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S, F> Extend<Outcome<S, F>> for Partition<S, F> {
    fn extend<I: IntoIterator<Item = Outcome<S, F>>>(&mut self, iter: I) {
        for outcome in iter {
            self.push(outcome);
        }
    }
}

impl<S, F> FromIterator<Outcome<S, F>> for Partition<S, F> {
    fn from_iter<I: IntoIterator<Item = Outcome<S, F>>>(iter: I) -> Self {
        let mut partition = Self::new();
        partition.extend(iter);
        partition
    }
}
