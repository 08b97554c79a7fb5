use crate::macros::trace_event;
use crate::outcome::core::Outcome;
use crate::types::{OutcomeVec, Partition};

impl<S, F> Outcome<OutcomeVec<S>, OutcomeVec<F>> {
    /// Succeeds with every success payload only if no outcome failed.
    ///
    /// Otherwise fails with the failure payloads of the failing outcomes, in input order.
    /// An empty input yields an empty success.
    ///
    /// # Examples
    ///
    /// ```
    /// use outcome_rail::Outcome;
    ///
    /// let ok = Outcome::all(vec![Outcome::<i32, &str>::success(1), Outcome::success(2)]);
    /// assert_eq!(ok.into_success().unwrap().as_slice(), &[1, 2]);
    ///
    /// let failed = Outcome::all(vec![
    ///     Outcome::success(1),
    ///     Outcome::failure("x"),
    ///     Outcome::failure("y"),
    /// ]);
    /// assert_eq!(failed.into_failure().unwrap().as_slice(), &["x", "y"]);
    /// ```
    pub fn all<I>(results: I) -> Self
    where
        I: IntoIterator<Item = Outcome<S, F>>,
    {
        Self::partition_with(results, |successes, failures| {
            if failures.is_empty() {
                Outcome::Success(successes)
            } else {
                Outcome::Failure(failures)
            }
        })
    }

    /// Succeeds with the success payloads found if at least one outcome succeeded.
    ///
    /// Failures are ignored unless nothing succeeded, in which case every failure payload
    /// is returned. An empty input yields an empty failure.
    ///
    /// # Examples
    ///
    /// ```
    /// use outcome_rail::Outcome;
    ///
    /// let ok = Outcome::some(vec![Outcome::<i32, &str>::failure("x"), Outcome::success(1)]);
    /// assert_eq!(ok.into_success().unwrap().as_slice(), &[1]);
    ///
    /// let failed = Outcome::some(vec![Outcome::<i32, &str>::failure("x"), Outcome::failure("y")]);
    /// assert_eq!(failed.into_failure().unwrap().as_slice(), &["x", "y"]);
    /// ```
    pub fn some<I>(results: I) -> Self
    where
        I: IntoIterator<Item = Outcome<S, F>>,
    {
        Self::partition_with(results, |successes, failures| {
            if successes.is_empty() {
                Outcome::Failure(failures)
            } else {
                Outcome::Success(successes)
            }
        })
    }

    /// Splits `results` in one pass, then lets `decide` build the final outcome.
    ///
    /// This is the shared scan behind [`all`](Outcome::all) and [`some`](Outcome::some);
    /// custom aggregation policies only need to supply `decide`.
    ///
    /// # Examples
    ///
    /// ```
    /// use outcome_rail::Outcome;
    ///
    /// // Majority vote: succeed when more outcomes succeeded than failed.
    /// let votes = vec![
    ///     Outcome::<&str, &str>::success("a"),
    ///     Outcome::failure("b"),
    ///     Outcome::success("c"),
    /// ];
    /// let majority = Outcome::partition_with(votes, |successes, failures| {
    ///     if successes.len() > failures.len() {
    ///         Outcome::Success(successes)
    ///     } else {
    ///         Outcome::Failure(failures)
    ///     }
    /// });
    /// assert!(majority.is_success());
    /// ```
    pub fn partition_with<I, D>(results: I, decide: D) -> Self
    where
        I: IntoIterator<Item = Outcome<S, F>>,
        D: FnOnce(OutcomeVec<S>, OutcomeVec<F>) -> Self,
    {
        let partition: Partition<S, F> = results.into_iter().collect();
        trace_event!(
            trace,
            successes = partition.successes().len(),
            failures = partition.failures().len(),
            "partitioned outcomes"
        );
        let (successes, failures) = partition.into_parts();
        decide(successes, failures)
    }
}

/// Collects outcomes with the [`Outcome::all`] policy into any success collection.
///
/// # Examples
///
/// ```
/// use outcome_rail::{Outcome, OutcomeVec};
///
/// let collected: Outcome<Vec<i32>, OutcomeVec<&str>> =
///     vec![Outcome::success(1), Outcome::success(2)].into_iter().collect();
/// assert_eq!(collected.into_success(), Some(vec![1, 2]));
/// ```
impl<S, F, C> FromIterator<Outcome<S, F>> for Outcome<C, OutcomeVec<F>>
where
    C: FromIterator<S>,
{
    fn from_iter<I: IntoIterator<Item = Outcome<S, F>>>(iter: I) -> Self {
        let (successes, failures) = iter.into_iter().collect::<Partition<S, F>>().into_parts();
        if failures.is_empty() {
            Outcome::Success(successes.into_iter().collect())
        } else {
            Outcome::Failure(failures)
        }
    }
}
