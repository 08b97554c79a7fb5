use crate::types::alloc_type::BTreeSet;
use crate::types::{OutcomeError, Side};

/// Railway-style container holding exactly one of a success value or a failure value.
///
/// `Outcome<S, F>` represents the disjoint result of an operation. Success values flow
/// through transformations such as [`and`](Outcome::and) and
/// [`and_result_of`](Outcome::and_result_of), while failure values pass through untouched
/// unless an operation explicitly targets them ([`map_failure`](Outcome::map_failure),
/// [`map_both`](Outcome::map_both), [`or`](Outcome::or)).
///
/// Every combinator consumes `self` and returns a new value, so an `Outcome` is never
/// mutated after construction. Supplier closures are `FnOnce` and are only invoked on the
/// branch that needs them.
///
/// # Equality
///
/// Two successes compare equal when their payloads do. A failure is equal only to itself
/// (the same instance), never to another failure with an equal payload and never to a
/// success. See the [`PartialEq`] implementation for details.
///
/// # Type Parameters
///
/// * `S` - The success payload type
/// * `F` - The failure payload type
///
/// # Examples
///
/// ```
/// use outcome_rail::Outcome;
///
/// let parsed: Outcome<i32, &str> = Outcome::success(21);
/// let doubled = parsed.and_result_of(|x| x * 2);
/// assert_eq!(doubled.or_else(0), 42);
///
/// let missing: Outcome<i32, &str> = Outcome::failure("missing");
/// assert_eq!(missing.or_else(0), 0);
/// ```
#[must_use]
#[derive(Clone, Copy, Debug)]
pub enum Outcome<S, F> {
    Success(S),
    Failure(F),
}

impl<S, F> Outcome<S, F> {
    /// Creates a success.
    ///
    /// # Examples
    ///
    /// ```
    /// use outcome_rail::Outcome;
    ///
    /// let outcome = Outcome::<i32, &str>::success(7);
    /// assert!(outcome.is_success());
    /// ```
    #[inline]
    pub fn success(value: S) -> Self {
        Self::Success(value)
    }

    /// Creates a failure.
    ///
    /// # Examples
    ///
    /// ```
    /// use outcome_rail::Outcome;
    ///
    /// let outcome = Outcome::<i32, &str>::failure("boom");
    /// assert!(outcome.is_failure());
    /// ```
    #[inline]
    pub fn failure(error: F) -> Self {
        Self::Failure(error)
    }

    /// Creates a success from a payload that may be absent.
    ///
    /// # Errors
    ///
    /// Returns [`OutcomeError::AbsentPayload`] when `candidate` is `None`.
    ///
    /// # Examples
    ///
    /// ```
    /// use outcome_rail::{Outcome, OutcomeError, Side};
    ///
    /// let ok = Outcome::<i32, &str>::try_success(Some(1));
    /// assert!(ok.is_ok());
    ///
    /// let err = Outcome::<i32, &str>::try_success(None);
    /// assert_eq!(err.unwrap_err(), OutcomeError::AbsentPayload(Side::Success));
    /// ```
    #[inline]
    pub fn try_success(candidate: Option<S>) -> Result<Self, OutcomeError> {
        candidate
            .map(Self::Success)
            .ok_or(OutcomeError::AbsentPayload(Side::Success))
    }

    /// Creates a failure from a payload that may be absent.
    ///
    /// # Errors
    ///
    /// Returns [`OutcomeError::AbsentPayload`] when `candidate` is `None`.
    #[inline]
    pub fn try_failure(candidate: Option<F>) -> Result<Self, OutcomeError> {
        candidate
            .map(Self::Failure)
            .ok_or(OutcomeError::AbsentPayload(Side::Failure))
    }

    /// Wraps a present value as a success, or falls back to `on_absent` as the failure.
    ///
    /// # Examples
    ///
    /// ```
    /// use outcome_rail::Outcome;
    ///
    /// let name: Option<&str> = None;
    /// let outcome = Outcome::of_nullable(name, "name can't be empty");
    /// assert_eq!(outcome.into_failure(), Some("name can't be empty"));
    /// ```
    #[inline]
    pub fn of_nullable(candidate: Option<S>, on_absent: F) -> Self {
        Self::of_nullable_with(candidate, || on_absent)
    }

    /// Like [`of_nullable`](Outcome::of_nullable), computing the failure lazily.
    ///
    /// `on_absent` runs at most once, and only when `candidate` is `None`.
    #[inline]
    pub fn of_nullable_with<A>(candidate: Option<S>, on_absent: A) -> Self
    where
        A: FnOnce() -> F,
    {
        match candidate {
            Some(value) => Self::Success(value),
            None => Self::Failure(on_absent()),
        }
    }

    /// Converts an optional container into an outcome, using `on_empty` as the failure.
    ///
    /// # Examples
    ///
    /// ```
    /// use outcome_rail::Outcome;
    ///
    /// let port = "8080".parse::<u16>().ok();
    /// let outcome = Outcome::of_optional(port, "invalid port");
    /// assert_eq!(outcome.into_success(), Some(8080));
    /// ```
    #[inline]
    pub fn of_optional(optional: Option<S>, on_empty: F) -> Self {
        Self::of_nullable(optional, on_empty)
    }

    /// Like [`of_optional`](Outcome::of_optional), computing the failure lazily.
    #[inline]
    pub fn of_optional_with<A>(optional: Option<S>, on_empty: A) -> Self
    where
        A: FnOnce() -> F,
    {
        Self::of_nullable_with(optional, on_empty)
    }

    /// Returns `true` if the outcome is a success.
    #[must_use]
    #[inline]
    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success(_))
    }

    /// Returns `true` if the outcome is a failure.
    #[must_use]
    #[inline]
    pub fn is_failure(&self) -> bool {
        !self.is_success()
    }

    /// Borrows both payloads, producing an `Outcome<&S, &F>`.
    #[inline]
    pub fn as_ref(&self) -> Outcome<&S, &F> {
        match self {
            Self::Success(value) => Outcome::Success(value),
            Self::Failure(error) => Outcome::Failure(error),
        }
    }

    /// Returns the success payload by reference, if any.
    #[must_use]
    #[inline]
    pub fn as_success(&self) -> Option<&S> {
        match self {
            Self::Success(value) => Some(value),
            Self::Failure(_) => None,
        }
    }

    /// Returns the failure payload by reference, if any.
    #[must_use]
    #[inline]
    pub fn as_failure(&self) -> Option<&F> {
        match self {
            Self::Success(_) => None,
            Self::Failure(error) => Some(error),
        }
    }

    /// Extracts the success payload, if any.
    #[must_use]
    #[inline]
    pub fn into_success(self) -> Option<S> {
        match self {
            Self::Success(value) => Some(value),
            Self::Failure(_) => None,
        }
    }

    /// Extracts the failure payload, if any.
    #[must_use]
    #[inline]
    pub fn into_failure(self) -> Option<F> {
        match self {
            Self::Success(_) => None,
            Self::Failure(error) => Some(error),
        }
    }

    /// Returns the success payload, or an invalid-state error on a failure.
    ///
    /// # Errors
    ///
    /// Returns [`OutcomeError::InvalidState`] when called on a failure.
    ///
    /// # Examples
    ///
    /// ```
    /// use outcome_rail::{Outcome, OutcomeError, Side};
    ///
    /// let failed = Outcome::<i32, &str>::failure("x");
    /// assert_eq!(
    ///     failed.get_success(),
    ///     Err(OutcomeError::InvalidState { expected: Side::Success, found: Side::Failure })
    /// );
    /// ```
    #[inline]
    pub fn get_success(&self) -> Result<&S, OutcomeError> {
        self.as_success()
            .ok_or(OutcomeError::invalid_state(Side::Success))
    }

    /// Returns the failure payload, or an invalid-state error on a success.
    ///
    /// # Errors
    ///
    /// Returns [`OutcomeError::InvalidState`] when called on a success.
    #[inline]
    pub fn get_failure(&self) -> Result<&F, OutcomeError> {
        self.as_failure()
            .ok_or(OutcomeError::invalid_state(Side::Failure))
    }

    /// Returns the success payload.
    ///
    /// # Panics
    ///
    /// Panics with an invalid-state message when called on a failure.
    ///
    /// # Examples
    ///
    /// ```
    /// use outcome_rail::Outcome;
    ///
    /// let outcome = Outcome::<i32, &str>::success(3);
    /// assert_eq!(*outcome.success_unchecked(), 3);
    /// ```
    #[track_caller]
    #[inline]
    pub fn success_unchecked(&self) -> &S {
        match self {
            Self::Success(value) => value,
            Self::Failure(_) => panic!("{}", OutcomeError::invalid_state(Side::Success)),
        }
    }

    /// Returns the failure payload.
    ///
    /// # Panics
    ///
    /// Panics with an invalid-state message when called on a success.
    #[track_caller]
    #[inline]
    pub fn failure_unchecked(&self) -> &F {
        match self {
            Self::Success(_) => panic!("{}", OutcomeError::invalid_state(Side::Failure)),
            Self::Failure(error) => error,
        }
    }

    /// Consumes the outcome and returns the success payload.
    ///
    /// # Panics
    ///
    /// Panics with an invalid-state message when called on a failure.
    #[track_caller]
    #[inline]
    pub fn into_success_unchecked(self) -> S {
        match self {
            Self::Success(value) => value,
            Self::Failure(_) => panic!("{}", OutcomeError::invalid_state(Side::Success)),
        }
    }

    /// Consumes the outcome and returns the failure payload.
    ///
    /// # Panics
    ///
    /// Panics with an invalid-state message when called on a success.
    #[track_caller]
    #[inline]
    pub fn into_failure_unchecked(self) -> F {
        match self {
            Self::Success(_) => panic!("{}", OutcomeError::invalid_state(Side::Failure)),
            Self::Failure(error) => error,
        }
    }

    /// Runs `effect` on the success payload and returns the outcome unchanged.
    ///
    /// # Examples
    ///
    /// ```
    /// use outcome_rail::Outcome;
    ///
    /// let mut seen = Vec::new();
    /// let outcome = Outcome::<i32, &str>::success(5)
    ///     .if_success(|v| seen.push(*v))
    ///     .if_failure(|_| unreachable!());
    ///
    /// assert_eq!(seen, vec![5]);
    /// assert!(outcome.is_success());
    /// ```
    #[inline]
    pub fn if_success<E>(self, effect: E) -> Self
    where
        E: FnOnce(&S),
    {
        if let Self::Success(value) = &self {
            effect(value);
        }
        self
    }

    /// Runs `effect` on the failure payload and returns the outcome unchanged.
    #[inline]
    pub fn if_failure<E>(self, effect: E) -> Self
    where
        E: FnOnce(&F),
    {
        if let Self::Failure(error) = &self {
            effect(error);
        }
        self
    }

    /// Runs exactly one of the two effects and returns the outcome unchanged.
    #[inline]
    pub fn if_success_or_else<A, B>(self, on_success: A, on_failure: B) -> Self
    where
        A: FnOnce(&S),
        B: FnOnce(&F),
    {
        match &self {
            Self::Success(value) => on_success(value),
            Self::Failure(error) => on_failure(error),
        }
        self
    }

    /// Keeps a success only if `predicate` holds, otherwise turns it into `Failure(on_fail)`.
    ///
    /// Failures pass through unchanged.
    ///
    /// # Examples
    ///
    /// ```
    /// use outcome_rail::Outcome;
    ///
    /// let even = Outcome::<i32, &str>::success(4).filter(|v| v % 2 == 0, "odd");
    /// assert_eq!(even.into_success(), Some(4));
    ///
    /// let odd = Outcome::<i32, &str>::success(3).filter(|v| v % 2 == 0, "odd");
    /// assert_eq!(odd.into_failure(), Some("odd"));
    /// ```
    #[inline]
    pub fn filter<P>(self, predicate: P, on_fail: F) -> Self
    where
        P: FnOnce(&S) -> bool,
    {
        self.filter_with(predicate, || on_fail)
    }

    /// Like [`filter`](Outcome::filter), computing the failure lazily.
    ///
    /// `on_fail` runs only when the outcome is a success rejected by `predicate`.
    #[inline]
    pub fn filter_with<P, A>(self, predicate: P, on_fail: A) -> Self
    where
        P: FnOnce(&S) -> bool,
        A: FnOnce() -> F,
    {
        match self {
            Self::Success(value) if predicate(&value) => Self::Success(value),
            Self::Success(_) => Self::Failure(on_fail()),
            Self::Failure(error) => Self::Failure(error),
        }
    }

    /// Chains a step that may itself fail (monadic bind).
    ///
    /// `mapper` is invoked only on a success; a failure is propagated with its payload intact.
    ///
    /// # Examples
    ///
    /// ```
    /// use outcome_rail::Outcome;
    ///
    /// fn parse(input: &str) -> Outcome<i32, String> {
    ///     match input.parse() {
    ///         Ok(v) => Outcome::success(v),
    ///         Err(_) => Outcome::failure(format!("not a number: {input}")),
    ///     }
    /// }
    ///
    /// let outcome = Outcome::<&str, String>::success("42").and(parse);
    /// assert_eq!(outcome.into_success(), Some(42));
    /// ```
    #[inline]
    pub fn and<S2, M>(self, mapper: M) -> Outcome<S2, F>
    where
        M: FnOnce(S) -> Outcome<S2, F>,
    {
        match self {
            Self::Success(value) => mapper(value),
            Self::Failure(error) => Outcome::Failure(error),
        }
    }

    /// Maps the success payload, leaving failures untouched.
    ///
    /// # Examples
    ///
    /// ```
    /// use outcome_rail::Outcome;
    ///
    /// let len = Outcome::<&str, ()>::success("rail").and_result_of(str::len);
    /// assert_eq!(len.into_success(), Some(4));
    /// ```
    #[inline]
    pub fn and_result_of<S2, M>(self, mapper: M) -> Outcome<S2, F>
    where
        M: FnOnce(S) -> S2,
    {
        match self {
            Self::Success(value) => Outcome::Success(mapper(value)),
            Self::Failure(error) => Outcome::Failure(error),
        }
    }

    /// Maps the failure payload, leaving successes untouched.
    ///
    /// # Examples
    ///
    /// ```
    /// use outcome_rail::Outcome;
    ///
    /// let outcome = Outcome::<i32, u16>::failure(404).map_failure(|code| format!("HTTP {code}"));
    /// assert_eq!(outcome.into_failure().as_deref(), Some("HTTP 404"));
    /// ```
    #[inline]
    pub fn map_failure<F2, M>(self, mapper: M) -> Outcome<S, F2>
    where
        M: FnOnce(F) -> F2,
    {
        match self {
            Self::Success(value) => Outcome::Success(value),
            Self::Failure(error) => Outcome::Failure(mapper(error)),
        }
    }

    /// Maps whichever payload is present.
    #[inline]
    pub fn map_both<S2, F2, MS, MF>(self, success_mapper: MS, failure_mapper: MF) -> Outcome<S2, F2>
    where
        MS: FnOnce(S) -> S2,
        MF: FnOnce(F) -> F2,
    {
        match self {
            Self::Success(value) => Outcome::Success(success_mapper(value)),
            Self::Failure(error) => Outcome::Failure(failure_mapper(error)),
        }
    }

    /// Replaces a failure with `alternative`; a success is returned as is.
    ///
    /// The current failure payload is discarded.
    ///
    /// # Examples
    ///
    /// ```
    /// use outcome_rail::Outcome;
    ///
    /// let primary = Outcome::<u16, &str>::failure("primary down");
    /// let fallback = primary.or(Outcome::<u16, String>::success(8081));
    /// assert_eq!(fallback.into_success(), Some(8081));
    /// ```
    #[inline]
    pub fn or<F2>(self, alternative: Outcome<S, F2>) -> Outcome<S, F2> {
        match self {
            Self::Success(value) => Outcome::Success(value),
            Self::Failure(_) => alternative,
        }
    }

    /// Like [`or`](Outcome::or), computing the alternative lazily.
    ///
    /// `alternative` runs exactly once on a failure and never on a success.
    #[inline]
    pub fn or_with<F2, A>(self, alternative: A) -> Outcome<S, F2>
    where
        A: FnOnce() -> Outcome<S, F2>,
    {
        match self {
            Self::Success(value) => Outcome::Success(value),
            Self::Failure(_) => alternative(),
        }
    }

    /// Returns the success payload, or `default` on a failure.
    #[inline]
    pub fn or_else(self, default: S) -> S {
        self.or_else_with(|| default)
    }

    /// Returns the success payload, or the value produced by `supplier` on a failure.
    ///
    /// `supplier` is never invoked on a success.
    #[inline]
    pub fn or_else_with<A>(self, supplier: A) -> S
    where
        A: FnOnce() -> S,
    {
        match self {
            Self::Success(value) => value,
            Self::Failure(_) => supplier(),
        }
    }

    /// Leaves the outcome abstraction, mapping a failure to `None`.
    #[must_use]
    #[inline]
    pub fn or_else_absent(self) -> Option<S> {
        self.into_success()
    }

    /// Returns the success payload, or an error built from the failure payload.
    ///
    /// This is the bridge back to `?`-style propagation: `mapper` is evaluated only on a
    /// failure.
    ///
    /// # Errors
    ///
    /// Returns `Err(mapper(failure))` when the outcome is a failure.
    ///
    /// # Examples
    ///
    /// ```
    /// use outcome_rail::Outcome;
    ///
    /// #[derive(Debug, PartialEq)]
    /// struct ConfigError(String);
    ///
    /// fn port() -> Result<u16, ConfigError> {
    ///     let outcome = Outcome::<u16, &str>::failure("PORT not set");
    ///     let port = outcome.or_else_throw(|msg| ConfigError(msg.to_string()))?;
    ///     Ok(port)
    /// }
    ///
    /// assert_eq!(port(), Err(ConfigError("PORT not set".to_string())));
    /// ```
    #[inline]
    pub fn or_else_throw<E, M>(self, mapper: M) -> Result<S, E>
    where
        M: FnOnce(F) -> E,
    {
        match self {
            Self::Success(value) => Ok(value),
            Self::Failure(error) => Err(mapper(error)),
        }
    }

    /// Returns a set holding the success payload, or an empty set on a failure.
    #[must_use]
    #[inline]
    pub fn to_set(self) -> BTreeSet<S>
    where
        S: Ord,
    {
        self.into_iter().collect()
    }

    /// Returns the success payload as an `Option`.
    #[must_use]
    #[inline]
    pub fn to_optional(self) -> Option<S> {
        self.into_success()
    }

    /// Converts into a standard `Result`.
    ///
    /// # Errors
    ///
    /// Returns `Err(failure)` when the outcome is a failure.
    #[inline]
    pub fn into_result(self) -> Result<S, F> {
        match self {
            Self::Success(value) => Ok(value),
            Self::Failure(error) => Err(error),
        }
    }
}
