use core::iter::FusedIterator;

use crate::outcome::core::Outcome;

/// Borrowing iterator over the success payload, created by [`Outcome::iter`].
pub struct Iter<'a, S> {
    inner: Option<&'a S>,
}

impl<'a, S> Iterator for Iter<'a, S> {
    type Item = &'a S;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.take()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = usize::from(self.inner.is_some());
        (len, Some(len))
    }
}

impl<S> ExactSizeIterator for Iter<'_, S> {}

impl<S> FusedIterator for Iter<'_, S> {}

/// Borrowing iterator over the failure payload, created by [`Outcome::iter_failure`].
pub struct FailureIter<'a, F> {
    inner: Option<&'a F>,
}

impl<'a, F> Iterator for FailureIter<'a, F> {
    type Item = &'a F;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.take()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = usize::from(self.inner.is_some());
        (len, Some(len))
    }
}

impl<F> ExactSizeIterator for FailureIter<'_, F> {}

impl<F> FusedIterator for FailureIter<'_, F> {}

/// Owning iterator over the success payload.
pub struct IntoIter<S> {
    inner: Option<S>,
}

impl<S> Iterator for IntoIter<S> {
    type Item = S;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.take()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = usize::from(self.inner.is_some());
        (len, Some(len))
    }
}

impl<S> ExactSizeIterator for IntoIter<S> {}

impl<S> FusedIterator for IntoIter<S> {}

impl<S, F> IntoIterator for Outcome<S, F> {
    type Item = S;
    type IntoIter = IntoIter<S>;

    fn into_iter(self) -> Self::IntoIter {
        IntoIter { inner: self.into_success() }
    }
}

impl<'a, S, F> IntoIterator for &'a Outcome<S, F> {
    type Item = &'a S;
    type IntoIter = Iter<'a, S>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<S, F> Outcome<S, F> {
    /// Iterates over the success payload: one item on a success, none on a failure.
    pub fn iter(&self) -> Iter<'_, S> {
        Iter { inner: self.as_success() }
    }

    pub fn iter_failure(&self) -> FailureIter<'_, F> {
        FailureIter { inner: self.as_failure() }
    }
}
