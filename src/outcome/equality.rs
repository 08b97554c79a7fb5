use core::fmt::{self, Display};
use core::hash::{Hash, Hasher};
use core::{mem, ptr};

use crate::outcome::core::Outcome;

/// Successes compare by payload; a failure is equal only to itself.
///
/// Two distinct failures are never equal, even when their payloads are. Identity is the
/// memory location of the `Outcome`, so a copied or moved failure is a different instance.
/// The relation stays reflexive, symmetric and transitive, which is why [`Eq`] is
/// implemented as well. Zero-sized outcomes are the exception; see the [`Eq`] impl.
///
/// # Examples
///
/// ```
/// use outcome_rail::Outcome;
///
/// assert_eq!(Outcome::<i32, i32>::success(1), Outcome::success(1));
/// assert_ne!(Outcome::<i32, i32>::failure(1), Outcome::failure(1));
/// assert_ne!(Outcome::<i32, i32>::success(1), Outcome::failure(1));
///
/// let failed = Outcome::<i32, i32>::failure(1);
/// assert!(failed.eq(&failed));
/// ```
impl<S: PartialEq, F> PartialEq for Outcome<S, F> {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Outcome::Success(left), Outcome::Success(right)) => left == right,
            (Outcome::Failure(_), Outcome::Failure(_)) => {
                mem::size_of::<Self>() != 0 && ptr::eq(self, other)
            }
            _ => false,
        }
    }
}

/// Identity needs an address of its own. When `Outcome<S, F>` is zero-sized (for example
/// `Outcome<Infallible, ()>`) every instance may share one address, so such a failure is
/// not equal to anything, itself included. This is the one case where reflexivity does not
/// hold; do not use zero-sized failing outcomes as map or set keys.
impl<S: Eq, F> Eq for Outcome<S, F> {}

/// Successes hash by payload, failures by identity.
///
/// Consistent with the [`PartialEq`] implementation: equal-by-value failures are distinct
/// instances and may land in different buckets.
impl<S: Hash, F> Hash for Outcome<S, F> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        match self {
            Outcome::Success(value) => value.hash(state),
            Outcome::Failure(_) => ptr::from_ref(self).hash(state),
        }
    }
}

impl<S: Display, F: Display> Display for Outcome<S, F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Outcome::Success(value) => write!(f, "Success({value})"),
            Outcome::Failure(error) => write!(f, "Failure({error})"),
        }
    }
}
