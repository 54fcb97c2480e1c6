//! Monoid trait for types with identity elements
//!
//! A `Monoid` extends `Semigroup` with an identity element, which is what lets a
//! combinator fold an arbitrary number of child outcomes without a seed value.
//!
//! # Mathematical Properties
//!
//! 1. **Associativity** (from Semigroup):
//!    ```text
//!    a.combine(b).combine(c) == a.combine(b.combine(c))
//!    ```
//! 2. **Identity**:
//!    ```text
//!    a.combine(M::empty()) == a == M::empty().combine(a)
//!    ```
//!
//! # Examples
//!
//! ```
//! use satisfy::monoid::fold_all;
//! use satisfy::PredicateStatus;
//!
//! let status = fold_all(vec![
//!     PredicateStatus::Matches,
//!     PredicateStatus::DoesNotMatch,
//!     PredicateStatus::Matches,
//! ]);
//! assert_eq!(status, PredicateStatus::DoesNotMatch);
//!
//! // Nothing to fold yields the identity
//! assert_eq!(fold_all(Vec::<PredicateStatus>::new()), PredicateStatus::Matches);
//! ```

use crate::Semigroup;

/// A `Monoid` is a `Semigroup` with an identity element.
///
/// # Laws
///
/// ```text
/// a.combine(M::empty()) == a           (right identity)
/// M::empty().combine(a) == a           (left identity)
/// ```
pub trait Monoid: Semigroup {
    /// The identity element for `combine`.
    fn empty() -> Self;
}

impl<T> Monoid for Vec<T> {
    #[inline]
    fn empty() -> Self {
        Vec::new()
    }
}

impl<A: Monoid, B: Monoid> Monoid for (A, B) {
    #[inline]
    fn empty() -> Self {
        (A::empty(), B::empty())
    }
}

/// Fold every element with `combine`, starting from the identity.
///
/// # Example
///
/// ```
/// use satisfy::monoid::fold_all;
///
/// let phrases = fold_all(vec![vec!["{a}"], vec!["{b}"], vec!["{c}"]]);
/// assert_eq!(phrases, vec!["{a}", "{b}", "{c}"]);
/// ```
pub fn fold_all<M, I>(iter: I) -> M
where
    M: Monoid,
    I: IntoIterator<Item = M>,
{
    iter.into_iter().fold(M::empty(), |acc, x| acc.combine(x))
}
