//! Semigroup trait for associative operations
//!
//! A Semigroup is a type with an associative binary operation. Combinators use
//! it to merge what each child predicate reports (its status and its phrase)
//! into one aggregate without caring how many children there are.
//!
//! # Mathematical Properties
//!
//! For a type to be a valid Semigroup, the `combine` operation must be associative:
//! ```text
//! a.combine(b).combine(c) == a.combine(b.combine(c))
//! ```
//!
//! # Examples
//!
//! ```
//! use satisfy::{PredicateStatus, Semigroup};
//!
//! // The most severe status wins
//! let status = PredicateStatus::Matches.combine(PredicateStatus::DoesNotMatch);
//! assert_eq!(status, PredicateStatus::DoesNotMatch);
//!
//! // Phrase lists concatenate in order
//! let phrases = vec!["{equal 1}"].combine(vec!["{be less than 5}"]);
//! assert_eq!(phrases, vec!["{equal 1}", "{be less than 5}"]);
//! ```

/// A type that supports an associative binary operation
///
/// # Laws
///
/// Implementations must satisfy the associativity law:
/// ```text
/// a.combine(b).combine(c) == a.combine(b.combine(c))
/// ```
///
/// `combine` takes `self` by value. Clone first if the originals are still needed.
pub trait Semigroup: Sized {
    /// Combine this value with another value associatively
    ///
    /// # Examples
    ///
    /// ```
    /// use satisfy::Semigroup;
    ///
    /// let v1 = vec![1, 2];
    /// let v2 = vec![3, 4];
    /// assert_eq!(v1.combine(v2), vec![1, 2, 3, 4]);
    /// ```
    fn combine(self, other: Self) -> Self;
}

impl<T> Semigroup for Vec<T> {
    #[inline]
    fn combine(mut self, other: Self) -> Self {
        self.extend(other);
        self
    }
}

impl<A: Semigroup, B: Semigroup> Semigroup for (A, B) {
    #[inline]
    fn combine(self, other: Self) -> Self {
        (self.0.combine(other.0), self.1.combine(other.1))
    }
}
