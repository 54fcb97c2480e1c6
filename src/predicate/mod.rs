//! Tri-state predicates and their combinators
//!
//! A predicate inspects a lazily evaluated subject and answers with a
//! [`PredicateResult`](crate::PredicateResult): a [`PredicateStatus`](crate::PredicateStatus)
//! plus a human-readable message. Predicates compose with `all_of`/`any_of`,
//! with `and`/`or`, or with the `&`/`|` operators, and a compound predicate is
//! itself a predicate.
//!
//! # Philosophy
//!
//! - A failed evaluation is not the same as a false condition, so statuses
//!   are tri-state.
//! - Every child of a combinator runs, so a failure message always lists the
//!   whole compound condition, passing parts included.
//! - Propagated failures (`Err`) are never swallowed.
//!
//! # Example
//!
//! ```rust
//! use satisfy::predicate::*;
//! use satisfy::{all_of, Expression, PredicateStatus};
//!
//! let in_range = all_of![be_greater_than(0), be_less_than(10)];
//! let result = in_range.satisfies(&Expression::value(12)).unwrap();
//!
//! assert_eq!(result.status(), PredicateStatus::DoesNotMatch);
//! assert_eq!(
//!     result.message().to_string(),
//!     "expected to match all of: {be greater than <0>}, and {be less than <10>}, got 12"
//! );
//! ```

mod basic;
pub(crate) mod combinators;

pub mod prelude;

// Re-export core trait
pub use combinators::{define, Predicate, PredicateExt};

// Re-export combinator types
pub use combinators::{all_of, any_of, AllOf, And, AnyOf, BoxedPredicate, Or};

// Re-export leaf predicates
pub use basic::{
    be_greater_than, be_less_than, be_nil, equal, satisfy, BeNil, Equal, GreaterThan, LessThan,
    Satisfy,
};
