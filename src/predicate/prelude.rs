//! Predicate prelude for convenient imports
//!
//! # Example
//!
//! ```rust
//! use satisfy::predicate::prelude::*;
//! use satisfy::{Expression, PredicateStatus};
//!
//! let valid_age = be_greater_than(-1).and(be_less_than(151));
//! assert_eq!(valid_age.satisfies(&Expression::value(25)).unwrap().status(), PredicateStatus::Matches);
//! ```

// Core trait
pub use super::combinators::{define, Predicate, PredicateExt};

// Logical combinators
pub use super::combinators::{all_of, any_of, And, BoxedPredicate, Or};

// Leaf predicates
pub use super::basic::{be_greater_than, be_less_than, be_nil, equal, satisfy};
