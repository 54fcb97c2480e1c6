//! # Satisfy
//!
//! Tri-state predicate combinators for matcher and assertion libraries.
//!
//! ## Philosophy
//!
//! A matcher can do more than say yes or no. It can also fail to reach a
//! verdict, for instance when the subject it needs is missing. **Satisfy**
//! keeps that third outcome and gives it a precise algebra:
//! - `all_of` is `Fail` if any child fails, else `DoesNotMatch` if any child
//!   does not match, else `Matches`.
//! - `any_of` is `Fail` if any child fails, else `Matches` if any child
//!   matches, else `DoesNotMatch`.
//! - Every child always runs, so the aggregate message describes the whole
//!   compound condition.
//!
//! ## Quick Example
//!
//! ```rust
//! use satisfy::predicate::*;
//! use satisfy::{all_of, Expression, PredicateStatus};
//!
//! let small_even = all_of![
//!     be_greater_than(0),
//!     be_less_than(10),
//!     satisfy("be even", |n: &i32| n % 2 == 0),
//! ];
//!
//! let result = small_even.satisfies(&Expression::value(7)).unwrap();
//! assert_eq!(result.status(), PredicateStatus::DoesNotMatch);
//! assert_eq!(
//!     result.message().to_string(),
//!     "expected to match all of: {be greater than <0>}, and {be less than <10>}, and {be even}, got 7"
//! );
//! ```
//!
//! ## Features
//!
//! - `tracing`: emit `tracing` events while combinators aggregate.
//! - `serde`: `Serialize`/`Deserialize` for statuses, messages and results.
//! - `bridge`: adapter for dynamically typed hosts using JSON values.
//! - `proptest`: `Arbitrary` for `PredicateStatus`.

#![warn(missing_docs)]
#![warn(missing_debug_implementations)]

pub mod error;
pub mod expression;
pub mod message;
pub mod monoid;
pub mod predicate;
pub mod semigroup;
pub mod status;
pub mod testing;

#[cfg(feature = "bridge")]
pub mod bridge;

// Re-exports
pub use error::EvaluationError;
pub use expression::{Expression, Location};
pub use message::{ExpectationMessage, PredicateResult};
pub use monoid::Monoid;
pub use semigroup::Semigroup;
pub use status::PredicateStatus;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::error::EvaluationError;
    pub use crate::expression::{Expression, Location};
    pub use crate::message::{ExpectationMessage, PredicateResult};
    pub use crate::predicate::prelude::*;
    pub use crate::status::PredicateStatus;
    pub use crate::{Monoid, Semigroup};
}
