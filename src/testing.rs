//! Testing utilities and helpers
//!
//! Assertion macros for [`PredicateResult`] values and a scripted
//! [`StubPredicate`] for exercising combinators, plus property-based testing
//! support behind the `proptest` feature.
//!
//! # Examples
//!
//! ```rust
//! use satisfy::testing::StubPredicate;
//! use satisfy::predicate::{all_of, Predicate};
//! use satisfy::{assert_does_not_match, Expression, PredicateStatus};
//!
//! let passing = StubPredicate::new(PredicateStatus::Matches, "be ready");
//! let failing = StubPredicate::new(PredicateStatus::DoesNotMatch, "be warm");
//!
//! let result = all_of([passing.clone(), failing]).satisfies(&Expression::value(1)).unwrap();
//! assert_does_not_match!(result);
//! assert_eq!(passing.calls(), 1);
//! ```

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use crate::predicate::combinators::impl_compose_operators;
use crate::predicate::Predicate;
use crate::{EvaluationError, ExpectationMessage, Expression, PredicateResult, PredicateStatus};

#[derive(Debug, Clone)]
enum Script {
    Answer(PredicateStatus),
    Raise(String),
}

/// A predicate that returns a fixed outcome and counts its invocations.
///
/// Clones share the counter, so a clone can be handed to a combinator while
/// the original is kept for assertions. The subject is never evaluated.
#[derive(Debug, Clone)]
pub struct StubPredicate {
    script: Script,
    phrase: String,
    calls: Arc<AtomicUsize>,
}

impl StubPredicate {
    /// Always answer `status`, described by `phrase`.
    pub fn new(status: PredicateStatus, phrase: impl Into<String>) -> Self {
        StubPredicate {
            script: Script::Answer(status),
            phrase: phrase.into(),
            calls: Arc::new(AtomicUsize::new(0)),
        }
    }

    /// Always raise a propagated failure with `message`.
    pub fn erroring(message: impl Into<String>) -> Self {
        StubPredicate {
            script: Script::Raise(message.into()),
            phrase: String::from("raise"),
            calls: Arc::new(AtomicUsize::new(0)),
        }
    }

    /// Number of times this stub (or a clone) was evaluated.
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

impl<T> Predicate<T> for StubPredicate {
    fn satisfies(&self, _actual: &Expression<'_, T>) -> Result<PredicateResult, EvaluationError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        match &self.script {
            Script::Answer(status) => Ok(PredicateResult::new(
                *status,
                ExpectationMessage::expected_actual_value_to(self.phrase.clone()),
            )),
            Script::Raise(message) => Err(EvaluationError::new(message.clone())),
        }
    }
}

impl_compose_operators!([] StubPredicate);

/// Assert that a predicate result matched.
///
/// # Example
///
/// ```rust
/// use satisfy::{assert_matches, ExpectationMessage, PredicateResult};
///
/// let result = PredicateResult::from_bool(true, ExpectationMessage::expected_to("be set"));
/// assert_matches!(result);
/// ```
#[macro_export]
macro_rules! assert_matches {
    ($result:expr) => {
        match $result {
            result => {
                if result.status() != $crate::PredicateStatus::Matches {
                    panic!(
                        "Expected matches, got {}: {}",
                        result.status(),
                        result.message()
                    );
                }
            }
        }
    };
}

/// Assert that a predicate result evaluated cleanly and did not match.
#[macro_export]
macro_rules! assert_does_not_match {
    ($result:expr) => {
        match $result {
            result => {
                if result.status() != $crate::PredicateStatus::DoesNotMatch {
                    panic!(
                        "Expected doesNotMatch, got {}: {}",
                        result.status(),
                        result.message()
                    );
                }
            }
        }
    };
}

/// Assert that a predicate result failed, optionally with a given phrase.
///
/// # Example
///
/// ```rust
/// use satisfy::{assert_fails, ExpectationMessage, PredicateResult, PredicateStatus};
///
/// let result = PredicateResult::new(PredicateStatus::Fail, ExpectationMessage::fail("no subject"));
/// assert_fails!(result, "no subject");
/// ```
#[macro_export]
macro_rules! assert_fails {
    ($result:expr) => {
        match $result {
            result => {
                if result.status() != $crate::PredicateStatus::Fail {
                    panic!(
                        "Expected fail, got {}: {}",
                        result.status(),
                        result.message()
                    );
                }
            }
        }
    };
    ($result:expr, $phrase:expr) => {
        match $result {
            result => {
                $crate::assert_fails!(&result);
                assert_eq!(result.message().expected_message(), $phrase);
            }
        }
    };
}

#[cfg(feature = "proptest")]
use proptest::prelude::*;

#[cfg(feature = "proptest")]
impl Arbitrary for PredicateStatus {
    type Parameters = ();
    type Strategy = BoxedStrategy<Self>;

    fn arbitrary_with(_args: Self::Parameters) -> Self::Strategy {
        prop_oneof![
            Just(PredicateStatus::Matches),
            Just(PredicateStatus::DoesNotMatch),
            Just(PredicateStatus::Fail),
        ]
        .boxed()
    }
}
