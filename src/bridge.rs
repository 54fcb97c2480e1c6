//! Bridge to a dynamically typed host object model (feature-gated)
//!
//! Hosts that cannot name Rust types hand over opaque [`HostMatcher`] handles
//! and JSON values. [`satisfy_all_of_matcher`] and [`satisfy_any_of_matcher`]
//! wrap each handle in a typed adapter, run the regular combinators, and
//! translate the result back. No aggregation happens here.
//!
//! # Example
//!
//! ```rust
//! use satisfy::bridge::{satisfy_all_of_matcher, HostMatcher, HostStatus, HostValue};
//! use satisfy::predicate::{be_nil, equal};
//! use satisfy::Location;
//! use serde_json::json;
//!
//! let is_three = HostMatcher::from_predicate(equal(HostValue(json!(3))));
//! let not_nil = HostMatcher::from_predicate(be_nil()).negated();
//! let both = satisfy_all_of_matcher(vec![is_three, not_nil]);
//!
//! let actual = || Ok(Some(json!(3)));
//! let result = both.satisfies(&actual, &Location::new("host.js", 1)).unwrap();
//! assert_eq!(result.status, HostStatus::Matches);
//! ```

use std::fmt;
use std::sync::Arc;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::predicate::{all_of, any_of, Predicate};
use crate::{
    EvaluationError, ExpectationMessage, Expression, Location, PredicateResult, PredicateStatus,
};

/// A host value. Renders as JSON text.
#[derive(Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct HostValue(pub Value);

impl fmt::Debug for HostValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<Value> for HostValue {
    fn from(value: Value) -> Self {
        HostValue(value)
    }
}

/// Status codes of the host result shape.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(into = "u8", try_from = "u8")]
#[repr(u8)]
pub enum HostStatus {
    /// Code 0.
    Matches = 0,
    /// Code 1.
    DoesNotMatch = 1,
    /// Code 2.
    Fail = 2,
}

/// A status code the host sent that has no meaning here.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UnknownStatus(pub u8);

impl fmt::Display for UnknownStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown host status code {}", self.0)
    }
}

impl std::error::Error for UnknownStatus {}

impl From<HostStatus> for u8 {
    fn from(status: HostStatus) -> Self {
        status as u8
    }
}

impl TryFrom<u8> for HostStatus {
    type Error = UnknownStatus;

    fn try_from(code: u8) -> Result<Self, Self::Error> {
        match code {
            0 => Ok(HostStatus::Matches),
            1 => Ok(HostStatus::DoesNotMatch),
            2 => Ok(HostStatus::Fail),
            other => Err(UnknownStatus(other)),
        }
    }
}

impl From<PredicateStatus> for HostStatus {
    fn from(status: PredicateStatus) -> Self {
        match status {
            PredicateStatus::Matches => HostStatus::Matches,
            PredicateStatus::DoesNotMatch => HostStatus::DoesNotMatch,
            PredicateStatus::Fail => HostStatus::Fail,
        }
    }
}

impl From<HostStatus> for PredicateStatus {
    fn from(status: HostStatus) -> Self {
        match status {
            HostStatus::Matches => PredicateStatus::Matches,
            HostStatus::DoesNotMatch => PredicateStatus::DoesNotMatch,
            HostStatus::Fail => PredicateStatus::Fail,
        }
    }
}

/// The host's own result shape.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HostResult {
    /// Status code.
    pub status: HostStatus,
    /// Message, in the same closed set the typed engine uses.
    pub message: ExpectationMessage,
}

impl From<PredicateResult> for HostResult {
    fn from(result: PredicateResult) -> Self {
        let (status, message) = result.into_parts();
        HostResult {
            status: status.into(),
            message,
        }
    }
}

impl From<HostResult> for PredicateResult {
    fn from(result: HostResult) -> Self {
        PredicateResult::new(result.status.into(), result.message)
    }
}

/// How a host matcher reads the subject.
pub type HostActual<'a> = dyn Fn() -> Result<Option<Value>, EvaluationError> + 'a;

type HostFn =
    dyn Fn(&HostActual<'_>, &Location) -> Result<HostResult, EvaluationError> + Send + Sync;

/// An opaque, shareable matcher handle of the host.
#[derive(Clone)]
pub struct HostMatcher(Arc<HostFn>);

impl HostMatcher {
    /// Wrap a host-side evaluation function.
    pub fn new<F>(evaluate: F) -> Self
    where
        F: Fn(&HostActual<'_>, &Location) -> Result<HostResult, EvaluationError>
            + Send
            + Sync
            + 'static,
    {
        HostMatcher(Arc::new(evaluate))
    }

    /// Expose a typed predicate over host values as a host handle.
    pub fn from_predicate<P>(predicate: P) -> Self
    where
        P: Predicate<HostValue> + 'static,
    {
        HostMatcher::new(move |actual, location| {
            let expression = Expression::with_location(
                || actual().map(|value| value.map(HostValue)),
                location.clone(),
            );
            predicate.satisfies(&expression).map(HostResult::from)
        })
    }

    /// A handle whose verdict is inverted; `Fail` stays `Fail`.
    pub fn negated(self) -> Self {
        HostMatcher::new(move |actual, location| {
            let result = self.satisfies(actual, location)?;
            let status = PredicateStatus::from(result.status).negated();
            Ok(HostResult {
                status: status.into(),
                message: result.message.prepended("not "),
            })
        })
    }

    /// Evaluate against the host's subject accessor.
    pub fn satisfies(
        &self,
        actual: &HostActual<'_>,
        location: &Location,
    ) -> Result<HostResult, EvaluationError> {
        (self.0)(actual, location)
    }
}

impl fmt::Debug for HostMatcher {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HostMatcher").finish_non_exhaustive()
    }
}

/// Typed adapter around a host handle.
struct HostPredicate(HostMatcher);

impl Predicate<HostValue> for HostPredicate {
    fn satisfies(
        &self,
        actual: &Expression<'_, HostValue>,
    ) -> Result<PredicateResult, EvaluationError> {
        let evaluate = || {
            actual
                .evaluate()
                .map(|value| value.map(|host| host.0.clone()))
        };
        let result = self.0.satisfies(&evaluate, actual.location())?;
        #[cfg(feature = "tracing")]
        tracing::debug!(status = ?result.status, "translated host result");
        Ok(result.into())
    }
}

fn bridge<C, F>(matchers: Vec<HostMatcher>, combine: F) -> HostMatcher
where
    C: Predicate<HostValue> + 'static,
    F: FnOnce(Vec<HostPredicate>) -> C,
{
    let compound = combine(matchers.into_iter().map(HostPredicate).collect());
    HostMatcher::new(move |actual, location| {
        let expression = Expression::with_location(
            || actual().map(|value| value.map(HostValue)),
            location.clone(),
        );
        compound.satisfies(&expression).map(HostResult::from)
    })
}

/// Host entry point for `all_of`.
///
/// An empty list yields the same `Fail` result as the typed combinator.
pub fn satisfy_all_of_matcher(matchers: Vec<HostMatcher>) -> HostMatcher {
    bridge(matchers, all_of)
}

/// Host entry point for `any_of`.
pub fn satisfy_any_of_matcher(matchers: Vec<HostMatcher>) -> HostMatcher {
    bridge(matchers, any_of)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::predicate::{be_nil, equal};
    use serde_json::json;
    use std::cell::Cell;

    fn here() -> Location {
        Location::new("host.js", 10)
    }

    fn fixed(status: HostStatus, phrase: &'static str) -> HostMatcher {
        HostMatcher::new(move |_, _| {
            Ok(HostResult {
                status,
                message: ExpectationMessage::expected_actual_value_to(phrase),
            })
        })
    }

    #[test]
    fn test_status_round_trip() {
        for status in [
            PredicateStatus::Matches,
            PredicateStatus::DoesNotMatch,
            PredicateStatus::Fail,
        ] {
            assert_eq!(PredicateStatus::from(HostStatus::from(status)), status);
        }
        assert_eq!(HostStatus::try_from(3), Err(UnknownStatus(3)));
    }

    #[test]
    fn test_result_round_trip_through_json() {
        let result = PredicateResult::new(
            PredicateStatus::DoesNotMatch,
            ExpectationMessage::expected_custom_value_to("equal 1", "2"),
        );
        let host = HostResult::from(result.clone());
        let json = serde_json::to_value(&host).unwrap();
        assert_eq!(json["status"], json!(1));
        let back: HostResult = serde_json::from_value(json).unwrap();
        assert_eq!(PredicateResult::from(back), result);
    }

    #[test]
    fn test_empty_list_fails() {
        let matcher = satisfy_all_of_matcher(Vec::new());
        let evaluated = Cell::new(false);
        let actual = || {
            evaluated.set(true);
            Ok(Some(json!(1)))
        };
        let result = matcher.satisfies(&actual, &here()).unwrap();
        assert_eq!(result.status, HostStatus::Fail);
        assert_eq!(
            result.message.expected_message(),
            "all_of must be called with at least one matcher"
        );
        assert!(!evaluated.get());
    }

    #[test]
    fn test_delegates_aggregation() {
        let matcher = satisfy_all_of_matcher(vec![
            fixed(HostStatus::Matches, "be a number"),
            fixed(HostStatus::DoesNotMatch, "be odd"),
        ]);
        let actual = || Ok(Some(json!(4)));
        let result = matcher.satisfies(&actual, &here()).unwrap();
        assert_eq!(result.status, HostStatus::DoesNotMatch);
        assert_eq!(
            result.message,
            ExpectationMessage::expected_custom_value_to(
                "match all of: {be a number}, and {be odd}",
                "4"
            )
        );
    }

    #[test]
    fn test_any_of_bridge() {
        let matcher = satisfy_any_of_matcher(vec![
            fixed(HostStatus::DoesNotMatch, "be a string"),
            fixed(HostStatus::Matches, "be a number"),
        ]);
        let actual = || Ok(None);
        let result = matcher.satisfies(&actual, &here()).unwrap();
        assert_eq!(result.status, HostStatus::Matches);
        assert_eq!(
            result.message,
            ExpectationMessage::expected_actual_value_to(
                "match one of: {be a string}, or {be a number}"
            )
        );
    }

    #[test]
    fn test_subject_read_once_and_location_forwarded() {
        let seen = Arc::new(std::sync::Mutex::new(Vec::new()));
        let recorder = {
            let seen = Arc::clone(&seen);
            HostMatcher::new(move |actual, location| {
                seen.lock().unwrap().push(location.clone());
                let value = actual()?;
                Ok(HostResult {
                    status: HostStatus::from(PredicateStatus::from_bool(value.is_some())),
                    message: ExpectationMessage::expected_to("exist"),
                })
            })
        };
        let matcher = satisfy_all_of_matcher(vec![recorder.clone(), recorder]);
        let reads = Cell::new(0);
        let actual = || {
            reads.set(reads.get() + 1);
            Ok(Some(json!("x")))
        };
        let result = matcher.satisfies(&actual, &here()).unwrap();
        assert_eq!(result.status, HostStatus::Matches);
        assert_eq!(reads.get(), 1);
        assert_eq!(*seen.lock().unwrap(), vec![here(), here()]);
    }

    #[test]
    fn test_propagates_host_failure() {
        let broken = HostMatcher::new(|_, _| Err(EvaluationError::new("host threw")));
        let matcher = satisfy_all_of_matcher(vec![broken]);
        let actual = || Ok(Some(json!(null)));
        let err = matcher.satisfies(&actual, &here()).unwrap_err();
        assert_eq!(err.message(), "host threw");
    }

    #[test]
    fn test_typed_predicates_through_bridge() {
        let matcher = satisfy_all_of_matcher(vec![
            HostMatcher::from_predicate(equal(HostValue(json!({"id": 1})))),
            HostMatcher::from_predicate(be_nil()).negated(),
        ]);
        let actual = || Ok(Some(json!({"id": 2})));
        let result = matcher.satisfies(&actual, &here()).unwrap();
        assert_eq!(result.status, HostStatus::DoesNotMatch);
        assert_eq!(
            result.message.render(None),
            r#"expected to match all of: {equal <{"id":1}>}, and {not be nil}, got {"id":2}"#
        );
    }

    #[cfg(feature = "tracing")]
    mod tracing_tests {
        use super::*;
        use tracing_test::traced_test;

        #[traced_test]
        #[test]
        fn test_logs_translated_host_status() {
            let matcher = satisfy_all_of_matcher(vec![fixed(HostStatus::DoesNotMatch, "be odd")]);
            let actual = || Ok(Some(json!(2)));
            matcher.satisfies(&actual, &here()).unwrap();
            assert!(logs_contain("translated host result"));
            assert!(logs_contain("status=DoesNotMatch"));
        }
    }
}
