//! Predicate results and their messages
//!
//! Every predicate, leaf or compound, answers with a [`PredicateResult`]: a
//! [`PredicateStatus`] plus an [`ExpectationMessage`]. Messages are values. A
//! combinator reads the phrase out of each child's message and builds a new
//! one; nothing is edited in place.
//!
//! # Example
//!
//! ```
//! use satisfy::ExpectationMessage;
//!
//! let msg = ExpectationMessage::expected_actual_value_to("equal 3");
//! assert_eq!(msg.expected_message(), "equal 3");
//! assert_eq!(msg.render(Some("4")), "expected to equal 3, got 4");
//!
//! let msg = ExpectationMessage::expected_custom_value_to("be even", "7");
//! assert_eq!(msg.to_string(), "expected to be even, got 7");
//! ```

use std::fmt;

use crate::PredicateStatus;

/// Rendering used for an absent subject.
pub const NIL: &str = "<nil>";

/// A closed set of message shapes.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(tag = "kind", rename_all = "camelCase"))]
pub enum ExpectationMessage {
    /// A bare diagnostic, rendered verbatim.
    Fail {
        /// The diagnostic text.
        text: String,
    },
    /// "expected to <phrase>", without mentioning the actual value.
    ExpectedTo {
        /// Descriptive phrase.
        phrase: String,
    },
    /// "expected to <phrase>, got <actual>", where the actual value is
    /// supplied when the message is rendered.
    ExpectedActualValueTo {
        /// Descriptive phrase.
        phrase: String,
    },
    /// "expected to <phrase>, got <actual>" with a rendering chosen by the predicate.
    ExpectedCustomValueTo {
        /// Descriptive phrase.
        phrase: String,
        /// Rendering of the actual value.
        actual: String,
    },
    /// Another message with text appended.
    Appends {
        /// The wrapped message.
        inner: Box<ExpectationMessage>,
        /// Appended text.
        suffix: String,
    },
    /// Another message with text prepended.
    Prepends {
        /// Prepended text.
        prefix: String,
        /// The wrapped message.
        inner: Box<ExpectationMessage>,
    },
    /// Another message followed by an explanation on its own line.
    Details {
        /// The wrapped message.
        inner: Box<ExpectationMessage>,
        /// Explanation.
        details: String,
    },
}

impl ExpectationMessage {
    /// A bare diagnostic.
    pub fn fail(text: impl Into<String>) -> Self {
        ExpectationMessage::Fail { text: text.into() }
    }

    /// "expected to <phrase>".
    pub fn expected_to(phrase: impl Into<String>) -> Self {
        ExpectationMessage::ExpectedTo {
            phrase: phrase.into(),
        }
    }

    /// "expected to <phrase>, got <actual>", actual supplied at render time.
    pub fn expected_actual_value_to(phrase: impl Into<String>) -> Self {
        ExpectationMessage::ExpectedActualValueTo {
            phrase: phrase.into(),
        }
    }

    /// "expected to <phrase>, got <actual>" with an explicit rendering.
    pub fn expected_custom_value_to(phrase: impl Into<String>, actual: impl Into<String>) -> Self {
        ExpectationMessage::ExpectedCustomValueTo {
            phrase: phrase.into(),
            actual: actual.into(),
        }
    }

    /// Wrap in a message with `suffix` appended.
    pub fn appended(self, suffix: impl Into<String>) -> Self {
        ExpectationMessage::Appends {
            inner: Box::new(self),
            suffix: suffix.into(),
        }
    }

    /// Wrap in a message with `prefix` prepended.
    pub fn prepended(self, prefix: impl Into<String>) -> Self {
        ExpectationMessage::Prepends {
            prefix: prefix.into(),
            inner: Box::new(self),
        }
    }

    /// Wrap in a message followed by `details` on the next line.
    pub fn append_details(self, details: impl Into<String>) -> Self {
        ExpectationMessage::Details {
            inner: Box::new(self),
            details: details.into(),
        }
    }

    /// Append the hint leaf predicates give when they reject an absent subject.
    pub fn appended_be_nil_hint(self) -> Self {
        self.appended(" (use be_nil() to match nils)")
    }

    /// The descriptive phrase, without the "expected to" framing.
    ///
    /// # Example
    ///
    /// ```
    /// use satisfy::ExpectationMessage;
    ///
    /// let msg = ExpectationMessage::expected_to("be empty").appended(" or short");
    /// assert_eq!(msg.expected_message(), "be empty or short");
    /// ```
    pub fn expected_message(&self) -> String {
        match self {
            ExpectationMessage::Fail { text } => text.clone(),
            ExpectationMessage::ExpectedTo { phrase }
            | ExpectationMessage::ExpectedActualValueTo { phrase }
            | ExpectationMessage::ExpectedCustomValueTo { phrase, .. } => phrase.clone(),
            ExpectationMessage::Appends { inner, suffix } => {
                format!("{}{}", inner.expected_message(), suffix)
            }
            ExpectationMessage::Prepends { prefix, inner } => {
                format!("{}{}", prefix, inner.expected_message())
            }
            ExpectationMessage::Details { inner, .. } => inner.expected_message(),
        }
    }

    /// Final text. `actual` fills in `ExpectedActualValueTo`; when it is `None`
    /// the ", got ..." tail is left out.
    ///
    /// # Example
    ///
    /// ```
    /// use satisfy::ExpectationMessage;
    ///
    /// let msg = ExpectationMessage::expected_actual_value_to("be positive")
    ///     .append_details("zero is not positive");
    /// assert_eq!(
    ///     msg.render(Some("0")),
    ///     "expected to be positive, got 0\nzero is not positive"
    /// );
    /// ```
    pub fn render(&self, actual: Option<&str>) -> String {
        match self {
            ExpectationMessage::Fail { text } => text.clone(),
            ExpectationMessage::ExpectedTo { phrase } => format!("expected to {}", phrase),
            ExpectationMessage::ExpectedActualValueTo { phrase } => match actual {
                Some(actual) => format!("expected to {}, got {}", phrase, actual),
                None => format!("expected to {}", phrase),
            },
            ExpectationMessage::ExpectedCustomValueTo { phrase, actual } => {
                format!("expected to {}, got {}", phrase, actual)
            }
            ExpectationMessage::Appends { inner, suffix } => {
                format!("{}{}", inner.render(actual), suffix)
            }
            ExpectationMessage::Prepends { prefix, inner } => {
                format!("{}{}", prefix, inner.render(actual))
            }
            ExpectationMessage::Details { inner, details } => {
                format!("{}\n{}", inner.render(actual), details)
            }
        }
    }
}

impl fmt::Display for ExpectationMessage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render(None))
    }
}

/// The immutable outcome of one predicate invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PredicateResult {
    status: PredicateStatus,
    message: ExpectationMessage,
}

impl PredicateResult {
    /// Pair a status with its message.
    pub fn new(status: PredicateStatus, message: ExpectationMessage) -> Self {
        PredicateResult { status, message }
    }

    /// `Matches` or `DoesNotMatch` depending on `matches`.
    ///
    /// # Example
    ///
    /// ```
    /// use satisfy::{ExpectationMessage, PredicateResult, PredicateStatus};
    ///
    /// let result = PredicateResult::from_bool(false, ExpectationMessage::expected_to("be set"));
    /// assert_eq!(result.status(), PredicateStatus::DoesNotMatch);
    /// ```
    pub fn from_bool(matches: bool, message: ExpectationMessage) -> Self {
        PredicateResult::new(PredicateStatus::from_bool(matches), message)
    }

    /// The tri-state outcome.
    pub fn status(&self) -> PredicateStatus {
        self.status
    }

    /// The message describing the condition.
    pub fn message(&self) -> &ExpectationMessage {
        &self.message
    }

    /// Whether the condition held.
    pub fn is_match(&self) -> bool {
        self.status.is_match()
    }

    /// Split into status and message.
    pub fn into_parts(self) -> (PredicateStatus, ExpectationMessage) {
        (self.status, self.message)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_expected_message_for_every_shape() {
        assert_eq!(ExpectationMessage::fail("bad").expected_message(), "bad");
        assert_eq!(ExpectationMessage::expected_to("x").expected_message(), "x");
        assert_eq!(
            ExpectationMessage::expected_actual_value_to("x").expected_message(),
            "x"
        );
        assert_eq!(
            ExpectationMessage::expected_custom_value_to("x", "1").expected_message(),
            "x"
        );
        assert_eq!(
            ExpectationMessage::expected_to("x")
                .prepended("not ")
                .appended("!")
                .expected_message(),
            "not x!"
        );
        assert_eq!(
            ExpectationMessage::expected_to("x")
                .append_details("why")
                .expected_message(),
            "x"
        );
    }

    #[test]
    fn test_render() {
        assert_eq!(ExpectationMessage::fail("broken").render(Some("1")), "broken");
        assert_eq!(
            ExpectationMessage::expected_to("be set").render(Some("1")),
            "expected to be set"
        );
        assert_eq!(
            ExpectationMessage::expected_actual_value_to("equal 2").render(Some("1")),
            "expected to equal 2, got 1"
        );
        assert_eq!(
            ExpectationMessage::expected_actual_value_to("equal 2").render(None),
            "expected to equal 2"
        );
        assert_eq!(
            ExpectationMessage::expected_custom_value_to("equal 2", "3").render(Some("ignored")),
            "expected to equal 2, got 3"
        );
    }

    #[test]
    fn test_be_nil_hint() {
        let msg = ExpectationMessage::expected_actual_value_to("equal 2").appended_be_nil_hint();
        assert_eq!(
            msg.render(Some(NIL)),
            "expected to equal 2, got <nil> (use be_nil() to match nils)"
        );
    }

    #[test]
    fn test_result_accessors() {
        let result = PredicateResult::new(PredicateStatus::Fail, ExpectationMessage::fail("no"));
        assert_eq!(result.status(), PredicateStatus::Fail);
        assert!(!result.is_match());
        let (status, message) = result.into_parts();
        assert_eq!(status, PredicateStatus::Fail);
        assert_eq!(message, ExpectationMessage::fail("no"));
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_message_serde_shape() {
        let msg = ExpectationMessage::expected_custom_value_to("equal 1", "2");
        let json = serde_json::to_value(&msg).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"kind": "expectedCustomValueTo", "phrase": "equal 1", "actual": "2"})
        );
    }
}
