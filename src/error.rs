//! Propagated evaluation failures
//!
//! Two failure channels exist and are kept apart:
//!
//! - A [`PredicateStatus::Fail`](crate::PredicateStatus::Fail) status is data.
//!   It is aggregated by combinators like any other status.
//! - An [`EvaluationError`] aborts evaluation. Combinators never catch it; it
//!   propagates out through `?` and stops the remaining children from running.
//!
//! # Example
//!
//! ```
//! use satisfy::{EvaluationError, Location};
//!
//! let err = EvaluationError::new("connection reset").at(Location::new("tests/api.rs", 12));
//! assert_eq!(err.to_string(), "connection reset (at tests/api.rs:12)");
//! ```

use std::error::Error as StdError;
use std::fmt;

use crate::Location;

/// An exceptional abort raised while evaluating a subject or a predicate.
///
/// Clonable so that a memoized [`Expression`](crate::Expression) can replay
/// the same failure on every evaluation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EvaluationError {
    message: String,
    location: Option<Location>,
}

impl EvaluationError {
    /// Create an error with no location attached.
    pub fn new(message: impl Into<String>) -> Self {
        EvaluationError {
            message: message.into(),
            location: None,
        }
    }

    /// Attach the location of the expression being evaluated.
    ///
    /// An already attached location is replaced.
    pub fn at(mut self, location: Location) -> Self {
        self.location = Some(location);
        self
    }

    /// The failure description.
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Where the failing expression was written, if known.
    pub fn location(&self) -> Option<&Location> {
        self.location.as_ref()
    }
}

impl fmt::Display for EvaluationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)?;
        if let Some(location) = &self.location {
            write!(f, " (at {})", location)?;
        }
        Ok(())
    }
}

impl StdError for EvaluationError {}
