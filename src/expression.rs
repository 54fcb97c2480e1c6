//! Deferred subjects
//!
//! An [`Expression`] is how a predicate reaches the value under test. The value
//! is produced on first use and memoized, so every child of a combinator sees
//! the same subject and the producing closure runs at most once, no matter how
//! many predicates inspect it.
//!
//! # Example
//!
//! ```
//! use std::cell::Cell;
//! use satisfy::Expression;
//!
//! let calls = Cell::new(0);
//! let expr = Expression::new(|| {
//!     calls.set(calls.get() + 1);
//!     Ok(Some(42))
//! });
//!
//! assert_eq!(expr.evaluate(), Ok(Some(&42)));
//! assert_eq!(expr.evaluate(), Ok(Some(&42)));
//! assert_eq!(calls.get(), 1);
//! ```

use std::cell::{Cell, OnceCell};
use std::fmt;

use crate::EvaluationError;

/// Source position of an expectation, threaded through for diagnostics.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Location {
    file: String,
    line: u32,
}

impl Location {
    /// Create a location from a file path and line number.
    pub fn new(file: impl Into<String>, line: u32) -> Self {
        Location {
            file: file.into(),
            line,
        }
    }

    /// The location of the caller of the enclosing `#[track_caller]` function.
    #[track_caller]
    pub fn caller() -> Self {
        let caller = std::panic::Location::caller();
        Location::new(caller.file(), caller.line())
    }

    /// File path.
    pub fn file(&self) -> &str {
        &self.file
    }

    /// Line number, 1-based.
    pub fn line(&self) -> u32 {
        self.line
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.file, self.line)
    }
}

type Thunk<'a, T> = Box<dyn FnOnce() -> Result<Option<T>, EvaluationError> + 'a>;

/// A lazily evaluated, memoized subject plus the location it came from.
///
/// `Ok(None)` means the subject is absent (nil). `Err` is a propagated failure;
/// it is memoized too, so every later `evaluate` replays it.
///
/// The memo is a plain `OnceCell`, so an `Expression` is not `Sync` and cannot
/// be evaluated from two threads at once.
pub struct Expression<'a, T> {
    thunk: Cell<Option<Thunk<'a, T>>>,
    value: OnceCell<Result<Option<T>, EvaluationError>>,
    location: Location,
}

impl<'a, T> Expression<'a, T> {
    /// Defer `produce` until the first evaluation, recording the caller's location.
    #[track_caller]
    pub fn new<F>(produce: F) -> Self
    where
        F: FnOnce() -> Result<Option<T>, EvaluationError> + 'a,
    {
        Self::with_location(produce, Location::caller())
    }

    /// Defer `produce` with an explicit location.
    pub fn with_location<F>(produce: F, location: Location) -> Self
    where
        F: FnOnce() -> Result<Option<T>, EvaluationError> + 'a,
    {
        Expression {
            thunk: Cell::new(Some(Box::new(produce))),
            value: OnceCell::new(),
            location,
        }
    }

    /// An already-known subject.
    ///
    /// # Example
    ///
    /// ```
    /// use satisfy::Expression;
    ///
    /// let expr = Expression::value("hello");
    /// assert_eq!(expr.evaluate(), Ok(Some(&"hello")));
    /// ```
    #[track_caller]
    pub fn value(value: T) -> Self {
        Self::settled(Ok(Some(value)), Location::caller())
    }

    /// A subject that is known to be absent.
    #[track_caller]
    pub fn absent() -> Self {
        Self::settled(Ok(None), Location::caller())
    }

    fn settled(outcome: Result<Option<T>, EvaluationError>, location: Location) -> Self {
        Expression {
            thunk: Cell::new(None),
            value: OnceCell::from(outcome),
            location,
        }
    }

    /// Produce the subject, running the deferred closure on first use only.
    ///
    /// A propagated failure without a location gets this expression's location.
    /// If a previous evaluation unwound out of the closure, later calls fail
    /// instead of reporting an absent subject.
    pub fn evaluate(&self) -> Result<Option<&T>, EvaluationError> {
        let outcome = self.value.get_or_init(|| match self.thunk.take() {
            Some(produce) => produce().map_err(|err| match err.location() {
                Some(_) => err,
                None => err.at(self.location.clone()),
            }),
            None => Err(EvaluationError::new("subject evaluation did not complete")
                .at(self.location.clone())),
        });
        match outcome {
            Ok(value) => Ok(value.as_ref()),
            Err(err) => Err(err.clone()),
        }
    }

    /// Where the expectation was written.
    pub fn location(&self) -> &Location {
        &self.location
    }

    /// Whether the subject has been produced (or failed) yet.
    pub fn is_evaluated(&self) -> bool {
        self.value.get().is_some()
    }
}

impl<T: fmt::Debug> fmt::Debug for Expression<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Expression")
            .field("value", &self.value.get())
            .field("location", &self.location)
            .finish()
    }
}
