//! Basic leaf predicates
//!
//! A few leaves that follow the usual matcher conventions. Predicates that
//! need a value report `Fail` for an absent subject and point at `be_nil()`.

use std::fmt;

use super::combinators::{impl_compose_operators, Predicate};
use crate::{EvaluationError, ExpectationMessage, Expression, PredicateResult, PredicateStatus};

fn compare<T, F>(
    actual: &Expression<'_, T>,
    phrase: String,
    check: F,
) -> Result<PredicateResult, EvaluationError>
where
    F: FnOnce(&T) -> bool,
{
    let message = ExpectationMessage::expected_actual_value_to(phrase);
    Ok(match actual.evaluate()? {
        Some(value) => PredicateResult::from_bool(check(value), message),
        None => PredicateResult::new(PredicateStatus::Fail, message.appended_be_nil_hint()),
    })
}

/// Predicate for equality.
#[derive(Clone, Copy, Debug)]
pub struct Equal<T>(pub T);

impl<T: PartialEq + fmt::Debug + Send + Sync> Predicate<T> for Equal<T> {
    fn satisfies(&self, actual: &Expression<'_, T>) -> Result<PredicateResult, EvaluationError> {
        compare(actual, format!("equal <{:?}>", self.0), |value| {
            *value == self.0
        })
    }
}

/// Create a predicate that checks for equality.
///
/// # Example
///
/// ```rust
/// use satisfy::predicate::*;
/// use satisfy::{Expression, PredicateStatus};
///
/// assert_eq!(equal(5).satisfies(&Expression::value(5)).unwrap().status(), PredicateStatus::Matches);
/// assert_eq!(equal(5).satisfies(&Expression::value(4)).unwrap().status(), PredicateStatus::DoesNotMatch);
/// assert_eq!(equal(5).satisfies(&Expression::absent()).unwrap().status(), PredicateStatus::Fail);
/// ```
pub fn equal<T: PartialEq + fmt::Debug + Send + Sync>(expected: T) -> Equal<T> {
    Equal(expected)
}

/// Predicate for greater than.
#[derive(Clone, Copy, Debug)]
pub struct GreaterThan<T>(pub T);

impl<T: PartialOrd + fmt::Debug + Send + Sync> Predicate<T> for GreaterThan<T> {
    fn satisfies(&self, actual: &Expression<'_, T>) -> Result<PredicateResult, EvaluationError> {
        compare(actual, format!("be greater than <{:?}>", self.0), |value| {
            *value > self.0
        })
    }
}

/// Create a predicate that checks if the subject is greater than `threshold`.
pub fn be_greater_than<T: PartialOrd + fmt::Debug + Send + Sync>(threshold: T) -> GreaterThan<T> {
    GreaterThan(threshold)
}

/// Predicate for less than.
#[derive(Clone, Copy, Debug)]
pub struct LessThan<T>(pub T);

impl<T: PartialOrd + fmt::Debug + Send + Sync> Predicate<T> for LessThan<T> {
    fn satisfies(&self, actual: &Expression<'_, T>) -> Result<PredicateResult, EvaluationError> {
        compare(actual, format!("be less than <{:?}>", self.0), |value| {
            *value < self.0
        })
    }
}

/// Create a predicate that checks if the subject is less than `threshold`.
pub fn be_less_than<T: PartialOrd + fmt::Debug + Send + Sync>(threshold: T) -> LessThan<T> {
    LessThan(threshold)
}

/// Predicate that matches an absent subject.
#[derive(Clone, Copy, Debug, Default)]
pub struct BeNil;

impl<T> Predicate<T> for BeNil {
    fn satisfies(&self, actual: &Expression<'_, T>) -> Result<PredicateResult, EvaluationError> {
        let absent = actual.evaluate()?.is_none();
        Ok(PredicateResult::from_bool(
            absent,
            ExpectationMessage::expected_actual_value_to("be nil"),
        ))
    }
}

/// Create a predicate that matches only when the subject is absent.
pub fn be_nil() -> BeNil {
    BeNil
}

/// Predicate backed by a plain boolean check and a description.
#[derive(Clone, Copy)]
pub struct Satisfy<F> {
    phrase: &'static str,
    check: F,
}

impl<F> fmt::Debug for Satisfy<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Satisfy")
            .field("phrase", &self.phrase)
            .finish_non_exhaustive()
    }
}

impl<T, F> Predicate<T> for Satisfy<F>
where
    F: Fn(&T) -> bool + Send + Sync,
{
    fn satisfies(&self, actual: &Expression<'_, T>) -> Result<PredicateResult, EvaluationError> {
        compare(actual, self.phrase.to_string(), &self.check)
    }
}

/// Lift a boolean check into a predicate described by `phrase`.
///
/// # Example
///
/// ```rust
/// use satisfy::predicate::*;
/// use satisfy::{Expression, PredicateStatus};
///
/// let even = satisfy("be even", |n: &i32| n % 2 == 0);
/// let result = even.satisfies(&Expression::value(3)).unwrap();
/// assert_eq!(result.status(), PredicateStatus::DoesNotMatch);
/// assert_eq!(result.message().render(Some("3")), "expected to be even, got 3");
/// ```
pub fn satisfy<T, F>(phrase: &'static str, check: F) -> Satisfy<F>
where
    F: Fn(&T) -> bool + Send + Sync,
{
    Satisfy { phrase, check }
}

impl_compose_operators!(
    [T] Equal<T>,
    [T] GreaterThan<T>,
    [T] LessThan<T>,
    [] BeNil,
    [F] Satisfy<F>,
);
