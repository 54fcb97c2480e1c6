//! Core predicate trait and logical combinators
//!
//! This module provides the `Predicate` trait every matcher speaks, and the
//! combinators that fold several predicates over one subject into a single
//! [`PredicateResult`].
//!
//! Combinators never short-circuit on status: every child runs so the
//! aggregate message can name the whole compound condition. The only early
//! exit is a propagated [`EvaluationError`], which aborts the remaining
//! children.

use std::fmt;
use std::sync::Arc;

use crate::monoid::fold_all;
use crate::status::AnyStatus;
use crate::{
    EvaluationError, ExpectationMessage, Expression, Monoid, PredicateResult, PredicateStatus,
};

/// A composable, tri-state predicate over values of type T.
///
/// Leaf predicates and combinators share this shape, so any predicate can be
/// a child of another.
///
/// # Example
///
/// ```rust
/// use satisfy::predicate::*;
/// use satisfy::{Expression, PredicateStatus};
///
/// let in_range = be_greater_than(0).and(be_less_than(150));
/// let result = in_range.satisfies(&Expression::value(25)).unwrap();
/// assert_eq!(result.status(), PredicateStatus::Matches);
/// ```
pub trait Predicate<T>: Send + Sync {
    /// Evaluate against `actual`.
    ///
    /// `Err` is a propagated failure, not a verdict. Conditions that are
    /// merely invalid are reported as `Ok` with [`PredicateStatus::Fail`].
    fn satisfies(&self, actual: &Expression<'_, T>) -> Result<PredicateResult, EvaluationError>;
}

impl<T, F> Predicate<T> for F
where
    F: Fn(&Expression<'_, T>) -> Result<PredicateResult, EvaluationError> + Send + Sync,
{
    #[inline]
    fn satisfies(&self, actual: &Expression<'_, T>) -> Result<PredicateResult, EvaluationError> {
        self(actual)
    }
}

/// Pin a closure to the predicate signature.
///
/// Closures only implement [`Predicate`] when their argument is known to be an
/// `&Expression`; passing them through `define` lets the compiler infer that.
///
/// # Example
///
/// ```rust
/// use satisfy::predicate::define;
/// use satisfy::{Expression, ExpectationMessage, PredicateResult, PredicateStatus};
///
/// let is_even = define(|actual: &Expression<'_, i32>| {
///     let even = actual.evaluate()?.is_some_and(|n| n % 2 == 0);
///     Ok(PredicateResult::from_bool(even, ExpectationMessage::expected_actual_value_to("be even")))
/// });
/// # use satisfy::predicate::Predicate;
/// assert_eq!(is_even.satisfies(&Expression::value(4)).unwrap().status(), PredicateStatus::Matches);
/// ```
pub fn define<T, F>(predicate: F) -> F
where
    F: Fn(&Expression<'_, T>) -> Result<PredicateResult, EvaluationError> + Send + Sync,
{
    predicate
}

/// Extension trait for predicate combinators.
///
/// Both operands of `and`/`or` are always evaluated.
pub trait PredicateExt<T>: Predicate<T> + Sized {
    /// Combine with AND logic; a two-element [`AllOf`].
    ///
    /// # Example
    ///
    /// ```rust
    /// use satisfy::predicate::*;
    /// use satisfy::{Expression, PredicateStatus};
    ///
    /// let p = be_greater_than(0).and(be_less_than(100));
    /// assert_eq!(p.satisfies(&Expression::value(50)).unwrap().status(), PredicateStatus::Matches);
    /// assert_eq!(p.satisfies(&Expression::value(100)).unwrap().status(), PredicateStatus::DoesNotMatch);
    /// ```
    fn and<P: Predicate<T>>(self, other: P) -> And<Self, P> {
        And(self, other)
    }

    /// Combine with OR logic; a two-element [`AnyOf`].
    ///
    /// # Example
    ///
    /// ```rust
    /// use satisfy::predicate::*;
    /// use satisfy::{Expression, PredicateStatus};
    ///
    /// let p = be_less_than(0).or(be_greater_than(100));
    /// assert_eq!(p.satisfies(&Expression::value(150)).unwrap().status(), PredicateStatus::Matches);
    /// assert_eq!(p.satisfies(&Expression::value(50)).unwrap().status(), PredicateStatus::DoesNotMatch);
    /// ```
    fn or<P: Predicate<T>>(self, other: P) -> Or<Self, P> {
        Or(self, other)
    }

    /// Erase the concrete type so predicates of different types can share a list.
    fn boxed(self) -> BoxedPredicate<T>
    where
        Self: 'static,
    {
        BoxedPredicate::new(self)
    }
}

impl<T, P: Predicate<T>> PredicateExt<T> for P {}

/// A shared, type-erased predicate.
///
/// Cloning shares the underlying predicate, so one child can sit in several
/// compound predicates at once.
pub struct BoxedPredicate<T>(Arc<dyn Predicate<T>>);

impl<T> BoxedPredicate<T> {
    /// Erase `predicate`.
    pub fn new<P>(predicate: P) -> Self
    where
        P: Predicate<T> + 'static,
    {
        BoxedPredicate(Arc::new(predicate))
    }
}

impl<T> Clone for BoxedPredicate<T> {
    fn clone(&self) -> Self {
        BoxedPredicate(Arc::clone(&self.0))
    }
}

impl<T> fmt::Debug for BoxedPredicate<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BoxedPredicate").finish_non_exhaustive()
    }
}

impl<T> Predicate<T> for BoxedPredicate<T> {
    #[inline]
    fn satisfies(&self, actual: &Expression<'_, T>) -> Result<PredicateResult, EvaluationError> {
        self.0.satisfies(actual)
    }
}

/// How a combinator folds child statuses and joins their phrases.
trait Aggregation {
    type Status: Monoid + From<PredicateStatus> + Into<PredicateStatus>;
    const NAME: &'static str;
    const PREFIX: &'static str;
    const SEPARATOR: &'static str;
}

enum Every {}

impl Aggregation for Every {
    type Status = PredicateStatus;
    const NAME: &'static str = "all_of";
    const PREFIX: &'static str = "match all of: ";
    const SEPARATOR: &'static str = ", and ";
}

enum Either {}

impl Aggregation for Either {
    type Status = AnyStatus;
    const NAME: &'static str = "any_of";
    const PREFIX: &'static str = "match one of: ";
    const SEPARATOR: &'static str = ", or ";
}

fn empty_combinator<A: Aggregation>() -> PredicateResult {
    PredicateResult::new(
        PredicateStatus::Fail,
        ExpectationMessage::fail(format!(
            "{} must be called with at least one matcher",
            A::NAME
        )),
    )
}

fn evaluate_children<A, T>(
    actual: &Expression<'_, T>,
    children: &[&dyn Predicate<T>],
) -> Result<PredicateResult, EvaluationError>
where
    A: Aggregation,
    T: fmt::Debug,
{
    if children.is_empty() {
        #[cfg(feature = "tracing")]
        tracing::warn!(
            combinator = A::NAME,
            location = %actual.location(),
            "combinator evaluated without any matcher"
        );
        return Ok(empty_combinator::<A>());
    }

    let mut outcomes = Vec::with_capacity(children.len());
    for child in children {
        let result = child.satisfies(actual)?;
        #[cfg(feature = "tracing")]
        tracing::trace!(
            combinator = A::NAME,
            index = outcomes.len(),
            status = %result.status(),
            "child evaluated"
        );
        let phrase = format!("{{{}}}", result.message().expected_message());
        outcomes.push((A::Status::from(result.status()), vec![phrase]));
    }

    let (status, phrases) = fold_all(outcomes);
    let status: PredicateStatus = status.into();
    let phrase = format!("{}{}", A::PREFIX, phrases.join(A::SEPARATOR));
    let message = match actual.evaluate()? {
        Some(value) => ExpectationMessage::expected_custom_value_to(phrase, format!("{:?}", value)),
        None => ExpectationMessage::expected_actual_value_to(phrase),
    };

    #[cfg(feature = "tracing")]
    tracing::debug!(
        combinator = A::NAME,
        children = children.len(),
        status = %status,
        "combinator aggregated"
    );

    Ok(PredicateResult::new(status, message))
}

/// Matches when every child matches.
///
/// Status aggregation: any `Fail` makes the result `Fail`; otherwise any
/// `DoesNotMatch` makes it `DoesNotMatch`. An empty list is a configuration
/// error and always yields `Fail`.
///
/// A present subject is rendered with its `Debug` form, so string subjects
/// show up quoted (`got "a"`). Wrap the subject in a type with a custom
/// `Debug` impl, as `bridge::HostValue` does, to change that.
///
/// # Example
///
/// ```rust
/// use satisfy::predicate::*;
/// use satisfy::{Expression, PredicateStatus};
///
/// let bounds = all_of([be_greater_than(0), be_greater_than(-10)]);
/// let result = bounds.satisfies(&Expression::value(-5)).unwrap();
/// assert_eq!(result.status(), PredicateStatus::DoesNotMatch);
/// assert_eq!(
///     result.message().to_string(),
///     "expected to match all of: {be greater than <0>}, and {be greater than <-10>}, got -5"
/// );
/// ```
#[derive(Clone, Debug)]
pub struct AllOf<P> {
    predicates: Vec<P>,
}

impl<P> AllOf<P> {
    /// The children, in evaluation order.
    pub fn predicates(&self) -> &[P] {
        &self.predicates
    }
}

impl<T: fmt::Debug, P: Predicate<T>> Predicate<T> for AllOf<P> {
    fn satisfies(&self, actual: &Expression<'_, T>) -> Result<PredicateResult, EvaluationError> {
        let children: Vec<&dyn Predicate<T>> = self
            .predicates
            .iter()
            .map(|p| p as &dyn Predicate<T>)
            .collect();
        evaluate_children::<Every, T>(actual, &children)
    }
}

/// Create a predicate that matches when all given predicates match.
///
/// Accepts any ordered collection: arrays for homogeneous predicates, or a
/// `Vec<BoxedPredicate<T>>` for mixed ones. The [`all_of!`](crate::all_of!)
/// macro builds the boxed form from a variadic list.
pub fn all_of<P, I>(predicates: I) -> AllOf<P>
where
    I: IntoIterator<Item = P>,
{
    AllOf {
        predicates: predicates.into_iter().collect(),
    }
}

/// Matches when at least one child matches.
///
/// Status aggregation: any `Fail` makes the result `Fail`; otherwise any
/// `Matches` makes it `Matches`. An empty list always yields `Fail`.
///
/// # Example
///
/// ```rust
/// use satisfy::predicate::*;
/// use satisfy::{Expression, PredicateStatus};
///
/// let special = any_of([equal(1), equal(5), equal(10)]);
/// assert_eq!(special.satisfies(&Expression::value(5)).unwrap().status(), PredicateStatus::Matches);
/// assert_eq!(special.satisfies(&Expression::value(7)).unwrap().status(), PredicateStatus::DoesNotMatch);
/// ```
#[derive(Clone, Debug)]
pub struct AnyOf<P> {
    predicates: Vec<P>,
}

impl<P> AnyOf<P> {
    /// The children, in evaluation order.
    pub fn predicates(&self) -> &[P] {
        &self.predicates
    }
}

impl<T: fmt::Debug, P: Predicate<T>> Predicate<T> for AnyOf<P> {
    fn satisfies(&self, actual: &Expression<'_, T>) -> Result<PredicateResult, EvaluationError> {
        let children: Vec<&dyn Predicate<T>> = self
            .predicates
            .iter()
            .map(|p| p as &dyn Predicate<T>)
            .collect();
        evaluate_children::<Either, T>(actual, &children)
    }
}

/// Create a predicate that matches when any given predicate matches.
pub fn any_of<P, I>(predicates: I) -> AnyOf<P>
where
    I: IntoIterator<Item = P>,
{
    AnyOf {
        predicates: predicates.into_iter().collect(),
    }
}

/// AND of two predicates of possibly different types.
///
/// Evaluates and reports exactly like a two-element [`AllOf`].
#[derive(Clone, Copy, Debug)]
pub struct And<P1, P2>(pub P1, pub P2);

impl<T: fmt::Debug, P1: Predicate<T>, P2: Predicate<T>> Predicate<T> for And<P1, P2> {
    fn satisfies(&self, actual: &Expression<'_, T>) -> Result<PredicateResult, EvaluationError> {
        evaluate_children::<Every, T>(actual, &[&self.0 as &dyn Predicate<T>, &self.1])
    }
}

/// OR of two predicates of possibly different types.
///
/// Evaluates and reports exactly like a two-element [`AnyOf`].
#[derive(Clone, Copy, Debug)]
pub struct Or<P1, P2>(pub P1, pub P2);

impl<T: fmt::Debug, P1: Predicate<T>, P2: Predicate<T>> Predicate<T> for Or<P1, P2> {
    fn satisfies(&self, actual: &Expression<'_, T>) -> Result<PredicateResult, EvaluationError> {
        evaluate_children::<Either, T>(actual, &[&self.0 as &dyn Predicate<T>, &self.1])
    }
}

/// `a & b` builds [`And`], `a | b` builds [`Or`].
macro_rules! impl_compose_operators {
    ($([$($g:ident),*] $ty:ty),+ $(,)?) => {
        $(
            impl<$($g,)* Rhs> ::std::ops::BitAnd<Rhs> for $ty {
                type Output = $crate::predicate::And<Self, Rhs>;

                fn bitand(self, rhs: Rhs) -> Self::Output {
                    $crate::predicate::And(self, rhs)
                }
            }

            impl<$($g,)* Rhs> ::std::ops::BitOr<Rhs> for $ty {
                type Output = $crate::predicate::Or<Self, Rhs>;

                fn bitor(self, rhs: Rhs) -> Self::Output {
                    $crate::predicate::Or(self, rhs)
                }
            }
        )+
    };
}

pub(crate) use impl_compose_operators;

impl_compose_operators!(
    [P] AllOf<P>,
    [P] AnyOf<P>,
    [P1, P2] And<P1, P2>,
    [P1, P2] Or<P1, P2>,
    [T] BoxedPredicate<T>,
);

/// Variadic [`all_of`](crate::predicate::all_of) over predicates of mixed types.
///
/// Each argument is boxed into a [`BoxedPredicate`], then forwarded to the
/// list form.
///
/// # Example
///
/// ```rust
/// use satisfy::predicate::*;
/// use satisfy::{all_of, Expression, PredicateStatus};
///
/// let p = all_of![be_greater_than(1), be_less_than(10), equal(5)];
/// assert_eq!(p.satisfies(&Expression::value(5)).unwrap().status(), PredicateStatus::Matches);
/// ```
#[macro_export]
macro_rules! all_of {
    ($($predicate:expr),* $(,)?) => {
        $crate::predicate::all_of(::std::vec![
            $($crate::predicate::BoxedPredicate::new($predicate)),*
        ])
    };
}

/// Variadic [`any_of`](crate::predicate::any_of) over predicates of mixed types.
#[macro_export]
macro_rules! any_of {
    ($($predicate:expr),* $(,)?) => {
        $crate::predicate::any_of(::std::vec![
            $($crate::predicate::BoxedPredicate::new($predicate)),*
        ])
    };
}
