//! Compound Matcher Example
//!
//! This example composes leaf predicates with `all_of!`, `any_of!`, `.and`
//! and `&`, and prints the aggregate status and message for a few subjects.
//!
//! Run with: cargo run --example all_of

use satisfy::predicate::*;
use satisfy::{all_of, any_of, EvaluationError, Expression, PredicateResult};

fn main() {
    println!("=== Compound Matcher Example ===\n");

    status_algebra();
    nested_conditions();
    absent_and_failing_subjects();
}

fn report(label: &str, result: Result<PredicateResult, EvaluationError>) {
    match result {
        Ok(result) => {
            println!("{}:", label);
            println!("  status:  {}", result.status());
            println!("  message: {}", result.message());
        }
        Err(err) => println!("{}: raised {}", label, err),
    }
}

/// Demonstrates how child statuses combine
fn status_algebra() {
    println!("--- Status Algebra ---\n");

    let small = all_of![be_greater_than(0), be_less_than(10)];
    report("small(5)", small.satisfies(&Expression::value(5)));
    report("small(42)", small.satisfies(&Expression::value(42)));

    // `Fail` outranks `DoesNotMatch`: the nil subject makes the leaves fail
    report("small(nil)", small.satisfies(&Expression::absent()));
    println!();
}

/// Demonstrates nesting and operator sugar
fn nested_conditions() {
    println!("--- Nested Conditions ---\n");

    let odd = satisfy("be odd", |n: &i32| n % 2 == 1);
    let lucky = any_of![equal(7), equal(13)];
    let p = be_greater_than(0).and(lucky) & odd;

    for n in [7, 9, 14] {
        report(&format!("lucky_odd({})", n), p.satisfies(&Expression::value(n)));
    }
    println!();
}

/// Demonstrates the two failure channels
fn absent_and_failing_subjects() {
    println!("--- Absent and Failing Subjects ---\n");

    let maybe_nil = any_of![be_nil(), be_greater_than(100)];
    report("maybe_nil(nil)", maybe_nil.satisfies(&Expression::absent()));

    let unreachable: Expression<'_, i32> =
        Expression::new(|| Err(EvaluationError::new("sensor offline")));
    report("maybe_nil(offline)", maybe_nil.satisfies(&unreachable));

    let empty: AllOf<BoxedPredicate<i32>> = all_of![];
    report("empty", empty.satisfies(&Expression::value(1)));
}
