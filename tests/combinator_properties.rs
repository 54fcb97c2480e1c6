//! Property-based tests for combinator status and message aggregation

use proptest::prelude::*;
use satisfy::predicate::{all_of, any_of, And, Predicate};
use satisfy::testing::StubPredicate;
use satisfy::{Expression, PredicateStatus};

fn status() -> impl Strategy<Value = PredicateStatus> {
    prop_oneof![
        Just(PredicateStatus::Matches),
        Just(PredicateStatus::DoesNotMatch),
        Just(PredicateStatus::Fail),
    ]
}

fn stubs(statuses: &[PredicateStatus]) -> Vec<StubPredicate> {
    statuses
        .iter()
        .enumerate()
        .map(|(idx, status)| StubPredicate::new(*status, format!("condition {}", idx)))
        .collect()
}

fn phrases(n: usize) -> Vec<String> {
    (0..n).map(|idx| format!("{{condition {}}}", idx)).collect()
}

proptest! {
    #[test]
    fn prop_all_matching_children_match(n in 1usize..20) {
        let p = all_of(stubs(&vec![PredicateStatus::Matches; n]));
        let result = p.satisfies(&Expression::value(n)).unwrap();
        prop_assert_eq!(result.status(), PredicateStatus::Matches);
    }

    #[test]
    fn prop_all_of_status_follows_severity(
        statuses in prop::collection::vec(status(), 1..20)
    ) {
        let result = all_of(stubs(&statuses)).satisfies(&Expression::value(0)).unwrap();

        let expected = if statuses.contains(&PredicateStatus::Fail) {
            PredicateStatus::Fail
        } else if statuses.contains(&PredicateStatus::DoesNotMatch) {
            PredicateStatus::DoesNotMatch
        } else {
            PredicateStatus::Matches
        };
        prop_assert_eq!(result.status(), expected);
    }

    #[test]
    fn prop_any_of_status(
        statuses in prop::collection::vec(status(), 1..20)
    ) {
        let result = any_of(stubs(&statuses)).satisfies(&Expression::value(0)).unwrap();

        let expected = if statuses.contains(&PredicateStatus::Fail) {
            PredicateStatus::Fail
        } else if statuses.contains(&PredicateStatus::Matches) {
            PredicateStatus::Matches
        } else {
            PredicateStatus::DoesNotMatch
        };
        prop_assert_eq!(result.status(), expected);
    }

    #[test]
    fn prop_message_lists_every_child_in_order(
        statuses in prop::collection::vec(status(), 1..20)
    ) {
        let result = all_of(stubs(&statuses)).satisfies(&Expression::value(0)).unwrap();
        let expected = format!("match all of: {}", phrases(statuses.len()).join(", and "));
        prop_assert_eq!(result.message().expected_message(), expected);
    }

    #[test]
    fn prop_every_child_evaluated_exactly_once(
        statuses in prop::collection::vec(status(), 1..20)
    ) {
        let children = stubs(&statuses);
        all_of(children.clone()).satisfies(&Expression::value(0)).unwrap();
        for child in &children {
            prop_assert_eq!(child.calls(), 1);
        }
    }

    #[test]
    fn prop_evaluation_is_deterministic(
        statuses in prop::collection::vec(status(), 1..10),
        subject in any::<i64>()
    ) {
        let p = all_of(stubs(&statuses));
        let first = p.satisfies(&Expression::value(subject)).unwrap();
        let second = p.satisfies(&Expression::value(subject)).unwrap();
        prop_assert_eq!(first, second);
    }

    #[test]
    fn prop_and_agrees_with_two_element_all_of(a in status(), b in status()) {
        let via_and = And(StubPredicate::new(a, "left"), StubPredicate::new(b, "right"));
        let via_list = all_of([StubPredicate::new(a, "left"), StubPredicate::new(b, "right")]);
        let subject = Expression::value("subject");
        prop_assert_eq!(
            via_and.satisfies(&subject).unwrap(),
            via_list.satisfies(&subject).unwrap()
        );
    }
}
