//! Round trips through the host object model bridge
#![cfg(feature = "bridge")]

use satisfy::bridge::{
    satisfy_all_of_matcher, satisfy_any_of_matcher, HostMatcher, HostResult, HostStatus,
    HostValue,
};
use satisfy::predicate::{be_nil, equal, satisfy};
use satisfy::{Location, PredicateResult, PredicateStatus};
use serde_json::{json, Value};

fn location() -> Location {
    Location::new("test/cart.js", 4)
}

fn is_object() -> HostMatcher {
    HostMatcher::from_predicate(satisfy("be an object", |value: &HostValue| {
        value.0.is_object()
    }))
}

#[test]
fn test_host_result_shape() {
    let actual = || Ok(Some(json!(null)));
    let host = satisfy_all_of_matcher(vec![])
        .satisfies(&actual, &location())
        .unwrap();
    let value = serde_json::to_value(&host).unwrap();
    assert_eq!(
        value,
        json!({
            "status": 2,
            "message": {
                "kind": "fail",
                "text": "all_of must be called with at least one matcher"
            }
        })
    );

    let result = PredicateResult::from(serde_json::from_value::<HostResult>(value).unwrap());
    assert_eq!(result.status(), PredicateStatus::Fail);
}

#[test]
fn test_rejects_unknown_status_code() {
    let raw = json!({"status": 9, "message": {"kind": "expectedTo", "phrase": "x"}});
    let err = serde_json::from_value::<HostResult>(raw).unwrap_err();
    assert!(err.to_string().contains("unknown host status code 9"));
}

#[test]
fn test_all_of_over_host_handles() {
    let matcher = satisfy_all_of_matcher(vec![
        is_object(),
        HostMatcher::from_predicate(equal(HostValue(json!({"sku": "A1"})))),
    ]);

    let actual = || Ok(Some(json!({"sku": "A1"})));
    let result = matcher.satisfies(&actual, &location()).unwrap();
    assert_eq!(result.status, HostStatus::Matches);

    let actual = || Ok(Some(json!([1, 2])));
    let result = matcher.satisfies(&actual, &location()).unwrap();
    assert_eq!(result.status, HostStatus::DoesNotMatch);
    assert_eq!(
        result.message.render(None),
        r#"expected to match all of: {be an object}, and {equal <{"sku":"A1"}>}, got [1,2]"#
    );
}

#[test]
fn test_nil_host_subject() {
    let matcher = satisfy_any_of_matcher(vec![
        is_object(),
        HostMatcher::from_predicate(be_nil()),
    ]);
    let actual = || Ok(None::<Value>);
    let result = matcher.satisfies(&actual, &location()).unwrap();
    // is_object fails on nil, which outranks be_nil's match
    assert_eq!(result.status, HostStatus::Fail);
}

#[test]
fn test_bridged_compound_nests_as_host_handle() {
    let inner = satisfy_all_of_matcher(vec![is_object()]);
    let outer = satisfy_all_of_matcher(vec![inner, HostMatcher::from_predicate(be_nil()).negated()]);
    let actual = || Ok(Some(json!({})));
    let result = outer.satisfies(&actual, &location()).unwrap();
    assert_eq!(result.status, HostStatus::Matches);
    assert_eq!(
        result.message.expected_message(),
        "match all of: {match all of: {be an object}}, and {not be nil}"
    );
}
