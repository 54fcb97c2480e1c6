//! Host Bridge Example
//!
//! A dynamically typed host hands over JSON values and opaque matcher
//! handles; the bridge runs the typed combinators and returns host results.
//!
//! Run with: cargo run --example bridge --features bridge

use satisfy::bridge::{satisfy_all_of_matcher, HostMatcher, HostValue};
use satisfy::predicate::{be_nil, satisfy};
use satisfy::Location;
use serde_json::json;

fn main() {
    println!("=== Host Bridge Example ===\n");

    let has_id = HostMatcher::from_predicate(satisfy("have an id", |value: &HostValue| {
        value.0.get("id").is_some()
    }));
    let present = HostMatcher::from_predicate(be_nil()).negated();
    let matcher = satisfy_all_of_matcher(vec![has_id, present]);
    let location = Location::new("test/user.js", 12);

    for subject in [json!({"id": 1}), json!({"name": "x"})] {
        let actual = || Ok(Some(subject.clone()));
        match matcher.satisfies(&actual, &location) {
            Ok(result) => match serde_json::to_string(&result) {
                Ok(json) => println!("{} -> {}", subject, json),
                Err(err) => println!("{} -> unserializable result: {}", subject, err),
            },
            Err(err) => println!("{} -> raised {}", subject, err),
        }
    }
}
