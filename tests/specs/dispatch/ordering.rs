// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Dispatch ordering specs
//!
//! Verify responses are collected in registration order and that a
//! `false` response stops propagation.

use crate::prelude::*;
use similar_asserts::assert_eq;

#[test]
fn responses_follow_registration_order() {
    let events = Dispatcher::new();
    let probe = Probe::new();
    events.listen("x", probe.listener("A", json!(1)));
    events.listen("x", probe.listener("B", json!(2)));

    assert_eq!(events.dispatch("x", ()).unwrap(), vec![json!(1), json!(2)]);
    assert_eq!(probe.ran(), names(["A", "B"]));
}

#[test]
fn false_keeps_earlier_responses_only() {
    let events = Dispatcher::new();
    let probe = Probe::new();
    events.listen("x", probe.listener("A", json!(1)));
    events.listen("x", probe.listener("B", json!(false)));
    events.listen("x", probe.listener("C", json!(3)));

    assert_eq!(events.dispatch("x", ()).unwrap(), vec![json!(1)]);
    assert_eq!(probe.ran(), names(["A", "B"]));
}

#[test]
fn direct_then_wildcard_then_capability() {
    let events = Dispatcher::new();
    let probe = Probe::new();
    events.register_type_named("shop.OrderShipped", ["Notifiable"]);
    events.listen("Notifiable", probe.listener("capability", Value::Null));
    events.listen("shop.*", probe.listener("wildcard", Value::Null));
    events.listen("shop.OrderShipped", probe.listener("direct", Value::Null));

    events.dispatch("shop.OrderShipped", ()).unwrap();

    assert_eq!(probe.ran(), names(["direct", "wildcard", "capability"]));
}

#[test]
fn payload_is_spread_positionally() {
    let events = Dispatcher::new();
    events.listen(
        "sum",
        HandlerSpec::func(|args| {
            Ok(json!(args.payload().iter().filter_map(Value::as_i64).sum::<i64>()))
        }),
    );

    assert_eq!(events.dispatch("sum", json!([1, 2, 3])).unwrap(), vec![json!(6)]);
    assert_eq!(events.dispatch("sum", json!(4)).unwrap(), vec![json!(4)]);
}

#[test]
fn no_listeners_is_not_an_error() {
    let events = Dispatcher::new();
    assert_eq!(events.dispatch("nobody.listens", ()).unwrap(), Vec::<Value>::new());
}

#[test]
fn forget_empties_the_event() {
    let events = Dispatcher::new();
    events.listen("x", HandlerSpec::func(|_| Ok(json!(1))));

    events.forget("x");

    assert!(!events.has_listeners("x"));
    assert_eq!(events.dispatch("x", ()).unwrap(), Vec::<Value>::new());
}
