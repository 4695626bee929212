// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Halt mode specs
//!
//! Verify `until` returns the first non-null response and runs nothing after it.

use crate::prelude::*;
use similar_asserts::assert_eq;

#[test]
fn until_stops_at_first_response() {
    let events = Dispatcher::new();
    let probe = Probe::new();
    events.listen("x", probe.listener("A", Value::Null));
    events.listen("x", probe.listener("B", json!(2)));
    events.listen("x", probe.listener("C", json!(3)));

    assert_eq!(events.until("x", ()).unwrap(), Some(json!(2)));
    assert_eq!(probe.ran(), names(["A", "B"]));
}

#[test]
fn until_with_only_nulls_is_none() {
    let events = Dispatcher::new();
    events.listen("x", HandlerSpec::func(|_| Ok(Value::Null)));

    assert_eq!(events.until("x", ()).unwrap(), None);
}

#[test]
fn fire_with_halt_matches_until() {
    let events = Dispatcher::new();
    events.listen("x", HandlerSpec::func(|_| Ok(json!("answer"))));

    assert_eq!(
        events.fire("x", (), true).unwrap(),
        Dispatched::Halted(Some(json!("answer")))
    );
    assert_eq!(events.until("x", ()).unwrap(), Some(json!("answer")));
}

#[test]
fn empty_array_counts_as_a_response() {
    let events = Dispatcher::new();
    let probe = Probe::new();
    events.listen("x", probe.listener("A", json!([])));
    events.listen("x", probe.listener("B", json!(1)));

    assert_eq!(events.until("x", ()).unwrap(), Some(json!([])));
    assert_eq!(probe.ran(), names(["A"]));
}
