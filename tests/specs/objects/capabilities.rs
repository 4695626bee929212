// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Event object specs
//!
//! Verify object dispatch keys on the type name, carries the object as the
//! only payload element, and reaches listeners on declared capabilities.

use crate::prelude::*;
use similar_asserts::assert_eq;

struct InvoicePaid {
    number: u32,
    cents: u64,
}

impl Event for InvoicePaid {
    const CAPABILITIES: &'static [&'static str] = &["Billable", "Auditable"];

    fn to_payload(&self) -> Value {
        json!({ "number": self.number, "cents": self.cents })
    }
}

fn invoice() -> InvoicePaid {
    InvoicePaid {
        number: 17,
        cents: 4_200,
    }
}

#[test]
fn object_is_keyed_by_type_name() {
    let events = Dispatcher::new();
    let name = relay_core::event_name::<InvoicePaid>();
    events.listen(name, HandlerSpec::func(|args| Ok(json!(args.payload().len()))));

    assert!(name.ends_with("InvoicePaid"));
    assert_eq!(events.dispatch_event(&invoice()).unwrap(), vec![json!(1)]);
}

#[test]
fn object_replaces_any_explicit_payload() {
    let events = Dispatcher::new();
    let name = relay_core::event_name::<InvoicePaid>();
    events.listen(name, HandlerSpec::func(|args| Ok(json!(args.payload()))));

    let responses = events
        .dispatch(Target::object(&invoice()), json!(["ignored", "too"]))
        .unwrap();

    assert_eq!(
        responses,
        vec![json!([{ "number": 17, "cents": 4_200 }])]
    );
}

#[test]
fn capability_listeners_receive_the_object() {
    let events = Dispatcher::new();
    let probe = Probe::new();
    events.listen("Auditable", probe.capture("audit"));
    events.listen("Billable", probe.capture("billing"));

    events.dispatch_event(&invoice()).unwrap();

    assert_eq!(
        probe.ran(),
        names([
            r#"billing({"cents":4200,"number":17})"#,
            r#"audit({"cents":4200,"number":17})"#,
        ])
    );
}

#[test]
fn wildcard_can_match_type_names() {
    let events = Dispatcher::new();
    let probe = Probe::new();
    events.listen("*InvoicePaid", probe.listener("wildcard", Value::Null));

    events.dispatch_event(&invoice()).unwrap();

    assert_eq!(probe.ran(), names(["wildcard"]));
}

#[test]
fn until_works_with_objects() {
    let events = Dispatcher::new();
    events.listen(
        "Billable",
        HandlerSpec::func(|args| Ok(args.get(0).map(|o| o["cents"].clone()).unwrap_or_default())),
    );

    assert_eq!(
        events.until(Target::object(&invoice()), ()).unwrap(),
        Some(json!(4_200))
    );
}
