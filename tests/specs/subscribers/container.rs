// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Subscriber and component specs
//!
//! Verify subscribers and `"Component@method"` listeners resolve through a
//! container lazily, and that resolution failures reach the caller.

use crate::prelude::*;
use similar_asserts::assert_eq;

struct Accounts {
    probe: Probe,
}

impl Subscriber for Accounts {
    fn subscribe(&self, events: &Dispatcher) {
        events.listen("account.opened", self.probe.listener("opened", json!("opened")));
        events.listen("account.closed", self.probe.listener("closed", json!("closed")));
        events.listen("account.*", "AccountLog@write");
    }
}

impl Component for Accounts {
    fn as_subscriber(&self) -> Option<&dyn Subscriber> {
        Some(self)
    }
}

struct AccountLog;

impl Component for AccountLog {
    fn call(&self, method: &str, args: Args<'_>) -> Result<Value, ListenerError> {
        match method {
            "write" => Ok(json!(format!("logged {}", args.event().unwrap_or("?")))),
            other => Err(format!("AccountLog has no {other}").into()),
        }
    }
}

#[test]
fn named_subscriber_registers_all_listeners() {
    let (events, container) = dispatcher_with_container();
    let probe = Probe::new();
    let accounts = Arc::new(Accounts {
        probe: probe.clone(),
    });
    container.instance("Accounts", accounts);
    container.instance("AccountLog", Arc::new(AccountLog));

    events.subscribe("Accounts").unwrap();

    assert_eq!(
        events.dispatch("account.opened", ()).unwrap(),
        vec![json!("opened"), json!("logged account.opened")]
    );
    assert_eq!(probe.ran(), names(["opened"]));
}

#[test]
fn subscriber_instance_needs_no_container() {
    let events = Dispatcher::new();
    let probe = Probe::new();

    events
        .subscribe(SubscriberSpec::instance(Accounts {
            probe: probe.clone(),
        }))
        .unwrap();

    assert!(events.has_listeners("account.closed"));
    assert!(events.has_listeners("account.*"));
}

#[test]
fn subscriber_resolves_through_alias() {
    let (events, container) = dispatcher_with_container();
    container.singleton("app.Accounts", || {
        Ok(Arc::new(Accounts {
            probe: Probe::new(),
        }) as Arc<dyn Component>)
    });
    container.alias("accounts", "app.Accounts").unwrap();

    events.subscribe("accounts").unwrap();

    assert!(events.has_listeners("account.opened"));
}

#[test]
fn unbound_subscriber_is_a_resolution_error() {
    let (events, _container) = dispatcher_with_container();

    let err = events.subscribe("Accounts").unwrap_err();

    assert_eq!(
        err.as_resolution(),
        Some(&ResolveError::NotBound("Accounts".to_string()))
    );
}

#[test]
fn component_listener_binds_late() {
    let (events, container) = dispatcher_with_container();
    events.listen("account.closed", "AccountLog@write");

    // Registered before the container knows the component
    assert!(events.dispatch("account.closed", ()).is_err());

    container.instance("AccountLog", Arc::new(AccountLog));
    assert_eq!(
        events.dispatch("account.closed", ()).unwrap(),
        vec![json!("logged ?")]
    );
}

#[test]
fn component_failure_aborts_remaining_listeners() {
    let (events, container) = dispatcher_with_container();
    let probe = Probe::new();
    container.instance("AccountLog", Arc::new(AccountLog));
    events.listen("account.closed", probe.listener("before", json!(1)));
    events.listen("account.closed", "AccountLog@erase");
    events.listen("account.closed", probe.listener("after", json!(2)));

    let err = events.dispatch("account.closed", ()).unwrap_err();

    assert!(err.to_string().contains("AccountLog has no erase"));
    assert_eq!(probe.ran(), names(["before"]));
}
