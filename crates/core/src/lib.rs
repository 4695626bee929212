// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! relay-core: in-process event dispatch
//!
//! This crate provides:
//! - A synchronous dispatcher with collect-all, halt-on-first-response and
//!   stop-on-false semantics
//! - Exact, wildcard and capability-derived listener lookup
//! - Deferred ("pushed") events flushed on demand
//! - The resolver contract for listeners and subscribers registered by name

pub mod config;
pub mod error;
pub mod events;
pub mod resolver;
pub mod types;

// Re-exports
pub use config::DispatcherConfig;
pub use error::{ConfigError, DispatchError, ListenerError, ResolveError};
pub use events::{
    Args, Dispatched, Dispatcher, EventKeys, EventPattern, HandlerSpec, Listener, ListenerResult,
    Payload, Subscriber, SubscriberSpec, Target,
};
pub use resolver::{Component, NoOpResolver, Resolver};
pub use types::{event_name, Event, TypeRegistry};

#[cfg(any(test, feature = "test-support"))]
pub use resolver::FakeResolver;
