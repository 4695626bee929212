// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Events system for decoupling producers from consumers
//!
//! This module provides:
//! - `Dispatcher` - Invoke listeners for an event with collect, halt and stop semantics
//! - `EventPattern` - Wildcard matching for pattern listeners
//! - `Listener` - Uniform invocable form of callbacks and component references
//! - `Subscriber` - Batch registration of listeners

mod dispatcher;
mod listener;
mod pattern;
mod payload;
mod registry;
mod subscriber;

pub use dispatcher::{Dispatched, Dispatcher, EventKeys};
pub use listener::{parse_component, Args, Callback, HandlerSpec, Listener, ListenerResult};
pub use pattern::{glob_match, is_wildcard, EventPattern, WILDCARD};
pub use payload::{Payload, Target};
pub use subscriber::{Subscriber, SubscriberSpec};
