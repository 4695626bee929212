// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Subscribers register a batch of listeners in one call

use super::dispatcher::Dispatcher;
use std::fmt;
use std::sync::Arc;

/// Something that registers its own listeners against a dispatcher
pub trait Subscriber: Send + Sync {
    fn subscribe(&self, events: &Dispatcher);
}

/// A subscriber instance, or the name to resolve one by
#[derive(Clone)]
pub enum SubscriberSpec {
    Named(String),
    Instance(Arc<dyn Subscriber>),
}

impl SubscriberSpec {
    pub fn instance<S: Subscriber + 'static>(subscriber: S) -> Self {
        Self::Instance(Arc::new(subscriber))
    }
}

impl From<&str> for SubscriberSpec {
    fn from(name: &str) -> Self {
        Self::Named(name.to_string())
    }
}

impl From<String> for SubscriberSpec {
    fn from(name: String) -> Self {
        Self::Named(name)
    }
}

impl From<Arc<dyn Subscriber>> for SubscriberSpec {
    fn from(subscriber: Arc<dyn Subscriber>) -> Self {
        Self::Instance(subscriber)
    }
}

impl fmt::Debug for SubscriberSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Named(name) => f.debug_tuple("Named").field(name).finish(),
            Self::Instance(_) => f.write_str("Instance(<subscriber>)"),
        }
    }
}
