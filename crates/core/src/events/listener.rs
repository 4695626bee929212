// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Listener factory
//!
//! Registrable handlers come in two shapes: a callback held directly, or a
//! `"Component@method"` reference resolved each time the listener fires.
//! Both are normalized into a [`Listener`] that is invoked uniformly with
//! the event name and payload.

use super::dispatcher::Dispatcher;
use crate::error::{DispatchError, ListenerError};
use serde_json::Value;
use std::fmt;
use std::sync::Arc;

/// Result returned by listener callbacks
pub type ListenerResult = Result<Value, ListenerError>;

/// Shared listener callback
pub type Callback = Arc<dyn Fn(Args<'_>) -> ListenerResult + Send + Sync>;

/// Arguments a listener is called with
///
/// Listeners on exact names receive the payload positionally. Listeners on
/// wildcard patterns also receive the concrete event name, since the
/// pattern alone does not say which event fired.
#[derive(Debug, Clone, Copy)]
pub enum Args<'a> {
    Positional(&'a [Value]),
    Wildcard { event: &'a str, payload: &'a [Value] },
}

impl<'a> Args<'a> {
    pub fn payload(&self) -> &'a [Value] {
        match *self {
            Args::Positional(payload) => payload,
            Args::Wildcard { payload, .. } => payload,
        }
    }

    /// Concrete event name, only passed to wildcard listeners
    pub fn event(&self) -> Option<&'a str> {
        match *self {
            Args::Positional(_) => None,
            Args::Wildcard { event, .. } => Some(event),
        }
    }

    /// Positional argument at `index`
    pub fn get(&self, index: usize) -> Option<&'a Value> {
        self.payload().get(index)
    }
}

/// A handler as supplied at registration time
#[derive(Clone)]
pub enum HandlerSpec {
    Callback(Callback),
    /// `"Component"` or `"Component@method"`
    Component(String),
}

impl HandlerSpec {
    /// Wrap a closure as a handler
    pub fn func<F>(f: F) -> Self
    where
        F: Fn(Args<'_>) -> ListenerResult + Send + Sync + 'static,
    {
        Self::Callback(Arc::new(f))
    }

    pub fn component(spec: impl Into<String>) -> Self {
        Self::Component(spec.into())
    }
}

impl From<&str> for HandlerSpec {
    fn from(spec: &str) -> Self {
        Self::Component(spec.to_string())
    }
}

impl From<String> for HandlerSpec {
    fn from(spec: String) -> Self {
        Self::Component(spec)
    }
}

impl From<Callback> for HandlerSpec {
    fn from(callback: Callback) -> Self {
        Self::Callback(callback)
    }
}

impl fmt::Debug for HandlerSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Callback(_) => f.write_str("Callback(<fn>)"),
            Self::Component(spec) => f.debug_tuple("Component").field(spec).finish(),
        }
    }
}

/// A registered listener in uniform invocable form
#[derive(Clone)]
pub struct Listener {
    kind: ListenerKind,
    wildcard: bool,
}

#[derive(Clone)]
enum ListenerKind {
    Callback(Callback),
    /// Resolved through the dispatcher's resolver on every invocation
    Deferred { component: String, method: String },
    /// Staged by `push`; re-dispatches its event when flushed
    Replay { event: String, payload: Arc<[Value]> },
}

impl Listener {
    /// Normalize a handler spec, see [`Dispatcher::make_listener`]
    pub(crate) fn make(spec: HandlerSpec, wildcard: bool, default_method: &str) -> Self {
        let kind = match spec {
            HandlerSpec::Callback(callback) => ListenerKind::Callback(callback),
            HandlerSpec::Component(spec) => {
                let (component, method) = parse_component(&spec, default_method);
                ListenerKind::Deferred { component, method }
            }
        };
        Self { kind, wildcard }
    }

    pub(crate) fn replay(event: &str, payload: Vec<Value>) -> Self {
        Self {
            kind: ListenerKind::Replay {
                event: event.to_string(),
                payload: payload.into(),
            },
            wildcard: false,
        }
    }

    /// Whether this listener receives the wildcard call convention
    pub fn is_wildcard(&self) -> bool {
        self.wildcard
    }

    /// Component name and method, for listeners registered by reference
    pub fn component(&self) -> Option<(&str, &str)> {
        match &self.kind {
            ListenerKind::Deferred { component, method } => Some((component, method)),
            _ => None,
        }
    }

    /// Call the listener for `event` on behalf of `dispatcher`
    ///
    /// Component references are resolved here, so a missing binding only
    /// fails once the listener actually fires.
    pub fn invoke(
        &self,
        dispatcher: &Dispatcher,
        event: &str,
        payload: &[Value],
    ) -> Result<Value, DispatchError> {
        let args = if self.wildcard {
            Args::Wildcard { event, payload }
        } else {
            Args::Positional(payload)
        };

        match &self.kind {
            ListenerKind::Callback(callback) => {
                callback(args).map_err(|e| DispatchError::invocation(event, e))
            }
            ListenerKind::Deferred { component, method } => {
                let instance = dispatcher.resolver().resolve(component)?;
                instance
                    .call(method, args)
                    .map_err(|e| DispatchError::invocation(event, e))
            }
            ListenerKind::Replay { event, payload } => {
                dispatcher.dispatch(event.as_str(), payload.to_vec())?;
                Ok(Value::Null)
            }
        }
    }
}

impl fmt::Debug for Listener {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut s = f.debug_struct("Listener");
        match &self.kind {
            ListenerKind::Callback(_) => s.field("callback", &"<fn>"),
            ListenerKind::Deferred { component, method } => {
                s.field("component", component).field("method", method)
            }
            ListenerKind::Replay { event, payload } => {
                s.field("replay", event).field("payload_len", &payload.len())
            }
        };
        s.field("wildcard", &self.wildcard).finish()
    }
}

/// Split `"Component@method"`; a missing or empty method falls back to `default_method`
pub fn parse_component(spec: &str, default_method: &str) -> (String, String) {
    match spec.split_once('@') {
        Some((component, method)) if !method.is_empty() => {
            (component.to_string(), method.to_string())
        }
        Some((component, _)) => (component.to_string(), default_method.to_string()),
        None => (spec.to_string(), default_method.to_string()),
    }
}

#[cfg(test)]
#[path = "listener_tests.rs"]
mod tests;
