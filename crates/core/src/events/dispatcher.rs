// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Synchronous event dispatcher
//!
//! Listeners run in-line on the caller's stack, in registration order:
//! exact-name listeners first, then wildcard matches, then listeners on
//! capabilities declared by the event's type. A listener may dispatch,
//! listen or forget while it runs; each dispatch iterates over a snapshot
//! taken before the first listener fires.

use super::listener::{HandlerSpec, Listener};
use super::payload::{Payload, Target};
use super::registry::Registry;
use super::subscriber::SubscriberSpec;
use crate::config::DispatcherConfig;
use crate::error::{ConfigError, DispatchError, ResolveError};
use crate::resolver::{NoOpResolver, Resolver};
use crate::types::{Event, TypeRegistry};
use serde_json::Value;
use std::sync::{Arc, Mutex, MutexGuard};

/// Outcome of [`Dispatcher::fire`]
#[derive(Debug, Clone, PartialEq)]
pub enum Dispatched {
    /// Every response collected, in listener order
    Responses(Vec<Value>),
    /// Halt mode: the first non-null response, if any listener gave one
    Halted(Option<Value>),
}

impl Dispatched {
    pub fn into_responses(self) -> Vec<Value> {
        match self {
            Self::Responses(responses) => responses,
            Self::Halted(response) => response.into_iter().collect(),
        }
    }

    /// The halted response; `None` for a collected dispatch
    pub fn into_halted(self) -> Option<Value> {
        match self {
            Self::Responses(_) => None,
            Self::Halted(response) => response,
        }
    }
}

/// One or more keys to register a listener under
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EventKeys(Vec<String>);

impl From<&str> for EventKeys {
    fn from(key: &str) -> Self {
        Self(vec![key.to_string()])
    }
}

impl From<String> for EventKeys {
    fn from(key: String) -> Self {
        Self(vec![key])
    }
}

impl From<Vec<String>> for EventKeys {
    fn from(keys: Vec<String>) -> Self {
        Self(keys)
    }
}

impl From<Vec<&str>> for EventKeys {
    fn from(keys: Vec<&str>) -> Self {
        Self(keys.into_iter().map(String::from).collect())
    }
}

impl<const N: usize> From<[&str; N]> for EventKeys {
    fn from(keys: [&str; N]) -> Self {
        Self(keys.into_iter().map(String::from).collect())
    }
}

/// Registry and type table, guarded together
struct State {
    registry: Registry,
    types: TypeRegistry,
}

struct Inner {
    config: DispatcherConfig,
    resolver: Arc<dyn Resolver>,
    state: Mutex<State>,
}

/// The event dispatcher
///
/// Clones share listeners; separately constructed dispatchers are isolated.
#[derive(Clone)]
pub struct Dispatcher {
    inner: Arc<Inner>,
}

impl Dispatcher {
    /// Dispatcher with default config and no component resolver
    pub fn new() -> Self {
        Self::build(DispatcherConfig::default(), Arc::new(NoOpResolver))
    }

    pub fn with_resolver(resolver: Arc<dyn Resolver>) -> Self {
        Self::build(DispatcherConfig::default(), resolver)
    }

    /// Dispatcher with an explicit config, validated before use
    pub fn from_parts(
        config: DispatcherConfig,
        resolver: Arc<dyn Resolver>,
    ) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self::build(config, resolver))
    }

    fn build(config: DispatcherConfig, resolver: Arc<dyn Resolver>) -> Self {
        let state = State {
            registry: Registry::new(config.wildcard),
            types: TypeRegistry::new(),
        };
        Self {
            inner: Arc::new(Inner {
                config,
                resolver,
                state: Mutex::new(state),
            }),
        }
    }

    pub fn config(&self) -> &DispatcherConfig {
        &self.inner.config
    }

    pub(crate) fn resolver(&self) -> &dyn Resolver {
        self.inner.resolver.as_ref()
    }

    fn state(&self) -> MutexGuard<'_, State> {
        self.inner.state.lock().unwrap_or_else(|e| e.into_inner())
    }

    /// Register a listener under each of `events`
    ///
    /// Keys containing the wildcard marker are patterns; their listeners
    /// receive the concrete event name alongside the payload.
    pub fn listen(&self, events: impl Into<EventKeys>, handler: impl Into<HandlerSpec>) {
        let EventKeys(keys) = events.into();
        let handler = handler.into();

        let mut state = self.state();
        for key in keys {
            let wildcard = state.registry.is_wildcard(&key);
            let listener = self.make_listener(handler.clone(), wildcard);
            tracing::debug!(event = %key, wildcard, "listener registered");
            state.registry.add(&key, listener);
        }
    }

    /// Normalize a handler into its invocable form
    pub fn make_listener(&self, handler: impl Into<HandlerSpec>, wildcard: bool) -> Listener {
        Listener::make(handler.into(), wildcard, &self.inner.config.default_method)
    }

    /// Whether anything is registered under exactly `event`
    pub fn has_listeners(&self, event: &str) -> bool {
        self.state().registry.has_listeners(event)
    }

    /// Whether any wildcard pattern matches `event`
    pub fn has_wildcard_listeners(&self, event: &str) -> bool {
        self.state().registry.has_wildcard_listeners(event)
    }

    /// Make an event type known, so capability listeners apply to it
    pub fn register_type<E: Event>(&self) {
        self.state().types.register::<E>();
    }

    /// Make a type known by name with an explicit capability list
    pub fn register_type_named<I, S>(&self, name: impl Into<String>, capabilities: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.state().types.register_named(name, capabilities);
    }

    /// All listeners for `event`, in the order they will fire
    pub fn get_listeners(&self, event: &str) -> Vec<Listener> {
        let mut state = self.state();
        let State { registry, types } = &mut *state;

        let mut listeners = registry.direct(event);
        listeners.extend(registry.wildcard(event));
        if let Some(capabilities) = types.capabilities(event) {
            for capability in capabilities {
                listeners.extend(registry.direct(capability));
            }
        }
        listeners
    }

    /// Register a subscriber, resolving it by name if needed
    pub fn subscribe(&self, subscriber: impl Into<SubscriberSpec>) -> Result<(), DispatchError> {
        match subscriber.into() {
            SubscriberSpec::Instance(subscriber) => subscriber.subscribe(self),
            SubscriberSpec::Named(name) => {
                let instance = self.inner.resolver.resolve(&name)?;
                let subscriber = instance
                    .as_subscriber()
                    .ok_or(ResolveError::NotSubscriber(name))?;
                subscriber.subscribe(self);
            }
        }
        Ok(())
    }

    /// Dispatch until the first non-null response
    pub fn until(
        &self,
        event: impl Into<Target>,
        payload: impl Into<Payload>,
    ) -> Result<Option<Value>, DispatchError> {
        self.fire(event, payload, true).map(Dispatched::into_halted)
    }

    /// Dispatch to every listener and collect their responses
    pub fn dispatch(
        &self,
        event: impl Into<Target>,
        payload: impl Into<Payload>,
    ) -> Result<Vec<Value>, DispatchError> {
        self.fire(event, payload, false)
            .map(Dispatched::into_responses)
    }

    /// Dispatch an event object keyed by its type name
    pub fn dispatch_event<E: Event>(&self, event: &E) -> Result<Vec<Value>, DispatchError> {
        self.dispatch(Target::object(event), ())
    }

    /// Invoke the listeners for `event`
    ///
    /// An event object replaces `payload` with itself. A listener returning
    /// `false` stops propagation. With `halt` set, the first non-null
    /// response ends the dispatch and is returned alone.
    pub fn fire(
        &self,
        event: impl Into<Target>,
        payload: impl Into<Payload>,
        halt: bool,
    ) -> Result<Dispatched, DispatchError> {
        let (event, payload) = self.parse_event_and_payload(event.into(), payload.into());
        let listeners = self.get_listeners(&event);

        let span = tracing::debug_span!("events.dispatch", event = %event, halt);
        let _guard = span.enter();

        let mut responses = Vec::with_capacity(listeners.len());
        for (index, listener) in listeners.iter().enumerate() {
            tracing::trace!(index, wildcard = listener.is_wildcard(), "invoking");
            let response = listener.invoke(self, &event, payload.as_slice())?;

            if halt && !response.is_null() {
                tracing::debug!(index, "halted on response");
                return Ok(Dispatched::Halted(Some(response)));
            }

            if response == Value::Bool(false) {
                tracing::debug!(index, "propagation stopped");
                break;
            }

            responses.push(response);
        }

        tracing::debug!(
            listeners = listeners.len(),
            responses = responses.len(),
            "dispatched"
        );

        Ok(if halt {
            Dispatched::Halted(None)
        } else {
            Dispatched::Responses(responses)
        })
    }

    fn parse_event_and_payload(&self, target: Target, payload: Payload) -> (String, Payload) {
        match target {
            Target::Named(name) => (name, payload),
            Target::Object {
                type_name,
                capabilities,
                value,
            } => {
                let mut state = self.state();
                if !state.types.contains(type_name) {
                    state
                        .types
                        .register_named(type_name, capabilities.iter().copied());
                }
                (type_name.to_string(), Payload::from(vec![value]))
            }
        }
    }

    /// Stage `payload` for `event`, to be dispatched by [`Dispatcher::flush`]
    pub fn push(&self, event: &str, payload: impl Into<Payload>) {
        let key = self.pushed_key(event);
        let listener = Listener::replay(event, payload.into().into_vec());
        tracing::debug!(event, "payload pushed");
        self.state().registry.add(&key, listener);
    }

    /// Dispatch every payload staged for `event`
    pub fn flush(&self, event: &str) -> Result<(), DispatchError> {
        self.fire(self.pushed_key(event), (), false).map(|_| ())
    }

    /// Remove every listener under an exact key or pattern
    pub fn forget(&self, event: &str) {
        if self.state().registry.remove(event) {
            tracing::debug!(event, "listeners forgotten");
        }
    }

    /// Discard all staged payloads
    pub fn forget_pushed(&self) {
        let suffix = &self.inner.config.pushed_suffix;
        let mut state = self.state();
        for key in state.registry.keys() {
            if key.ends_with(suffix.as_str()) {
                state.registry.remove(&key);
                tracing::debug!(event = %key, "pushed listeners forgotten");
            }
        }
    }

    fn pushed_key(&self, event: &str) -> String {
        format!("{}{}", event, self.inner.config.pushed_suffix)
    }
}

impl Default for Dispatcher {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for Dispatcher {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Dispatcher")
            .field("config", &self.inner.config)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
#[path = "dispatcher_tests.rs"]
mod tests;
