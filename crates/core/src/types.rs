// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Event object types and the capabilities they declare
//!
//! An event value dispatched as an object is keyed by its Rust type name.
//! Listeners can also be registered under a capability name; they then
//! receive every event type that declares that capability.

use serde_json::Value;
use std::collections::HashMap;

/// A value that can be dispatched as an event object
pub trait Event: Send + Sync + 'static {
    /// Capability names this type declares, in declaration order
    const CAPABILITIES: &'static [&'static str] = &[];

    /// The value handed to listeners as the sole payload element
    fn to_payload(&self) -> Value;
}

/// Canonical event name of an event type
pub fn event_name<E: Event>() -> &'static str {
    std::any::type_name::<E>()
}

/// Known event types and their declared capabilities
#[derive(Debug, Clone, Default)]
pub struct TypeRegistry {
    types: HashMap<String, Vec<String>>,
}

impl TypeRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register an event type under its canonical name
    pub fn register<E: Event>(&mut self) {
        self.register_named(event_name::<E>(), E::CAPABILITIES.iter().copied());
    }

    /// Register a type by name with an explicit capability list
    ///
    /// Re-registering a name replaces its capabilities.
    pub fn register_named<I, S>(&mut self, name: impl Into<String>, capabilities: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.types.insert(
            name.into(),
            capabilities.into_iter().map(Into::into).collect(),
        );
    }

    /// Whether a type exists under this name
    pub fn contains(&self, name: &str) -> bool {
        self.types.contains_key(name)
    }

    /// Capabilities of the named type, `None` if no such type is known
    pub fn capabilities(&self, name: &str) -> Option<&[String]> {
        self.types.get(name).map(Vec::as_slice)
    }
}

#[cfg(test)]
#[path = "types_tests.rs"]
mod tests;
