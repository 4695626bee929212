// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Dispatch targets and payload coercion

use crate::types::{event_name, Event};
use serde_json::Value;

/// Positional arguments handed to listeners
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Payload(Vec<Value>);

impl Payload {
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn as_slice(&self) -> &[Value] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn into_vec(self) -> Vec<Value> {
        self.0
    }
}

impl From<Vec<Value>> for Payload {
    fn from(values: Vec<Value>) -> Self {
        Self(values)
    }
}

/// Arrays are spread, null is empty, anything else is a single argument
impl From<Value> for Payload {
    fn from(value: Value) -> Self {
        match value {
            Value::Null => Self::empty(),
            Value::Array(values) => Self(values),
            other => Self(vec![other]),
        }
    }
}

impl From<()> for Payload {
    fn from(_: ()) -> Self {
        Self::empty()
    }
}

impl<const N: usize> From<[Value; N]> for Payload {
    fn from(values: [Value; N]) -> Self {
        Self(values.into())
    }
}

/// What is being dispatched: a named event or an event object
#[derive(Debug, Clone, PartialEq)]
pub enum Target {
    Named(String),
    Object {
        type_name: &'static str,
        capabilities: &'static [&'static str],
        value: Value,
    },
}

impl Target {
    /// Dispatch `event` keyed by its type name, carrying itself as the payload
    pub fn object<E: Event>(event: &E) -> Self {
        Self::Object {
            type_name: event_name::<E>(),
            capabilities: E::CAPABILITIES,
            value: event.to_payload(),
        }
    }

    /// Canonical event name
    pub fn name(&self) -> &str {
        match self {
            Self::Named(name) => name,
            Self::Object { type_name, .. } => type_name,
        }
    }
}

impl From<&str> for Target {
    fn from(name: &str) -> Self {
        Self::Named(name.to_string())
    }
}

impl From<String> for Target {
    fn from(name: String) -> Self {
        Self::Named(name)
    }
}

impl From<&String> for Target {
    fn from(name: &String) -> Self {
        Self::Named(name.clone())
    }
}
