// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Error types for dispatch and component resolution

use thiserror::Error;

/// Boxed error returned by a failing listener
pub type ListenerError = Box<dyn std::error::Error + Send + Sync>;

/// Errors produced while resolving a named component
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ResolveError {
    #[error("no component bound as {0}")]
    NotBound(String),
    #[error("component {0} does not register listeners")]
    NotSubscriber(String),
    #[error("failed to build component {name}: {reason}")]
    Failed { name: String, reason: String },
}

/// Errors that abort a dispatch or subscription
#[derive(Debug, Error)]
pub enum DispatchError {
    #[error(transparent)]
    Resolution(#[from] ResolveError),
    #[error("listener for {event} failed: {source}")]
    Invocation {
        event: String,
        #[source]
        source: ListenerError,
    },
}

impl DispatchError {
    pub(crate) fn invocation(event: &str, source: ListenerError) -> Self {
        Self::Invocation {
            event: event.to_string(),
            source,
        }
    }

    /// The resolver failure behind this error, if any
    pub fn as_resolution(&self) -> Option<&ResolveError> {
        match self {
            Self::Resolution(e) => Some(e),
            Self::Invocation { .. } => None,
        }
    }
}

/// Errors loading dispatcher configuration
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid config: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("invalid {field}: {reason}")]
    Invalid { field: &'static str, reason: String },
}
