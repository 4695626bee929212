// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Named component bindings

use relay_core::{Component, ResolveError, Resolver};
use std::collections::HashMap;
use std::sync::{Arc, Mutex, RwLock};
use thiserror::Error;

/// Builds a component instance
pub type Factory = Arc<dyn Fn() -> Result<Arc<dyn Component>, ResolveError> + Send + Sync>;

/// Alias chains longer than this are treated as cycles
const MAX_ALIAS_DEPTH: usize = 32;

/// Errors registering bindings
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BindError {
    #[error("alias {0} would point at itself")]
    SelfAlias(String),
}

#[derive(Clone)]
enum Binding {
    /// New instance on every resolve
    Factory(Factory),
    /// Built on first resolve, then shared
    Singleton {
        factory: Factory,
        instance: Arc<Mutex<Option<Arc<dyn Component>>>>,
    },
    /// Pre-built shared instance
    Instance(Arc<dyn Component>),
}

/// In-memory component container
///
/// Clones share bindings.
#[derive(Clone, Default)]
pub struct Container {
    bindings: Arc<RwLock<HashMap<String, Binding>>>,
    aliases: Arc<RwLock<HashMap<String, String>>>,
}

impl Container {
    pub fn new() -> Self {
        Self::default()
    }

    /// Bind `name` to a factory invoked on every resolve
    pub fn bind<F>(&self, name: impl Into<String>, factory: F)
    where
        F: Fn() -> Result<Arc<dyn Component>, ResolveError> + Send + Sync + 'static,
    {
        self.insert(name.into(), Binding::Factory(Arc::new(factory)));
    }

    /// Bind `name` to a factory invoked once, on first resolve
    pub fn singleton<F>(&self, name: impl Into<String>, factory: F)
    where
        F: Fn() -> Result<Arc<dyn Component>, ResolveError> + Send + Sync + 'static,
    {
        self.insert(
            name.into(),
            Binding::Singleton {
                factory: Arc::new(factory),
                instance: Arc::default(),
            },
        );
    }

    /// Bind `name` to an existing instance
    pub fn instance(&self, name: impl Into<String>, component: Arc<dyn Component>) {
        self.insert(name.into(), Binding::Instance(component));
    }

    /// Make `alias` resolve to whatever `target` resolves to
    pub fn alias(&self, alias: impl Into<String>, target: impl Into<String>) -> Result<(), BindError> {
        let (alias, target) = (alias.into(), target.into());
        if alias == target {
            return Err(BindError::SelfAlias(alias));
        }
        tracing::debug!(alias = %alias, target = %target, "alias registered");
        self.aliases
            .write()
            .unwrap_or_else(|e| e.into_inner())
            .insert(alias, target);
        Ok(())
    }

    /// Whether `name` (or what it aliases) is bound
    pub fn has(&self, name: &str) -> bool {
        self.canonical(name)
            .map(|name| {
                self.bindings
                    .read()
                    .unwrap_or_else(|e| e.into_inner())
                    .contains_key(&name)
            })
            .unwrap_or(false)
    }

    /// Remove a binding; aliases pointing at it stay registered
    pub fn forget(&self, name: &str) {
        self.bindings
            .write()
            .unwrap_or_else(|e| e.into_inner())
            .remove(name);
    }

    fn insert(&self, name: String, binding: Binding) {
        tracing::debug!(name = %name, "component bound");
        self.bindings
            .write()
            .unwrap_or_else(|e| e.into_inner())
            .insert(name, binding);
    }

    /// Follow aliases to the bound name
    fn canonical(&self, name: &str) -> Result<String, ResolveError> {
        let aliases = self.aliases.read().unwrap_or_else(|e| e.into_inner());
        let mut current = name;
        for _ in 0..MAX_ALIAS_DEPTH {
            match aliases.get(current) {
                Some(target) => current = target.as_str(),
                None => return Ok(current.to_string()),
            }
        }
        Err(ResolveError::Failed {
            name: name.to_string(),
            reason: "alias cycle".to_string(),
        })
    }
}

impl Resolver for Container {
    fn resolve(&self, name: &str) -> Result<Arc<dyn Component>, ResolveError> {
        let canonical = self.canonical(name)?;
        // Factories run without the table lock so they may resolve other components
        let binding = self
            .bindings
            .read()
            .unwrap_or_else(|e| e.into_inner())
            .get(&canonical)
            .cloned()
            .ok_or_else(|| ResolveError::NotBound(name.to_string()))?;

        match binding {
            Binding::Factory(factory) => factory(),
            Binding::Instance(component) => Ok(component),
            Binding::Singleton { factory, instance } => {
                if let Some(component) = instance.lock().unwrap_or_else(|e| e.into_inner()).as_ref()
                {
                    return Ok(Arc::clone(component));
                }
                let built = factory()?;
                let mut slot = instance.lock().unwrap_or_else(|e| e.into_inner());
                // First build to land wins
                Ok(Arc::clone(slot.get_or_insert(built)))
            }
        }
    }
}

#[cfg(test)]
#[path = "container_tests.rs"]
mod tests;
