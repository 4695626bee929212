// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Resolvers for dispatchers without a container, and for tests

use super::{Component, Resolver};
use crate::error::ResolveError;
use std::sync::Arc;
#[cfg(any(test, feature = "test-support"))]
use std::{collections::HashMap, sync::Mutex};

/// Resolver with no bindings; every lookup fails
#[derive(Clone, Copy, Debug, Default)]
pub struct NoOpResolver;

impl Resolver for NoOpResolver {
    fn resolve(&self, name: &str) -> Result<Arc<dyn Component>, ResolveError> {
        Err(ResolveError::NotBound(name.to_string()))
    }
}

/// In-memory resolver that records every lookup
#[cfg(any(test, feature = "test-support"))]
#[derive(Clone, Default)]
pub struct FakeResolver {
    components: Arc<Mutex<HashMap<String, Arc<dyn Component>>>>,
    calls: Arc<Mutex<Vec<String>>>,
}

#[cfg(any(test, feature = "test-support"))]
impl FakeResolver {
    pub fn new() -> Self {
        Self::default()
    }

    /// Bind a shared instance under `name`
    pub fn bind(&self, name: impl Into<String>, component: Arc<dyn Component>) {
        self.components
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .insert(name.into(), component);
    }

    /// Names looked up so far, in order
    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap_or_else(|e| e.into_inner()).clone()
    }
}

#[cfg(any(test, feature = "test-support"))]
impl Resolver for FakeResolver {
    fn resolve(&self, name: &str) -> Result<Arc<dyn Component>, ResolveError> {
        self.calls
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .push(name.to_string());
        self.components
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .get(name)
            .cloned()
            .ok_or_else(|| ResolveError::NotBound(name.to_string()))
    }
}

#[cfg(test)]
#[path = "fake_tests.rs"]
mod tests;
