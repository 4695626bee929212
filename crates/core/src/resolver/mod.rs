// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Component resolution
//!
//! Listeners registered as `"Component@method"` and subscribers registered
//! by name are looked up through a [`Resolver`] when they are needed, not
//! when they are registered.

mod fake;

use crate::error::{ListenerError, ResolveError};
use crate::events::{Args, Subscriber};
use serde_json::Value;
use std::sync::Arc;

pub use fake::NoOpResolver;
#[cfg(any(test, feature = "test-support"))]
pub use fake::FakeResolver;

/// A resolved instance that listeners can call into
pub trait Component: Send + Sync {
    /// Invoke `method` with the listener arguments
    fn call(&self, method: &str, _args: Args<'_>) -> Result<Value, ListenerError> {
        Err(format!("no method named {method}").into())
    }

    /// Subscriber capability, for components that register their own listeners
    fn as_subscriber(&self) -> Option<&dyn Subscriber> {
        None
    }
}

/// Produces component instances by name
pub trait Resolver: Send + Sync {
    fn resolve(&self, name: &str) -> Result<Arc<dyn Component>, ResolveError>;
}

impl<R: Resolver + ?Sized> Resolver for Arc<R> {
    fn resolve(&self, name: &str) -> Result<Arc<dyn Component>, ResolveError> {
        (**self).resolve(name)
    }
}
