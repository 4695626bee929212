// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Traced resolver wrapper for consistent observability

use relay_core::{Component, ResolveError, Resolver};
use std::sync::Arc;

/// Wrapper that adds tracing to any Resolver
#[derive(Clone)]
pub struct TracedResolver<R> {
    inner: R,
}

impl<R> TracedResolver<R> {
    pub fn new(inner: R) -> Self {
        Self { inner }
    }

    pub fn inner(&self) -> &R {
        &self.inner
    }
}

impl<R: Resolver> Resolver for TracedResolver<R> {
    fn resolve(&self, name: &str) -> Result<Arc<dyn Component>, ResolveError> {
        let span = tracing::debug_span!("resolver.resolve", name);
        let _guard = span.enter();

        let start = std::time::Instant::now();
        let result = self.inner.resolve(name);
        let elapsed = start.elapsed();

        match &result {
            Ok(_) => tracing::debug!(elapsed_us = elapsed.as_micros() as u64, "resolved"),
            // Resolution failures surface to the dispatch caller; this is only a breadcrumb
            Err(e) => tracing::warn!(
                elapsed_us = elapsed.as_micros() as u64,
                error = %e,
                "resolve failed"
            ),
        }

        result
    }
}

#[cfg(test)]
#[path = "traced_tests.rs"]
mod tests;
