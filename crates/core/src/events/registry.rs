// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Listener storage
//!
//! Exact keys and wildcard patterns live in separate tables. Wildcard
//! lookups are memoized per concrete event name; any change to the
//! pattern table clears the whole memo, since a new pattern may match
//! names that were already cached.

use super::listener::Listener;
use super::pattern::{is_wildcard, EventPattern};
use std::collections::HashMap;

pub(crate) struct Registry {
    marker: char,
    listeners: HashMap<String, Vec<Listener>>,
    /// Patterns in first-registration order
    wildcards: Vec<(EventPattern, Vec<Listener>)>,
    wildcards_cache: HashMap<String, Vec<Listener>>,
}

impl Registry {
    pub(crate) fn new(marker: char) -> Self {
        Self {
            marker,
            listeners: HashMap::new(),
            wildcards: Vec::new(),
            wildcards_cache: HashMap::new(),
        }
    }

    pub(crate) fn is_wildcard(&self, key: &str) -> bool {
        is_wildcard(key, self.marker)
    }

    /// Append a listener under an exact key or pattern
    pub(crate) fn add(&mut self, key: &str, listener: Listener) {
        if !self.is_wildcard(key) {
            self.listeners
                .entry(key.to_string())
                .or_default()
                .push(listener);
            return;
        }

        match self.wildcards.iter_mut().find(|(p, _)| p.as_str() == key) {
            Some((_, listeners)) => listeners.push(listener),
            None => self.wildcards.push((
                EventPattern::with_marker(key, self.marker),
                vec![listener],
            )),
        }
        self.invalidate();
    }

    /// Listeners registered under exactly `event`
    pub(crate) fn direct(&self, event: &str) -> Vec<Listener> {
        self.listeners.get(event).cloned().unwrap_or_default()
    }

    /// Listeners of every pattern matching `event`, in pattern order
    pub(crate) fn wildcard(&mut self, event: &str) -> Vec<Listener> {
        if let Some(cached) = self.wildcards_cache.get(event) {
            return cached.clone();
        }

        let matched: Vec<Listener> = self
            .wildcards
            .iter()
            .filter(|(pattern, _)| pattern.matches(event))
            .flat_map(|(_, listeners)| listeners.iter().cloned())
            .collect();

        self.wildcards_cache
            .insert(event.to_string(), matched.clone());
        matched
    }

    /// Drop every listener under an exact key or pattern
    ///
    /// Returns whether anything was registered under `key`.
    pub(crate) fn remove(&mut self, key: &str) -> bool {
        if !self.is_wildcard(key) {
            return self.listeners.remove(key).is_some();
        }

        let before = self.wildcards.len();
        self.wildcards.retain(|(p, _)| p.as_str() != key);
        let removed = self.wildcards.len() != before;
        if removed {
            self.invalidate();
        }
        removed
    }

    /// Whether either table has an entry under exactly `key`
    pub(crate) fn has_listeners(&self, key: &str) -> bool {
        self.listeners.contains_key(key) || self.wildcards.iter().any(|(p, _)| p.as_str() == key)
    }

    /// Whether any registered pattern matches `event`
    pub(crate) fn has_wildcard_listeners(&self, event: &str) -> bool {
        self.wildcards.iter().any(|(p, _)| p.matches(event))
    }

    /// Exact keys currently registered
    pub(crate) fn keys(&self) -> Vec<String> {
        self.listeners.keys().cloned().collect()
    }

    fn invalidate(&mut self) {
        if !self.wildcards_cache.is_empty() {
            tracing::debug!(
                entries = self.wildcards_cache.len(),
                "wildcard cache cleared"
            );
        }
        self.wildcards_cache.clear();
    }

    #[cfg(test)]
    pub(crate) fn is_cached(&self, event: &str) -> bool {
        self.wildcards_cache.contains_key(event)
    }
}

#[cfg(test)]
#[path = "registry_tests.rs"]
mod tests;
