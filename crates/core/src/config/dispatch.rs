// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Dispatcher configuration
//!
//! Loaded from TOML:
//!
//! ```toml
//! wildcard = "*"
//! pushed_suffix = "_pushed"
//! default_method = "handle"
//! ```

use crate::error::ConfigError;
use serde::{Deserialize, Serialize};

/// Tunables for key routing and deferred events
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct DispatcherConfig {
    /// Marker that turns a key into a wildcard pattern
    pub wildcard: char,
    /// Suffix appended to an event name to stage pushed payloads
    pub pushed_suffix: String,
    /// Method invoked on `"Component"` specs that omit `@method`
    pub default_method: String,
}

impl DispatcherConfig {
    /// Parse and validate a TOML document
    pub fn from_toml_str(source: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(source)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.pushed_suffix.is_empty() {
            return Err(ConfigError::Invalid {
                field: "pushed_suffix",
                reason: "must not be empty".to_string(),
            });
        }
        // A suffix carrying the marker would route staged events to the wildcard table
        if self.pushed_suffix.contains(self.wildcard) {
            return Err(ConfigError::Invalid {
                field: "pushed_suffix",
                reason: format!("must not contain the wildcard marker '{}'", self.wildcard),
            });
        }
        if self.default_method.is_empty() {
            return Err(ConfigError::Invalid {
                field: "default_method",
                reason: "must not be empty".to_string(),
            });
        }
        Ok(())
    }
}

impl Default for DispatcherConfig {
    fn default() -> Self {
        Self {
            wildcard: '*',
            pushed_suffix: "_pushed".to_string(),
            default_method: "handle".to_string(),
        }
    }
}

#[cfg(test)]
#[path = "dispatch_tests.rs"]
mod tests;
