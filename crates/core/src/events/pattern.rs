// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Wildcard pattern matching for event keys

/// Default wildcard marker
pub const WILDCARD: char = '*';

/// Glob-style pattern over event names
///
/// The marker matches any run of characters, including none:
///   - `"order.*"` matches `"order.shipped"` and `"order."`
///   - `"*.failed"` matches `"payment.failed"`
///   - `"*"` matches everything
///
/// Matching is case-sensitive.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct EventPattern {
    pattern: String,
    marker: char,
}

impl EventPattern {
    pub fn new(pattern: impl Into<String>) -> Self {
        Self::with_marker(pattern, WILDCARD)
    }

    pub fn with_marker(pattern: impl Into<String>, marker: char) -> Self {
        Self {
            pattern: pattern.into(),
            marker,
        }
    }

    /// Check if this pattern matches an event name
    pub fn matches(&self, event_name: &str) -> bool {
        glob_match(&self.pattern, event_name, self.marker)
    }

    /// Whether the pattern contains its marker at all
    pub fn is_wildcard(&self) -> bool {
        is_wildcard(&self.pattern, self.marker)
    }

    pub fn as_str(&self) -> &str {
        &self.pattern
    }
}

/// Whether a registration key routes to the wildcard table
pub fn is_wildcard(key: &str, marker: char) -> bool {
    key.contains(marker)
}

/// Match `subject` against `pattern`, where `marker` matches zero or more characters
pub fn glob_match(pattern: &str, subject: &str, marker: char) -> bool {
    if pattern == subject {
        return true;
    }

    let pattern: Vec<char> = pattern.chars().collect();
    let subject: Vec<char> = subject.chars().collect();

    let (mut p, mut s) = (0, 0);
    // Position of the last marker seen, and the subject index it was tried at
    let mut backtrack: Option<(usize, usize)> = None;

    while s < subject.len() {
        match pattern.get(p) {
            Some(&c) if c == marker => {
                backtrack = Some((p, s));
                p += 1;
            }
            Some(&c) if c == subject[s] => {
                p += 1;
                s += 1;
            }
            _ => match backtrack {
                Some((star, from)) => {
                    // Let the last marker swallow one more character
                    p = star + 1;
                    s = from + 1;
                    backtrack = Some((star, from + 1));
                }
                None => return false,
            },
        }
    }

    pattern[p..].iter().all(|&c| c == marker)
}

#[cfg(test)]
#[path = "pattern_tests.rs"]
mod tests;
