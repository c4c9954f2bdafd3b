//! Session-scoped variable overrides.
//!
//! The session replaces what used to be ambient global state with an explicit
//! object the caller owns and passes into the resolution step. Precedence,
//! lowest to highest: document globals, session overrides, freshly supplied
//! values (layered by the caller, typically via
//! [`prepare_request`](crate::transport::prepare_request)).

use std::collections::HashMap;

/// Caller-owned store of variable values remembered across resolutions.
///
/// The core never mutates a session behind the caller's back; values enter
/// only through [`set`](Self::set) and [`remember`](Self::remember).
#[derive(Debug, Clone, Default)]
pub struct VariableSession {
    overrides: HashMap<String, String>,
}

impl VariableSession {
    /// Creates an empty session.
    pub fn new() -> Self {
        Self::default()
    }

    /// Layers session overrides on top of document globals.
    ///
    /// # Returns
    ///
    /// A merged map where a session value beats a global value of the same
    /// name.
    pub fn layer(&self, globals: &HashMap<String, String>) -> HashMap<String, String> {
        let mut merged = globals.clone();
        for (name, value) in &self.overrides {
            merged.insert(name.clone(), value.clone());
        }
        merged
    }

    /// Names from `required` whose layered value is still absent or empty,
    /// sorted for a deterministic prompting order.
    pub fn missing_names(
        merged: &HashMap<String, String>,
        required: &HashMap<String, String>,
    ) -> Vec<String> {
        let mut missing: Vec<String> = required
            .keys()
            .filter(|name| merged.get(*name).map_or(true, String::is_empty))
            .cloned()
            .collect();
        missing.sort_unstable();
        missing
    }

    /// Stores a single override.
    pub fn set(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.overrides.insert(name.into(), value.into());
    }

    /// Gets a stored override.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.overrides.get(name).map(String::as_str)
    }

    /// Merges a batch of supplied values into the session so later
    /// resolutions reuse them.
    pub fn remember(&mut self, values: &HashMap<String, String>) {
        for (name, value) in values {
            self.overrides.insert(name.clone(), value.clone());
        }
    }

    /// Forgets every stored override.
    pub fn clear(&mut self) {
        self.overrides.clear();
    }

    /// Returns the number of stored overrides.
    pub fn len(&self) -> usize {
        self.overrides.len()
    }

    /// Checks whether the session holds no overrides.
    pub fn is_empty(&self) -> bool {
        self.overrides.is_empty()
    }
}
