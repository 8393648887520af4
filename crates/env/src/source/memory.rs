use parking_lot::RwLock;
use std::collections::HashMap;

use super::ReadEnv;

/// Mutable in-process environment
///
/// Writes are visible to the next lookup, which makes it the natural
/// source for tests that change values between accesses.
#[derive(Debug, Default)]
pub struct InMemoryEnv {
    vars: RwLock<HashMap<String, String>>,
}

impl InMemoryEnv {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a variable, returning the previous value if any
    pub fn set(&self, key: impl Into<String>, value: impl Into<String>) -> Option<String> {
        self.vars.write().insert(key.into(), value.into())
    }

    /// Remove a variable, returning its value if present
    pub fn remove(&self, key: &str) -> Option<String> {
        self.vars.write().remove(key)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.vars.read().len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.vars.read().is_empty()
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for InMemoryEnv {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let vars = iter
            .into_iter()
            .map(|(k, v)| (k.into(), v.into()))
            .collect();
        Self {
            vars: RwLock::new(vars),
        }
    }
}

impl ReadEnv for InMemoryEnv {
    fn var(&self, key: &str) -> Option<String> {
        self.vars.read().get(key).cloned()
    }
}
