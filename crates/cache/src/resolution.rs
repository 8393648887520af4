//! Per-key memoization of resolved values

use crate::stats::{CacheStats, Counters};
use parking_lot::RwLock;
use serde_json::Value;
use std::collections::HashMap;
use tracing::debug;

/// Map from variable key to its resolved, already-typed value
///
/// A key is written at most once until it is removed or the cache is
/// cleared; later writes for the same key keep the first value. Readers
/// never observe a partially written entry.
#[derive(Debug, Default)]
pub struct ResolutionCache {
    entries: RwLock<HashMap<String, Value>>,
    counters: Counters,
}

impl ResolutionCache {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Look up a resolved value, recording a hit or miss
    #[must_use]
    pub fn get(&self, key: &str) -> Option<Value> {
        let value = self.entries.read().get(key).cloned();
        self.counters.record(value.is_some());
        value
    }

    /// Store a resolved value unless the key already has one.
    ///
    /// Returns the value held by the cache afterwards, which is the earlier
    /// value when two resolutions of the same key raced.
    pub fn insert(&self, key: impl Into<String>, value: Value) -> Value {
        let mut entries = self.entries.write();
        entries.entry(key.into()).or_insert(value).clone()
    }

    #[must_use]
    pub fn contains(&self, key: &str) -> bool {
        self.entries.read().contains_key(key)
    }

    /// Drop one key so its next access resolves again
    pub fn remove(&self, key: &str) -> Option<Value> {
        let removed = self.entries.write().remove(key);
        if removed.is_some() {
            debug!(key = %key, "removed cached value");
        }
        removed
    }

    /// Drop every entry and reset the statistics
    pub fn clear(&self) {
        let mut entries = self.entries.write();
        let count = entries.len();
        entries.clear();
        self.counters.reset();
        debug!(entries = count, "cleared resolution cache");
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.read().len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.read().is_empty()
    }

    /// Cached keys in sorted order
    #[must_use]
    pub fn keys(&self) -> Vec<String> {
        let mut keys: Vec<String> = self.entries.read().keys().cloned().collect();
        keys.sort();
        keys
    }

    #[must_use]
    pub fn stats(&self) -> CacheStats {
        self.counters.snapshot(self.len())
    }
}
