//! Response Cache Module
//!
//! Endpoint-keyed storage of parsed payloads plus the client's error counter.

use std::collections::HashMap;

use serde_json::Value;

use crate::cache::{CacheEntry, ClientStats};

// == Response Cache ==
/// Stale-forever cache keyed by endpoint string (query suffix included).
///
/// There is no TTL and no size bound: entries are never invalidated,
/// overwritten or evicted, so the map grows with every distinct endpoint.
#[derive(Debug, Default)]
pub struct ResponseCache {
    /// Endpoint -> payload storage
    entries: HashMap<String, CacheEntry>,
    /// Error counter and derived cache size
    stats: ClientStats,
}

impl ResponseCache {
    // == Constructor ==
    /// Creates an empty cache.
    pub fn new() -> Self {
        Self::default()
    }

    // == Get ==
    /// Returns the entry stored for `endpoint`, if any.
    pub fn get(&self, endpoint: &str) -> Option<&CacheEntry> {
        self.entries.get(endpoint)
    }

    // == Insert ==
    /// Stores `value` under `endpoint` unless the endpoint is already cached.
    ///
    /// Returns the entry that is cached after the call: the new one, or the
    /// pre-existing one if another fetch got there first.
    pub fn insert(&mut self, endpoint: String, value: Value) -> &CacheEntry {
        self.entries
            .entry(endpoint)
            .or_insert_with(|| CacheEntry::new(value))
    }

    // == Record Error ==
    /// Counts one failed fetch.
    pub fn record_error(&mut self) {
        self.stats.record_error();
    }

    // == Stats ==
    /// Returns current statistics.
    pub fn stats(&self) -> ClientStats {
        let mut stats = self.stats;
        stats.set_cache_size(self.entries.len());
        stats
    }

    // == Length ==
    /// Returns the number of cached endpoints.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    // == Is Empty ==
    /// Returns true if nothing has been cached yet.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

// == Unit Tests ==
#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_cache_new() {
        let cache = ResponseCache::new();
        assert_eq!(cache.len(), 0);
        assert!(cache.is_empty());
        assert_eq!(cache.stats(), ClientStats::new());
    }

    #[test]
    fn test_cache_insert_and_get() {
        let mut cache = ResponseCache::new();

        cache.insert("people/1".to_string(), json!({"name": "Luke Skywalker"}));
        let entry = cache.get("people/1").unwrap();

        assert_eq!(entry.value["name"], "Luke Skywalker");
        assert_eq!(cache.len(), 1);
    }

    #[test]
    fn test_cache_get_missing() {
        let cache = ResponseCache::new();
        assert!(cache.get("people/1").is_none());
    }

    #[test]
    fn test_cache_never_overwrites() {
        let mut cache = ResponseCache::new();

        cache.insert("films/".to_string(), json!({"count": 6}));
        let kept = cache.insert("films/".to_string(), json!({"count": 7}));

        assert_eq!(kept.value["count"], 6);
        assert_eq!(cache.get("films/").unwrap().value["count"], 6);
        assert_eq!(cache.len(), 1);
    }

    #[test]
    fn test_insert_returns_entry_and_size_is_derived() {
        let mut cache = ResponseCache::new();

        let name = cache
            .insert("people/1".to_string(), json!({"name": "Luke"}))
            .value["name"]
            .clone();
        assert_eq!(name, "Luke");
        assert_eq!(cache.stats().cache_size, 1);

        cache.insert("people/1".to_string(), json!({"name": "Leia"}));
        cache.insert("people/2".to_string(), json!({"name": "C-3PO"}));
        assert_eq!(cache.stats().cache_size, 2);
        assert_eq!(cache.stats().cache_size, cache.len());
    }

    #[test]
    fn test_cache_key_includes_query() {
        let mut cache = ResponseCache::new();

        cache.insert("starships/?page=1".to_string(), json!({"count": 36}));

        assert!(cache.get("starships/").is_none());
        assert!(cache.get("starships/?page=1").is_some());
    }

    #[test]
    fn test_cache_stats() {
        let mut cache = ResponseCache::new();

        cache.insert("people/1".to_string(), json!({}));
        cache.insert("people/2".to_string(), json!({}));
        cache.record_error();

        let stats = cache.stats();
        assert_eq!(stats.cache_size, 2);
        assert_eq!(stats.errors, 1);
    }
}
