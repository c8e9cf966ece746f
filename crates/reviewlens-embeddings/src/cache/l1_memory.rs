//! In-memory cache tier using moka.
//!
//! Bounded capacity with idle-based eviction; review batches are short-lived
//! so entries that go cold within a run can be dropped freely — the JSON tier
//! underneath still has them.

use std::time::Duration;

use moka::sync::Cache;

/// Hot tier of the embedding cache, keyed by content hash.
pub struct L1MemoryCache {
    cache: Cache<String, Vec<f32>>,
}

impl L1MemoryCache {
    /// Create a tier holding at most `capacity` vectors.
    pub fn new(capacity: u64) -> Self {
        let cache = Cache::builder()
            .max_capacity(capacity)
            .time_to_idle(Duration::from_secs(1800))
            .build();
        Self { cache }
    }

    /// Look up a vector by content hash.
    pub fn get(&self, key: &str) -> Option<Vec<f32>> {
        self.cache.get(key)
    }

    /// Store a vector under its content hash.
    pub fn insert(&self, key: String, vector: Vec<f32>) {
        self.cache.insert(key, vector);
    }

    /// Entries currently resident in this tier.
    pub fn len(&self) -> u64 {
        self.cache.entry_count()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
