//! Two-tier embedding cache with an explicit load/flush lifecycle.
//!
//! The cache is a scoped collaborator passed into the embedding step, not a
//! process-wide singleton: open it once before a batch, flush it once after.

mod l1_memory;
mod l2_json;

use std::path::PathBuf;

use tracing::debug;

use reviewlens_core::errors::LensResult;

pub use l1_memory::L1MemoryCache;
pub use l2_json::L2JsonStore;

/// Content-hash keyed embedding cache: moka in front, JSON file behind.
pub struct EmbeddingCache {
    l1: L1MemoryCache,
    l2: L2JsonStore,
}

impl EmbeddingCache {
    /// Open the cache, loading the persistent tier once.
    pub fn open(path: impl Into<PathBuf>, l1_capacity: u64) -> Self {
        let l2 = L2JsonStore::open(path);
        debug!(entries = l2.len(), "opened embedding cache");
        Self {
            l1: L1MemoryCache::new(l1_capacity),
            l2,
        }
    }

    /// Look up a vector, promoting persistent-tier hits into memory.
    pub fn get(&self, key: &str) -> Option<Vec<f32>> {
        if let Some(vector) = self.l1.get(key) {
            return Some(vector);
        }
        let vector = self.l2.get(key)?;
        self.l1.insert(key.to_string(), vector.clone());
        Some(vector)
    }

    /// Write a vector through both tiers.
    pub fn put(&mut self, key: String, vector: Vec<f32>) {
        self.l1.insert(key.clone(), vector.clone());
        self.l2.insert(key, vector);
    }

    /// Persist pending writes. A no-op when nothing changed.
    pub fn flush(&mut self) -> LensResult<()> {
        self.l2.flush()
    }

    /// Entries in the persistent tier.
    pub fn len(&self) -> usize {
        self.l2.len()
    }

    pub fn is_empty(&self) -> bool {
        self.l2.is_empty()
    }
}
