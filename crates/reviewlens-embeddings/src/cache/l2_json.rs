//! Persistent cache tier backed by a single JSON file.
//!
//! The file maps content hash → flat vector of floats. It is read once when
//! the store is opened and written back only on an explicit flush, and only
//! when something changed since the last flush.

use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

use tracing::{debug, warn};

use reviewlens_core::errors::{CacheError, LensResult};

/// Durable tier of the embedding cache.
pub struct L2JsonStore {
    path: PathBuf,
    store: HashMap<String, Vec<f32>>,
    dirty: bool,
}

impl L2JsonStore {
    /// Open the store, loading the cache file if it exists.
    ///
    /// A missing file starts empty; an unreadable or corrupt file is logged
    /// and treated as empty rather than failing the run.
    pub fn open(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let store = match fs::read_to_string(&path) {
            Ok(raw) => match serde_json::from_str(&raw) {
                Ok(store) => store,
                Err(err) => {
                    warn!(path = %path.display(), error = %err, "corrupt embedding cache file, starting empty");
                    HashMap::new()
                }
            },
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => HashMap::new(),
            Err(err) => {
                warn!(path = %path.display(), error = %err, "unreadable embedding cache file, starting empty");
                HashMap::new()
            }
        };
        Self {
            path,
            store,
            dirty: false,
        }
    }

    /// Look up a vector by content hash.
    pub fn get(&self, key: &str) -> Option<Vec<f32>> {
        self.store.get(key).cloned()
    }

    /// Store a vector and mark the store dirty.
    pub fn insert(&mut self, key: String, vector: Vec<f32>) {
        self.store.insert(key, vector);
        self.dirty = true;
    }

    /// Write the store back to disk if anything changed since the last flush.
    pub fn flush(&mut self) -> LensResult<()> {
        if !self.dirty {
            return Ok(());
        }
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent).map_err(|source| CacheError::DirCreateFailed {
                path: parent.to_path_buf(),
                source,
            })?;
        }
        let payload = serde_json::to_string(&self.store)
            .map_err(|source| CacheError::SerializeFailed { source })?;
        fs::write(&self.path, payload).map_err(|source| CacheError::WriteFailed {
            path: self.path.clone(),
            source,
        })?;
        self.dirty = false;
        debug!(path = %self.path.display(), entries = self.store.len(), "flushed embedding cache");
        Ok(())
    }

    pub fn len(&self) -> usize {
        self.store.len()
    }

    pub fn is_empty(&self) -> bool {
        self.store.is_empty()
    }

    /// Path of the backing file.
    pub fn path(&self) -> &Path {
        &self.path
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn missing_file_starts_empty() {
        let dir = tempdir().unwrap();
        let store = L2JsonStore::open(dir.path().join("cache.json"));
        assert!(store.is_empty());
    }

    #[test]
    fn flush_then_reopen_roundtrips() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("nested/cache.json");

        let mut store = L2JsonStore::open(&path);
        store.insert("abc".to_string(), vec![1.0, -2.0, 0.5]);
        store.flush().unwrap();

        let reopened = L2JsonStore::open(&path);
        assert_eq!(reopened.get("abc"), Some(vec![1.0, -2.0, 0.5]));
    }

    #[test]
    fn flush_without_writes_is_noop() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("cache.json");
        let mut store = L2JsonStore::open(&path);
        store.flush().unwrap();
        assert!(!path.exists());
    }

    #[test]
    fn corrupt_file_loads_as_empty() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("cache.json");
        fs::write(&path, "{not json").unwrap();
        let store = L2JsonStore::open(&path);
        assert!(store.is_empty());
    }
}
