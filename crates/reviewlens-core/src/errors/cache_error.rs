use std::path::PathBuf;

/// Embedding-cache persistence errors.
#[derive(Debug, thiserror::Error)]
pub enum CacheError {
    #[error("failed to write cache file {path}: {source}")]
    WriteFailed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to create cache directory {path}: {source}")]
    DirCreateFailed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to serialize cache contents: {source}")]
    SerializeFailed {
        #[source]
        source: serde_json::Error,
    },
}
