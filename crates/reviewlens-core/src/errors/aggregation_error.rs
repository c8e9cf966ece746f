use std::path::PathBuf;

/// Weekly aggregation output errors.
#[derive(Debug, thiserror::Error)]
pub enum AggregationError {
    #[error("failed to write aggregation file {path}: {source}")]
    WriteFailed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to create output directory {path}: {source}")]
    DirCreateFailed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to serialize aggregation result: {source}")]
    SerializeFailed {
        #[source]
        source: serde_json::Error,
    },
}
