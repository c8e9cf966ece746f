//! Error types for the ReviewLens engine.
//!
//! One enum per subsystem, all wrapped by [`LensError`]. Failures here are
//! precondition or configuration failures — there is no retry policy because
//! the engine itself performs no I/O beyond the embedding cache.

mod aggregation_error;
mod cache_error;
mod cluster_error;
mod embedding_error;

pub use aggregation_error::AggregationError;
pub use cache_error::CacheError;
pub use cluster_error::ClusterError;
pub use embedding_error::EmbeddingError;

/// Top-level error for the ReviewLens workspace.
#[derive(Debug, thiserror::Error)]
pub enum LensError {
    #[error(transparent)]
    Cluster(#[from] ClusterError),

    #[error(transparent)]
    Cache(#[from] CacheError),

    #[error(transparent)]
    Embedding(#[from] EmbeddingError),

    #[error(transparent)]
    Aggregation(#[from] AggregationError),
}

/// Result alias used across the workspace.
pub type LensResult<T> = Result<T, LensError>;
