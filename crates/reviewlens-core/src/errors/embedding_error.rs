/// Embedding provider errors.
#[derive(Debug, thiserror::Error)]
pub enum EmbeddingError {
    #[error("embedding provider '{name}' is not available")]
    ProviderUnavailable { name: String },

    #[error("provider returned {actual} vectors for {expected} texts")]
    BatchShapeMismatch { expected: usize, actual: usize },

    #[error("embedding generation failed: {reason}")]
    GenerationFailed { reason: String },
}
