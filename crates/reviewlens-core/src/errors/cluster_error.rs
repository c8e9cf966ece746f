/// Clustering and theme-limiting errors.
#[derive(Debug, thiserror::Error)]
pub enum ClusterError {
    #[error("dimension mismatch: expected {expected}, got {actual}")]
    DimensionMismatch { expected: usize, actual: usize },

    #[error("invalid parameter: {reason}")]
    InvalidParameter { reason: String },

    #[error("duplicate item identifier: {id}")]
    DuplicateId { id: String },

    #[error("non-finite component in vector for item {id}")]
    NonFiniteVector { id: String },

    #[error("clustering failed: {reason}")]
    AlgorithmFailed { reason: String },
}

impl ClusterError {
    /// Shorthand for `InvalidParameter` with a formatted reason.
    pub fn invalid_parameter(reason: impl Into<String>) -> Self {
        Self::InvalidParameter {
            reason: reason.into(),
        }
    }
}
