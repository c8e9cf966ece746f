use crate::config::ClusteringConfig;
use crate::errors::LensResult;
use crate::models::DensityAssignment;

/// Density-based clustering capability.
///
/// Any implementation must mark low-density items with the noise sentinel
/// rather than forcing them into a group, and must report a per-item
/// confidence in [0, 1] (defaulting to 1.0 for members when the underlying
/// algorithm has no native confidence notion).
pub trait IDensityClusterer: Send + Sync {
    /// Assign a label and confidence to every vector.
    ///
    /// `vectors` is the batch in input order; the returned assignment is
    /// parallel to it. An empty input yields an empty assignment, not an
    /// error.
    fn assign(
        &self,
        vectors: &[Vec<f32>],
        config: &ClusteringConfig,
    ) -> LensResult<DensityAssignment>;
}
