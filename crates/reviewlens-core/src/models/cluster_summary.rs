use serde::{Deserialize, Serialize};

use super::Strength;

/// One non-noise cluster of reviews.
///
/// The centroid is the componentwise mean of the members' vectors and the
/// strength is the mean of the members' confidence scores; both hold after
/// every merge, not only at construction. Summaries are replaced, never
/// mutated in place — a merge produces a fresh summary under a fresh label.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClusterSummary {
    /// Cluster label, numbered from 0. Merged summaries take labels above
    /// every label seen so far in the run.
    pub label: i32,
    /// Member review ids in discovery order.
    pub member_ids: Vec<String>,
    /// Componentwise mean of member vectors.
    pub centroid: Vec<f32>,
    /// Mean membership confidence across members.
    pub strength: Strength,
}

impl ClusterSummary {
    /// Number of member reviews.
    pub fn size(&self) -> usize {
        self.member_ids.len()
    }
}
