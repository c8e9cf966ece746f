use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::constants::NOISE_LABEL;

use super::{ClusterSummary, DensityAssignment};

/// Output of one clustering pass over a batch.
///
/// Bundles the raw per-item assignment with one summary per non-noise label.
/// Every label in `assignment.labels` is either [`NOISE_LABEL`] or a key of
/// `summaries`; the `BTreeMap` keeps summaries in ascending label order.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ClusteringResult {
    pub assignment: DensityAssignment,
    pub summaries: BTreeMap<i32, ClusterSummary>,
}

impl ClusteringResult {
    /// Result for an empty batch: no assignments, no summaries.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Number of non-noise clusters.
    pub fn cluster_count(&self) -> usize {
        self.summaries.len()
    }

    /// Number of items assigned the noise sentinel.
    pub fn noise_count(&self) -> usize {
        self.assignment
            .labels
            .iter()
            .filter(|&&l| l == NOISE_LABEL)
            .count()
    }

    /// Check that every non-noise label has a summary entry.
    pub fn is_consistent(&self) -> bool {
        self.assignment
            .labels
            .iter()
            .all(|&l| l == NOISE_LABEL || self.summaries.contains_key(&l))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Strength;

    #[test]
    fn empty_result_is_consistent() {
        let result = ClusteringResult::empty();
        assert!(result.is_consistent());
        assert_eq!(result.cluster_count(), 0);
        assert_eq!(result.noise_count(), 0);
    }

    #[test]
    fn detects_missing_summary() {
        let result = ClusteringResult {
            assignment: DensityAssignment {
                labels: vec![0, NOISE_LABEL, 1],
                confidences: vec![1.0, 0.0, 1.0],
            },
            summaries: BTreeMap::from([(
                0,
                ClusterSummary {
                    label: 0,
                    member_ids: vec!["a".into()],
                    centroid: vec![1.0],
                    strength: Strength::FULL,
                },
            )]),
        };
        assert!(!result.is_consistent());
    }
}
