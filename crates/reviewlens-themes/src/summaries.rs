//! Cluster summary construction.
//!
//! Pure functions from a raw assignment plus the original batch to one
//! summary per non-noise label. Labels are visited in ascending order and
//! the same input always produces bit-identical output.

use std::collections::BTreeMap;

use reviewlens_core::constants::NOISE_LABEL;
use reviewlens_core::errors::{ClusterError, LensResult};
use reviewlens_core::models::{
    ClusterSummary, ClusteringResult, DensityAssignment, Strength, VectorBatch,
};

/// Build one summary per non-noise label.
///
/// Centroid is the componentwise mean of member vectors; strength is the
/// mean member confidence. A single-member cluster is its own centroid.
pub fn build_summaries(
    assignment: &DensityAssignment,
    batch: &VectorBatch,
) -> LensResult<BTreeMap<i32, ClusterSummary>> {
    if assignment.len() != batch.len() {
        return Err(ClusterError::invalid_parameter(format!(
            "assignment covers {} items but batch has {}",
            assignment.len(),
            batch.len()
        ))
        .into());
    }

    let mut members: BTreeMap<i32, Vec<usize>> = BTreeMap::new();
    for (idx, &label) in assignment.labels.iter().enumerate() {
        if label != NOISE_LABEL {
            members.entry(label).or_default().push(idx);
        }
    }

    let vectors = batch.vectors();
    let ids = batch.ids();
    let mut summaries = BTreeMap::new();

    for (label, indices) in members {
        let dims = vectors[indices[0]].len();
        let mut centroid = vec![0.0f64; dims];
        let mut confidence_sum = 0.0f64;
        for &idx in &indices {
            for (slot, &x) in centroid.iter_mut().zip(&vectors[idx]) {
                *slot += x as f64;
            }
            confidence_sum += assignment.confidences[idx];
        }
        let n = indices.len() as f64;
        let centroid: Vec<f32> = centroid.into_iter().map(|x| (x / n) as f32).collect();

        summaries.insert(
            label,
            ClusterSummary {
                label,
                member_ids: indices.iter().map(|&idx| ids[idx].clone()).collect(),
                centroid,
                strength: Strength::new(confidence_sum / n),
            },
        );
    }

    Ok(summaries)
}

/// Bundle an assignment and its summaries into a [`ClusteringResult`].
pub fn build_result(
    assignment: DensityAssignment,
    batch: &VectorBatch,
) -> LensResult<ClusteringResult> {
    let summaries = build_summaries(&assignment, batch)?;
    Ok(ClusteringResult {
        assignment,
        summaries,
    })
}
