//! Density clustering over review embeddings.
//!
//! Wraps HDBSCAN (Euclidean space) behind `IDensityClusterer`. Low-density
//! items keep the noise sentinel. The crate exposes no membership
//! probability, so clustered members carry confidence 1.0 and noise 0.0.
//!
//! `cluster_selection_epsilon` is honored after the density pass: raw groups
//! whose centroids lie within epsilon of each other are consolidated into
//! one group before labels are normalized.

use std::collections::BTreeMap;

use hdbscan::{Hdbscan, HdbscanHyperParams};
use tracing::debug;

use reviewlens_core::config::ClusteringConfig;
use reviewlens_core::constants::NOISE_LABEL;
use reviewlens_core::errors::{ClusterError, LensResult};
use reviewlens_core::models::DensityAssignment;
use reviewlens_core::traits::IDensityClusterer;

use crate::algorithms::squared_euclidean;

/// HDBSCAN-backed implementation of the clustering capability.
#[derive(Debug, Default)]
pub struct DensityClusterer;

impl DensityClusterer {
    pub fn new() -> Self {
        Self
    }
}

impl IDensityClusterer for DensityClusterer {
    fn assign(
        &self,
        vectors: &[Vec<f32>],
        config: &ClusteringConfig,
    ) -> LensResult<DensityAssignment> {
        config.validate()?;

        if vectors.is_empty() {
            return Ok(DensityAssignment::empty());
        }

        let dims = vectors[0].len();
        for vector in vectors {
            if vector.len() != dims {
                return Err(ClusterError::DimensionMismatch {
                    expected: dims,
                    actual: vector.len(),
                }
                .into());
            }
        }

        // Too few points to form even one cluster.
        if vectors.len() < config.min_cluster_size {
            return Ok(DensityAssignment::all_noise(vectors.len()));
        }

        let hyper_params = HdbscanHyperParams::builder()
            .min_cluster_size(config.min_cluster_size)
            .min_samples(config.effective_min_samples())
            .build();

        let data: Vec<Vec<f32>> = vectors.to_vec();
        let clusterer = Hdbscan::new(&data, hyper_params);
        let raw_labels = clusterer.cluster().map_err(|err| {
            ClusterError::AlgorithmFailed {
                reason: format!("{err:?}"),
            }
        })?;

        let labels = normalize_labels(
            &raw_labels,
            vectors,
            config.cluster_selection_epsilon,
        );

        let confidences: Vec<f64> = labels
            .iter()
            .map(|&l| if l == NOISE_LABEL { 0.0 } else { 1.0 })
            .collect();

        let cluster_count = labels
            .iter()
            .filter(|&&l| l != NOISE_LABEL)
            .collect::<std::collections::HashSet<_>>()
            .len();
        debug!(
            items = vectors.len(),
            clusters = cluster_count,
            noise = labels.iter().filter(|&&l| l == NOISE_LABEL).count(),
            "density pass complete"
        );

        Ok(DensityAssignment {
            labels,
            confidences,
        })
    }
}

/// Consolidate raw groups within `epsilon` of each other, then renumber the
/// surviving groups densely from 0 in order of first appearance.
fn normalize_labels(raw_labels: &[i32], vectors: &[Vec<f32>], epsilon: f32) -> Vec<i32> {
    let mut members: BTreeMap<i32, Vec<usize>> = BTreeMap::new();
    for (idx, &label) in raw_labels.iter().enumerate() {
        if label != NOISE_LABEL {
            members.entry(label).or_default().push(idx);
        }
    }
    if members.is_empty() {
        return raw_labels.to_vec();
    }

    let group_labels: Vec<i32> = members.keys().copied().collect();
    let mut root: BTreeMap<i32, i32> =
        group_labels.iter().map(|&l| (l, l)).collect();

    if epsilon > 0.0 && group_labels.len() > 1 {
        let centroids: BTreeMap<i32, Vec<f32>> = members
            .iter()
            .map(|(&label, indices)| (label, centroid_of(indices, vectors)))
            .collect();

        let limit = (epsilon as f64) * (epsilon as f64);
        // Ascending pair order keeps the union deterministic.
        for (a_pos, &a) in group_labels.iter().enumerate() {
            for &b in &group_labels[a_pos + 1..] {
                if squared_euclidean(&centroids[&a], &centroids[&b]) <= limit {
                    union(&mut root, a, b);
                }
            }
        }
    }

    // Dense labels in first-appearance order over the items, so the final
    // numbering depends only on the partition, not on whatever raw ids the
    // underlying algorithm happened to hand out.
    let mut dense: BTreeMap<i32, i32> = BTreeMap::new();
    let mut next = 0;
    raw_labels
        .iter()
        .map(|&l| {
            if l == NOISE_LABEL {
                return NOISE_LABEL;
            }
            let r = find(&mut root, l);
            *dense.entry(r).or_insert_with(|| {
                let assigned = next;
                next += 1;
                assigned
            })
        })
        .collect()
}

fn centroid_of(indices: &[usize], vectors: &[Vec<f32>]) -> Vec<f32> {
    let dims = vectors[indices[0]].len();
    let mut acc = vec![0.0f64; dims];
    for &idx in indices {
        for (slot, &x) in acc.iter_mut().zip(&vectors[idx]) {
            *slot += x as f64;
        }
    }
    let n = indices.len() as f64;
    acc.into_iter().map(|x| (x / n) as f32).collect()
}

fn find(root: &mut BTreeMap<i32, i32>, label: i32) -> i32 {
    let mut r = label;
    while root[&r] != r {
        r = root[&r];
    }
    // Path compression.
    let mut cur = label;
    while root[&cur] != r {
        let next = root[&cur];
        root.insert(cur, r);
        cur = next;
    }
    r
}

fn union(root: &mut BTreeMap<i32, i32>, a: i32, b: i32) {
    let ra = find(root, a);
    let rb = find(root, b);
    if ra != rb {
        // Smaller label wins so dense numbering follows discovery order.
        let (lo, hi) = if ra < rb { (ra, rb) } else { (rb, ra) };
        root.insert(hi, lo);
    }
}
