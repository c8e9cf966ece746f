//! Merge clusters down to at most N themes using centroid similarity.
//!
//! Greedy agglomeration: repeatedly merge the two most cosine-similar
//! summaries until the cap is met. Every merge spends a fresh label above
//! all labels seen so far; the merged summary keeps the size-weighted
//! centroid and strength of its inputs, so both stay the true member means.
//!
//! Ties on similarity resolve to the earliest pair in ascending (first,
//! second) index order over the live set. The live set starts in ascending
//! label order and merged summaries append at the end, which makes the
//! whole reduction reproducible.

use rayon::prelude::*;
use tracing::debug;

use reviewlens_core::config::LimiterConfig;
use reviewlens_core::errors::LensResult;
use reviewlens_core::models::{ClusterSummary, ClusteringResult, Strength};

use crate::algorithms::cosine_similarity;

/// Enforces the hard cap on surviving themes.
#[derive(Debug, Clone, Default)]
pub struct ThemeLimiter {
    config: LimiterConfig,
}

impl ThemeLimiter {
    pub fn new(config: LimiterConfig) -> Self {
        Self { config }
    }

    /// Reduce the result's summaries to at most `max_themes`.
    ///
    /// Returns `min(cluster_count, max_themes)` summaries. At or under the
    /// cap the input summaries come back unchanged — no merge happens.
    pub fn enforce(&self, clustering: &ClusteringResult) -> LensResult<Vec<ClusterSummary>> {
        self.config.validate()?;

        let mut clusters: Vec<ClusterSummary> =
            clustering.summaries.values().cloned().collect();
        if clusters.len() <= self.config.max_themes {
            return Ok(clusters);
        }

        let mut next_label = clusters
            .iter()
            .map(|c| c.label)
            .max()
            .unwrap_or(-1)
            + 1;

        while clusters.len() > self.config.max_themes {
            let (i, j) = most_similar_pair(&clusters);
            let merged = merge_pair(&clusters[i], &clusters[j], next_label);
            debug!(
                left = clusters[i].label,
                right = clusters[j].label,
                merged = merged.label,
                live = clusters.len() - 1,
                "merged most similar theme pair"
            );
            next_label += 1;
            // j > i always; remove back-to-front so indices stay valid.
            clusters.remove(j);
            clusters.remove(i);
            clusters.push(merged);
        }

        Ok(clusters)
    }
}

/// Index pair of the two most similar live summaries.
///
/// Row bests run in parallel; the fold over rows is sequential and in
/// ascending index order, and both levels compare strictly-greater, so the
/// earliest pair wins every tie exactly as a nested scan would pick it.
fn most_similar_pair(clusters: &[ClusterSummary]) -> (usize, usize) {
    let row_bests: Vec<Option<(usize, f64)>> = (0..clusters.len() - 1)
        .into_par_iter()
        .map(|i| {
            let mut best: Option<(usize, f64)> = None;
            for j in (i + 1)..clusters.len() {
                let score = cosine_similarity(&clusters[i].centroid, &clusters[j].centroid);
                if best.map_or(true, |(_, s)| score > s) {
                    best = Some((j, score));
                }
            }
            best
        })
        .collect();

    let mut best_pair = (0, 1);
    let mut best_score = f64::NEG_INFINITY;
    for (i, row) in row_bests.into_iter().enumerate() {
        if let Some((j, score)) = row {
            if score > best_score {
                best_score = score;
                best_pair = (i, j);
            }
        }
    }
    best_pair
}

/// Merge two summaries into one fresh summary under `new_label`.
///
/// Centroid and strength are averaged with member-count weights, which
/// keeps both equal to the plain mean over the union of members. Member ids
/// concatenate left-then-right.
fn merge_pair(left: &ClusterSummary, right: &ClusterSummary, new_label: i32) -> ClusterSummary {
    let left_size = left.size() as f64;
    let right_size = right.size() as f64;
    let total = left_size + right_size;

    let centroid = left
        .centroid
        .iter()
        .zip(&right.centroid)
        .map(|(&l, &r)| ((l as f64 * left_size + r as f64 * right_size) / total) as f32)
        .collect();

    let strength = Strength::new(
        (left.strength.value() * left_size + right.strength.value() * right_size) / total,
    );

    let mut member_ids = left.member_ids.clone();
    member_ids.extend(right.member_ids.iter().cloned());

    ClusterSummary {
        label: new_label,
        member_ids,
        centroid,
        strength,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeMap;

    use reviewlens_core::models::DensityAssignment;

    fn summary(label: i32, n_members: usize, centroid: Vec<f32>, strength: f64) -> ClusterSummary {
        ClusterSummary {
            label,
            member_ids: (0..n_members)
                .map(|i| format!("r{label}-{i}"))
                .collect(),
            centroid,
            strength: Strength::new(strength),
        }
    }

    fn result_of(summaries: Vec<ClusterSummary>) -> ClusteringResult {
        ClusteringResult {
            assignment: DensityAssignment::empty(),
            summaries: summaries.into_iter().map(|s| (s.label, s)).collect::<BTreeMap<_, _>>(),
        }
    }

    #[test]
    fn under_cap_is_a_true_noop() {
        let limiter = ThemeLimiter::new(LimiterConfig { max_themes: 5 });
        let input = result_of(vec![
            summary(0, 2, vec![1.0, 0.0], 0.9),
            summary(1, 3, vec![0.0, 1.0], 0.8),
        ]);
        let output = limiter.enforce(&input).unwrap();
        assert_eq!(output.len(), 2);
        assert_eq!(output[0].label, 0);
        assert_eq!(output[1].label, 1);
        assert_eq!(output[0].member_ids, input.summaries[&0].member_ids);
    }

    #[test]
    fn zero_max_themes_is_rejected() {
        let limiter = ThemeLimiter::new(LimiterConfig { max_themes: 0 });
        let input = result_of(vec![summary(0, 1, vec![1.0], 1.0)]);
        assert!(limiter.enforce(&input).is_err());
    }

    #[test]
    fn merges_down_to_cap() {
        let limiter = ThemeLimiter::new(LimiterConfig { max_themes: 3 });
        let input = result_of(vec![
            summary(0, 2, vec![1.0, 0.0], 1.0),
            summary(1, 2, vec![0.9, 0.1], 1.0),
            summary(2, 2, vec![0.0, 1.0], 1.0),
            summary(3, 2, vec![-1.0, 0.0], 1.0),
            summary(4, 2, vec![0.1, 0.9], 1.0),
            summary(5, 2, vec![-0.9, -0.1], 1.0),
        ]);
        let output = limiter.enforce(&input).unwrap();
        assert_eq!(output.len(), 3);

        // Every original member survives exactly once.
        let mut members: Vec<String> = output
            .iter()
            .flat_map(|s| s.member_ids.iter().cloned())
            .collect();
        members.sort();
        let mut expected: Vec<String> = input
            .summaries
            .values()
            .flat_map(|s| s.member_ids.iter().cloned())
            .collect();
        expected.sort();
        assert_eq!(members, expected);
    }

    #[test]
    fn merged_centroid_and_strength_are_size_weighted() {
        let limiter = ThemeLimiter::new(LimiterConfig { max_themes: 1 });
        let input = result_of(vec![
            summary(0, 2, vec![0.0, 0.0], 0.8),
            summary(1, 8, vec![10.0, 10.0], 0.5),
        ]);
        let output = limiter.enforce(&input).unwrap();
        assert_eq!(output.len(), 1);
        assert_eq!(output[0].centroid, vec![8.0, 8.0]);
        assert!((output[0].strength.value() - 0.56).abs() < 1e-12);
        assert_eq!(output[0].label, 2);
        assert_eq!(output[0].size(), 10);
    }

    #[test]
    fn merge_order_prefers_most_similar_pair() {
        let limiter = ThemeLimiter::new(LimiterConfig { max_themes: 2 });
        // 0 and 2 point the same way; 1 is orthogonal.
        let input = result_of(vec![
            summary(0, 1, vec![1.0, 0.0], 1.0),
            summary(1, 1, vec![0.0, 1.0], 1.0),
            summary(2, 1, vec![2.0, 0.0], 1.0),
        ]);
        let output = limiter.enforce(&input).unwrap();
        let merged = output.iter().find(|s| s.label == 3).unwrap();
        let mut ids = merged.member_ids.clone();
        ids.sort();
        assert_eq!(ids, vec!["r0-0".to_string(), "r2-0".to_string()]);
    }

    #[test]
    fn ties_break_to_earliest_pair() {
        let limiter = ThemeLimiter::new(LimiterConfig { max_themes: 2 });
        // Three identical centroids: every pair scores 1.0. The first
        // enumerated pair (0, 1) must merge.
        let input = result_of(vec![
            summary(0, 1, vec![1.0, 1.0], 1.0),
            summary(1, 1, vec![1.0, 1.0], 1.0),
            summary(2, 1, vec![1.0, 1.0], 1.0),
        ]);
        let output = limiter.enforce(&input).unwrap();
        let merged = output.iter().find(|s| s.label == 3).unwrap();
        assert_eq!(
            merged.member_ids,
            vec!["r0-0".to_string(), "r1-0".to_string()]
        );
    }

    #[test]
    fn zero_centroids_do_not_poison_selection() {
        let limiter = ThemeLimiter::new(LimiterConfig { max_themes: 2 });
        // The two aligned nonzero centroids should merge, not the zero one.
        let input = result_of(vec![
            summary(0, 1, vec![0.0, 0.0], 1.0),
            summary(1, 1, vec![1.0, 0.0], 1.0),
            summary(2, 1, vec![0.9, 0.1], 1.0),
        ]);
        let output = limiter.enforce(&input).unwrap();
        let merged = output.iter().find(|s| s.label == 3).unwrap();
        let mut ids = merged.member_ids.clone();
        ids.sort();
        assert_eq!(ids, vec!["r1-0".to_string(), "r2-0".to_string()]);
    }

    #[test]
    fn merged_labels_stay_monotonic() {
        let limiter = ThemeLimiter::new(LimiterConfig { max_themes: 1 });
        let input = result_of(vec![
            summary(0, 1, vec![1.0, 0.0], 1.0),
            summary(1, 1, vec![0.0, 1.0], 1.0),
            summary(2, 1, vec![1.0, 1.0], 1.0),
            summary(7, 1, vec![-1.0, 0.5], 1.0),
        ]);
        let output = limiter.enforce(&input).unwrap();
        assert_eq!(output.len(), 1);
        // Three merges starting above the max input label.
        assert_eq!(output[0].label, 10);
    }
}
