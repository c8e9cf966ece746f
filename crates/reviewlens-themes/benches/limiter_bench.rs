//! Benchmark the merge-down-to-cap loop at a few live-set sizes.

use std::collections::BTreeMap;

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

use reviewlens_core::config::LimiterConfig;
use reviewlens_core::models::{
    ClusterSummary, ClusteringResult, DensityAssignment, Strength,
};
use reviewlens_themes::ThemeLimiter;

/// Deterministic pseudo-random centroid (no RNG dependency needed).
fn centroid(seed: u64, dims: usize) -> Vec<f32> {
    (0..dims)
        .map(|d| {
            let x = seed
                .wrapping_mul(6364136223846793005)
                .wrapping_add(d as u64 * 1442695040888963407);
            ((x >> 33) as f32 / u32::MAX as f32) * 2.0 - 1.0
        })
        .collect()
}

fn make_result(clusters: usize, dims: usize) -> ClusteringResult {
    let summaries: BTreeMap<i32, ClusterSummary> = (0..clusters)
        .map(|i| {
            let label = i as i32;
            (
                label,
                ClusterSummary {
                    label,
                    member_ids: (0..8).map(|m| format!("r{i}-{m}")).collect(),
                    centroid: centroid(i as u64 + 1, dims),
                    strength: Strength::new(0.5 + 0.05 * (i % 10) as f64),
                },
            )
        })
        .collect();
    ClusteringResult {
        assignment: DensityAssignment::empty(),
        summaries,
    }
}

fn bench_enforce(c: &mut Criterion) {
    let limiter = ThemeLimiter::new(LimiterConfig { max_themes: 5 });
    let mut group = c.benchmark_group("theme_limiter_enforce");

    for clusters in [16usize, 64, 256] {
        let result = make_result(clusters, 384);
        group.bench_with_input(
            BenchmarkId::from_parameter(clusters),
            &result,
            |b, result| b.iter(|| limiter.enforce(black_box(result)).unwrap()),
        );
    }
    group.finish();
}

criterion_group!(benches, bench_enforce);
criterion_main!(benches);
