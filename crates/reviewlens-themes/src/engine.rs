//! ThemeEngine: one batch in, a bounded set of themes out.

use std::collections::HashMap;

use tracing::info;
use uuid::Uuid;

use reviewlens_core::config::{ClusteringConfig, LimiterConfig};
use reviewlens_core::errors::LensResult;
use reviewlens_core::models::{ClusterSummary, ClusteringResult, VectorBatch};
use reviewlens_core::traits::IDensityClusterer;

use crate::clusterer::DensityClusterer;
use crate::limiter::ThemeLimiter;
use crate::summaries;

/// Everything one engine run produces.
#[derive(Debug)]
pub struct ThemeRunOutcome {
    /// Identifier attached to this run's tracing output.
    pub run_id: Uuid,
    /// Raw clustering output, pre-merge.
    pub result: ClusteringResult,
    /// Final bounded theme set.
    pub themes: Vec<ClusterSummary>,
    /// Post-merge stable mapping review id → final theme label. Noise
    /// reviews are absent.
    pub assignments: HashMap<String, i32>,
}

/// Coordinates the clustering → summarize → limit pipeline for one batch.
///
/// Holds no state across runs: every invocation's summaries are local
/// values, so repeated runs never interfere.
pub struct ThemeEngine {
    clusterer: Box<dyn IDensityClusterer>,
    clustering: ClusteringConfig,
    limiter: ThemeLimiter,
}

impl ThemeEngine {
    /// Engine with the built-in HDBSCAN clusterer.
    pub fn new(clustering: ClusteringConfig, limiter: LimiterConfig) -> LensResult<Self> {
        Self::with_clusterer(Box::new(DensityClusterer::new()), clustering, limiter)
    }

    /// Engine with a custom clustering capability.
    ///
    /// Both configs are validated here so a bad cap or cluster size fails
    /// before any batch arrives.
    pub fn with_clusterer(
        clusterer: Box<dyn IDensityClusterer>,
        clustering: ClusteringConfig,
        limiter: LimiterConfig,
    ) -> LensResult<Self> {
        clustering.validate()?;
        limiter.validate()?;
        Ok(Self {
            clusterer,
            clustering,
            limiter: ThemeLimiter::new(limiter),
        })
    }

    /// Run the full pipeline over one batch.
    pub fn run(&self, batch: &VectorBatch) -> LensResult<ThemeRunOutcome> {
        let run_id = Uuid::new_v4();

        let assignment = self.clusterer.assign(batch.vectors(), &self.clustering)?;
        let result = summaries::build_result(assignment, batch)?;
        info!(
            %run_id,
            items = batch.len(),
            clusters = result.cluster_count(),
            noise = result.noise_count(),
            "clustering pass complete"
        );

        let themes = self.limiter.enforce(&result)?;

        let assignments: HashMap<String, i32> = themes
            .iter()
            .flat_map(|theme| {
                theme
                    .member_ids
                    .iter()
                    .map(move |id| (id.clone(), theme.label))
            })
            .collect();

        info!(%run_id, themes = themes.len(), "theme cap enforced");

        Ok(ThemeRunOutcome {
            run_id,
            result,
            themes,
            assignments,
        })
    }
}
