//! Weekly aggregation of theme assignments.
//!
//! Thin downstream consumer: buckets reviews by calendar week (Monday
//! start), counts final theme labels per bucket, and ranks themes overall.
//! Reviews without an assignment (noise) are skipped.

use std::collections::{BTreeMap, HashMap};
use std::fs;
use std::path::Path;

use chrono::{Datelike, Duration, NaiveDate};
use tracing::{debug, info};

use reviewlens_core::errors::{AggregationError, LensResult};
use reviewlens_core::models::{ThemeAggregationResult, WeeklyThemeCounts};
use reviewlens_core::Review;

/// Aggregates per-review theme labels by week.
#[derive(Debug, Clone, Copy, Default)]
pub struct WeeklyAggregator;

impl WeeklyAggregator {
    pub fn new() -> Self {
        Self
    }

    /// Count theme labels per calendar week and overall.
    ///
    /// `assignments` is the post-merge review id → theme label map; every
    /// label in it corresponds to exactly one live theme at call time.
    pub fn aggregate(
        &self,
        reviews: &[Review],
        assignments: &HashMap<String, i32>,
    ) -> ThemeAggregationResult {
        let mut weeks: BTreeMap<NaiveDate, Vec<i32>> = BTreeMap::new();

        for review in reviews {
            let Some(&label) = assignments.get(&review.review_id) else {
                debug!(review_id = %review.review_id, "review has no theme assignment, skipping");
                continue;
            };
            let monday = week_start(review.date.date_naive());
            weeks.entry(monday).or_default().push(label);
        }

        let mut overall_counts: BTreeMap<i32, u64> = BTreeMap::new();
        let mut weekly_counts = Vec::with_capacity(weeks.len());

        for (monday, labels) in weeks {
            let mut theme_counts: BTreeMap<i32, u64> = BTreeMap::new();
            for label in &labels {
                *theme_counts.entry(*label).or_default() += 1;
                *overall_counts.entry(*label).or_default() += 1;
            }
            weekly_counts.push(WeeklyThemeCounts {
                week_start_date: monday.format("%Y-%m-%d").to_string(),
                week_end_date: (monday + Duration::days(6)).format("%Y-%m-%d").to_string(),
                theme_counts,
                total_reviews: labels.len() as u64,
            });
        }

        let mut top_themes: Vec<(i32, u64)> =
            overall_counts.iter().map(|(&l, &c)| (l, c)).collect();
        top_themes.sort_by(|a, b| b.1.cmp(&a.1).then(a.0.cmp(&b.0)));

        info!(
            weeks = weekly_counts.len(),
            themes = overall_counts.len(),
            "weekly aggregation complete"
        );

        ThemeAggregationResult {
            weekly_counts,
            overall_counts,
            top_themes,
        }
    }

    /// Persist an aggregation result as pretty JSON.
    pub fn save_json(
        &self,
        result: &ThemeAggregationResult,
        output_path: &Path,
    ) -> LensResult<()> {
        if let Some(parent) = output_path.parent() {
            fs::create_dir_all(parent).map_err(|source| AggregationError::DirCreateFailed {
                path: parent.to_path_buf(),
                source,
            })?;
        }
        let payload = serde_json::to_string_pretty(result)
            .map_err(|source| AggregationError::SerializeFailed { source })?;
        fs::write(output_path, payload).map_err(|source| AggregationError::WriteFailed {
            path: output_path.to_path_buf(),
            source,
        })?;
        info!(path = %output_path.display(), "saved theme aggregation");
        Ok(())
    }
}

/// Monday of the week containing `date`.
fn week_start(date: NaiveDate) -> NaiveDate {
    date - Duration::days(date.weekday().num_days_from_monday() as i64)
}
