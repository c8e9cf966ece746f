use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Theme counts for a single calendar week (Monday start).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WeeklyThemeCounts {
    /// Monday of the week, `YYYY-MM-DD`.
    pub week_start_date: String,
    /// Sunday of the week, `YYYY-MM-DD`.
    pub week_end_date: String,
    /// Final theme label → review count within the week.
    pub theme_counts: BTreeMap<i32, u64>,
    /// Reviews counted in this week.
    pub total_reviews: u64,
}

/// Aggregation result across all weeks in one run.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ThemeAggregationResult {
    /// Per-week counts in ascending week order.
    pub weekly_counts: Vec<WeeklyThemeCounts>,
    /// Theme label → total count across all weeks.
    pub overall_counts: BTreeMap<i32, u64>,
    /// `(label, count)` sorted by count descending, label ascending on ties.
    pub top_themes: Vec<(i32, u64)>,
}
