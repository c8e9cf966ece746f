//! Data models for the theme clustering engine.

mod cluster_summary;
mod clustering_result;
mod density_assignment;
mod strength;
mod vector_batch;
mod weekly_counts;

pub use cluster_summary::ClusterSummary;
pub use clustering_result::ClusteringResult;
pub use density_assignment::DensityAssignment;
pub use strength::Strength;
pub use vector_batch::VectorBatch;
pub use weekly_counts::{ThemeAggregationResult, WeeklyThemeCounts};
