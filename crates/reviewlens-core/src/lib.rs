//! # reviewlens-core
//!
//! Foundation crate for the ReviewLens theme engine.
//! Defines all types, traits, errors, config, and constants.
//! Every other crate in the workspace depends on this.

pub mod config;
pub mod constants;
pub mod errors;
pub mod models;
pub mod review;
pub mod traits;

// Re-export the most commonly used types at the crate root.
pub use config::{ClusteringConfig, EmbeddingConfig, LimiterConfig};
pub use errors::{LensError, LensResult};
pub use models::{
    ClusterSummary, ClusteringResult, DensityAssignment, Strength, VectorBatch,
};
pub use review::Review;
