//! Configuration records for the clustering engine and its collaborators.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::constants;
use crate::errors::{ClusterError, LensResult};

/// Density clustering configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ClusteringConfig {
    /// Minimum members for a group to count as a cluster rather than noise.
    pub min_cluster_size: usize,
    /// Density sensitivity; derived from `min_cluster_size` when unset.
    pub min_samples: Option<usize>,
    /// Euclidean radius within which adjacent groups are consolidated.
    pub cluster_selection_epsilon: f32,
}

impl Default for ClusteringConfig {
    fn default() -> Self {
        Self {
            min_cluster_size: constants::DEFAULT_MIN_CLUSTER_SIZE,
            min_samples: None,
            cluster_selection_epsilon: constants::DEFAULT_CLUSTER_SELECTION_EPSILON,
        }
    }
}

impl ClusteringConfig {
    /// Effective density sensitivity: explicit value, else capped by the
    /// minimum cluster size, floor 1.
    pub fn effective_min_samples(&self) -> usize {
        self.min_samples
            .unwrap_or(self.min_cluster_size)
            .max(1)
    }

    /// Validate before any clustering work starts.
    pub fn validate(&self) -> LensResult<()> {
        if self.min_cluster_size < 2 {
            return Err(ClusterError::invalid_parameter(format!(
                "min_cluster_size must be >= 2, got {}",
                self.min_cluster_size
            ))
            .into());
        }
        if self.min_samples == Some(0) {
            return Err(
                ClusterError::invalid_parameter("min_samples must be >= 1 when set").into(),
            );
        }
        if !self.cluster_selection_epsilon.is_finite() || self.cluster_selection_epsilon < 0.0 {
            return Err(ClusterError::invalid_parameter(format!(
                "cluster_selection_epsilon must be finite and >= 0, got {}",
                self.cluster_selection_epsilon
            ))
            .into());
        }
        Ok(())
    }
}

/// Theme limiter configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LimiterConfig {
    /// Hard cap on surviving themes per run.
    pub max_themes: usize,
}

impl Default for LimiterConfig {
    fn default() -> Self {
        Self {
            max_themes: constants::DEFAULT_MAX_THEMES,
        }
    }
}

impl LimiterConfig {
    pub fn validate(&self) -> LensResult<()> {
        if self.max_themes == 0 {
            return Err(ClusterError::invalid_parameter("max_themes must be >= 1").into());
        }
        Ok(())
    }
}

/// Embedding service configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct EmbeddingConfig {
    /// Expected vector dimensionality from the provider.
    pub dimensions: usize,
    /// Persistent cache file location.
    pub cache_path: PathBuf,
    /// In-memory cache tier capacity (entries).
    pub l1_capacity: u64,
}

impl Default for EmbeddingConfig {
    fn default() -> Self {
        Self {
            dimensions: constants::DEFAULT_EMBEDDING_DIMENSIONS,
            cache_path: PathBuf::from("data/processed/embeddings_cache.json"),
            l1_capacity: constants::DEFAULT_L1_CACHE_CAPACITY,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_clustering_config_is_valid() {
        assert!(ClusteringConfig::default().validate().is_ok());
    }

    #[test]
    fn rejects_tiny_min_cluster_size() {
        let config = ClusteringConfig {
            min_cluster_size: 1,
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn rejects_zero_min_samples() {
        let config = ClusteringConfig {
            min_samples: Some(0),
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn rejects_negative_epsilon() {
        let config = ClusteringConfig {
            cluster_selection_epsilon: -0.5,
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn min_samples_derived_from_cluster_size() {
        let config = ClusteringConfig {
            min_cluster_size: 8,
            min_samples: None,
            ..Default::default()
        };
        assert_eq!(config.effective_min_samples(), 8);

        let explicit = ClusteringConfig {
            min_samples: Some(3),
            ..Default::default()
        };
        assert_eq!(explicit.effective_min_samples(), 3);
    }

    #[test]
    fn rejects_zero_max_themes() {
        let config = LimiterConfig { max_themes: 0 };
        assert!(config.validate().is_err());
    }
}
