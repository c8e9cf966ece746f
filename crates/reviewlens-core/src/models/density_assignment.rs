use serde::{Deserialize, Serialize};

use crate::constants::NOISE_LABEL;

/// Raw per-item output of a density clustering pass.
///
/// `labels` and `confidences` are parallel to the input batch order. Items
/// that joined no cluster carry [`NOISE_LABEL`] and confidence 0.0.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DensityAssignment {
    pub labels: Vec<i32>,
    pub confidences: Vec<f64>,
}

impl DensityAssignment {
    /// Assignment for an empty batch.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Mark every one of `n` items as noise.
    pub fn all_noise(n: usize) -> Self {
        Self {
            labels: vec![NOISE_LABEL; n],
            confidences: vec![0.0; n],
        }
    }

    pub fn len(&self) -> usize {
        self.labels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }
}
