use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::errors::{ClusterError, LensResult};

/// Immutable batch of embedding vectors, one per review.
///
/// `ids` and `vectors` are parallel; all vectors share one dimensionality,
/// enforced at construction. The empty batch is a valid state and carries the
/// dimensionality the producing provider would have used.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VectorBatch {
    ids: Vec<String>,
    vectors: Vec<Vec<f32>>,
    dimensions: usize,
}

impl VectorBatch {
    /// Build a batch from parallel id/vector lists.
    ///
    /// Rejects mismatched list lengths, duplicate ids, inconsistent
    /// dimensionality, and non-finite vector components.
    pub fn new(ids: Vec<String>, vectors: Vec<Vec<f32>>) -> LensResult<Self> {
        if ids.len() != vectors.len() {
            return Err(ClusterError::invalid_parameter(format!(
                "{} ids but {} vectors",
                ids.len(),
                vectors.len()
            ))
            .into());
        }

        let mut seen = HashSet::with_capacity(ids.len());
        for id in &ids {
            if !seen.insert(id.as_str()) {
                return Err(ClusterError::DuplicateId { id: id.clone() }.into());
            }
        }

        let dimensions = vectors.first().map(|v| v.len()).unwrap_or(0);
        for (id, vector) in ids.iter().zip(&vectors) {
            if vector.len() != dimensions {
                return Err(ClusterError::DimensionMismatch {
                    expected: dimensions,
                    actual: vector.len(),
                }
                .into());
            }
            if vector.iter().any(|x| !x.is_finite()) {
                return Err(ClusterError::NonFiniteVector { id: id.clone() }.into());
            }
        }

        Ok(Self {
            ids,
            vectors,
            dimensions,
        })
    }

    /// An empty batch with a known dimensionality.
    pub fn empty(dimensions: usize) -> Self {
        Self {
            ids: Vec::new(),
            vectors: Vec::new(),
            dimensions,
        }
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    /// Shared dimensionality of all vectors in the batch.
    pub fn dimensions(&self) -> usize {
        self.dimensions
    }

    pub fn ids(&self) -> &[String] {
        &self.ids
    }

    pub fn vectors(&self) -> &[Vec<f32>] {
        &self.vectors
    }

    /// Iterate `(id, vector)` pairs in batch order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &[f32])> {
        self.ids
            .iter()
            .zip(&self.vectors)
            .map(|(id, v)| (id.as_str(), v.as_slice()))
    }
}
