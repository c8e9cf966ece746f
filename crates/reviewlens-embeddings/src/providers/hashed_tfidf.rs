//! Hashed term-frequency embedding provider.
//!
//! Buckets terms into a fixed-dimension vector with damped term-frequency
//! weights and L2 normalization. Not semantically rich, but deterministic and
//! always available — no model download, no network.

use std::collections::HashMap;

use reviewlens_core::errors::LensResult;
use reviewlens_core::traits::IEmbeddingProvider;

/// Deterministic fallback embedding provider for review text.
pub struct HashedTfIdf {
    dimensions: usize,
}

impl HashedTfIdf {
    pub fn new(dimensions: usize) -> Self {
        Self { dimensions }
    }

    /// FNV-1a bucket index for a term.
    fn bucket(term: &str, dims: usize) -> usize {
        let mut h: u64 = 0xcbf29ce484222325;
        for b in term.as_bytes() {
            h ^= *b as u64;
            h = h.wrapping_mul(0x100000001b3);
        }
        (h as usize) % dims
    }

    fn vectorize(&self, text: &str) -> Vec<f32> {
        let mut counts: HashMap<String, u32> = HashMap::new();
        for term in text
            .split(|c: char| !c.is_alphanumeric() && c != '_')
            .filter(|t| t.len() >= 2)
        {
            *counts.entry(term.to_lowercase()).or_default() += 1;
        }

        let mut vector = vec![0.0f32; self.dimensions];
        if counts.is_empty() {
            return vector;
        }

        for (term, count) in &counts {
            // Damped term frequency keeps a single repeated word from
            // dominating short reviews.
            let weight = 1.0 + (*count as f32).ln();
            vector[Self::bucket(term, self.dimensions)] += weight;
        }

        let norm: f32 = vector.iter().map(|x| x * x).sum::<f32>().sqrt();
        if norm > f32::EPSILON {
            for v in &mut vector {
                *v /= norm;
            }
        }
        vector
    }
}

impl IEmbeddingProvider for HashedTfIdf {
    fn embed(&self, text: &str) -> LensResult<Vec<f32>> {
        Ok(self.vectorize(text))
    }

    fn embed_batch(&self, texts: &[String]) -> LensResult<Vec<Vec<f32>>> {
        Ok(texts.iter().map(|t| self.vectorize(t)).collect())
    }

    fn dimensions(&self) -> usize {
        self.dimensions
    }

    fn name(&self) -> &str {
        "hashed-tfidf"
    }

    fn is_available(&self) -> bool {
        true
    }
}
