//! EmbeddingService — assembles a `VectorBatch` from cleaned reviews.
//!
//! Cache-first: every review's vector is looked up by content hash, misses
//! are embedded in one batched provider call, and the cache is flushed once
//! per batch. Provider failures surface here, before any batch exists.

use tracing::{debug, info};

use reviewlens_core::config::EmbeddingConfig;
use reviewlens_core::errors::{ClusterError, EmbeddingError, LensResult};
use reviewlens_core::traits::IEmbeddingProvider;
use reviewlens_core::{Review, VectorBatch};

use crate::cache::EmbeddingCache;

/// Encodes cleaned review texts into dense vectors, reusing cached vectors
/// where the text is unchanged.
pub struct EmbeddingService {
    provider: Box<dyn IEmbeddingProvider>,
    cache: EmbeddingCache,
    dimensions: usize,
}

impl EmbeddingService {
    /// Create a service around a provider, opening the cache at the
    /// configured path.
    ///
    /// Fails up front when the provider is unavailable or disagrees with the
    /// configured dimensionality.
    pub fn new(
        provider: Box<dyn IEmbeddingProvider>,
        config: &EmbeddingConfig,
    ) -> LensResult<Self> {
        let cache = EmbeddingCache::open(&config.cache_path, config.l1_capacity);
        Self::with_cache(provider, cache, config.dimensions)
    }

    /// Create a service around an explicitly managed cache.
    pub fn with_cache(
        provider: Box<dyn IEmbeddingProvider>,
        cache: EmbeddingCache,
        dimensions: usize,
    ) -> LensResult<Self> {
        if !provider.is_available() {
            return Err(EmbeddingError::ProviderUnavailable {
                name: provider.name().to_string(),
            }
            .into());
        }
        if provider.dimensions() != dimensions {
            return Err(ClusterError::DimensionMismatch {
                expected: dimensions,
                actual: provider.dimensions(),
            }
            .into());
        }
        info!(
            provider = provider.name(),
            dims = dimensions,
            cached = cache.len(),
            "embedding service ready"
        );
        Ok(Self {
            provider,
            cache,
            dimensions,
        })
    }

    /// Generate embeddings for the supplied reviews, reusing cached vectors
    /// where possible. The returned batch is parallel to the input order.
    pub fn embed_reviews(&mut self, reviews: &[Review]) -> LensResult<VectorBatch> {
        if reviews.is_empty() {
            return Ok(VectorBatch::empty(self.dimensions));
        }

        let mut collected: Vec<Option<Vec<f32>>> = vec![None; reviews.len()];
        let mut pending_texts: Vec<String> = Vec::new();
        let mut pending: Vec<(usize, String)> = Vec::new();

        for (idx, review) in reviews.iter().enumerate() {
            let key = cache_key(review);
            match self.cache.get(&key) {
                Some(vector) if vector.len() == self.dimensions => {
                    collected[idx] = Some(vector);
                }
                Some(_) => {
                    // Stale entry from a different model; re-embed.
                    debug!(review_id = %review.review_id, "cached vector has wrong dimensionality");
                    pending_texts.push(review.text.clone());
                    pending.push((idx, key));
                }
                None => {
                    pending_texts.push(review.text.clone());
                    pending.push((idx, key));
                }
            }
        }

        debug!(
            total = reviews.len(),
            cached = reviews.len() - pending.len(),
            pending = pending.len(),
            "embedding cache lookup complete"
        );

        if !pending.is_empty() {
            let vectors = self.provider.embed_batch(&pending_texts)?;
            if vectors.len() != pending.len() {
                return Err(EmbeddingError::BatchShapeMismatch {
                    expected: pending.len(),
                    actual: vectors.len(),
                }
                .into());
            }
            for ((idx, key), vector) in pending.into_iter().zip(vectors) {
                if vector.len() != self.dimensions {
                    return Err(ClusterError::DimensionMismatch {
                        expected: self.dimensions,
                        actual: vector.len(),
                    }
                    .into());
                }
                self.cache.put(key, vector.clone());
                collected[idx] = Some(vector);
            }
            self.cache.flush()?;
        }

        let ids = reviews.iter().map(|r| r.review_id.clone()).collect();
        let vectors = collected
            .into_iter()
            .map(|v| v.unwrap_or_default())
            .collect();
        let batch = VectorBatch::new(ids, vectors)?;
        info!(reviews = batch.len(), dims = batch.dimensions(), "vector batch assembled");
        Ok(batch)
    }

    /// Dimensionality of every vector this service produces.
    pub fn dimensions(&self) -> usize {
        self.dimensions
    }
}

/// Cache key: review id plus a hash of the text, so edits re-embed and id
/// collisions cannot cross-contaminate.
fn cache_key(review: &Review) -> String {
    let digest = blake3::hash(review.text.as_bytes());
    format!("{}:{}", review.review_id, digest.to_hex())
}
