use crate::errors::LensResult;

/// Embedding generation provider.
///
/// The model behind this trait is an external collaborator; the engine only
/// relies on text → fixed-length vector with a stable dimensionality.
pub trait IEmbeddingProvider: Send + Sync {
    /// Embed a single text, returning a vector of floats.
    fn embed(&self, text: &str) -> LensResult<Vec<f32>>;

    /// Embed a batch of texts, one vector per text in input order.
    fn embed_batch(&self, texts: &[String]) -> LensResult<Vec<Vec<f32>>>;

    /// The dimensionality of embeddings produced by this provider.
    fn dimensions(&self) -> usize;

    /// Human-readable provider name.
    fn name(&self) -> &str;

    /// Whether this provider is currently available.
    fn is_available(&self) -> bool;
}
