//! # reviewlens-embeddings
//!
//! Turns cleaned reviews into a [`VectorBatch`](reviewlens_core::VectorBatch):
//! content-hash keyed two-tier cache (in-memory over a persistent JSON file,
//! explicit load/flush lifecycle), a deterministic fallback provider, and the
//! batch-assembling `EmbeddingService`.

pub mod cache;
pub mod providers;
pub mod service;

pub use cache::EmbeddingCache;
pub use providers::HashedTfIdf;
pub use service::EmbeddingService;
