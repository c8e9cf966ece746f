//! Embedding providers.
//!
//! Real model inference lives outside this repository; what ships here is the
//! deterministic hashed-term provider used as fallback and test double.

mod hashed_tfidf;

pub use hashed_tfidf::HashedTfIdf;
