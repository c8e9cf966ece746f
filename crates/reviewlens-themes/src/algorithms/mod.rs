//! Numeric helpers shared by the clustering and limiting stages.

pub mod similarity;

pub use similarity::{cosine_similarity, squared_euclidean};
