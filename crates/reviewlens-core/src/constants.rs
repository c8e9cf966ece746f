/// ReviewLens engine version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Label reserved for items not assigned to any cluster.
pub const NOISE_LABEL: i32 = -1;

/// Default minimum number of members for a group to count as a cluster.
pub const DEFAULT_MIN_CLUSTER_SIZE: usize = 8;

/// Default cap on the number of surviving themes per run.
pub const DEFAULT_MAX_THEMES: usize = 5;

/// Default cluster selection epsilon (0.0 disables consolidation by radius).
pub const DEFAULT_CLUSTER_SELECTION_EPSILON: f32 = 0.0;

/// Default embedding dimensionality (all-mpnet-base-v2 sized).
pub const DEFAULT_EMBEDDING_DIMENSIONS: usize = 768;

/// Default capacity of the in-memory embedding cache tier.
pub const DEFAULT_L1_CACHE_CAPACITY: u64 = 10_000;
