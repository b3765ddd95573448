//! Core deterministic primitives.
//!
//! Everything here is a pure computation over immutable inputs; the only
//! platform seam is the entropy source behind [`seed::EntropySource`].

pub mod hash;
pub mod rng;
pub mod seed;
pub mod shuffle;

// Re-export core types
pub use hash::{hash_seed, Digest32};
pub use rng::CounterModeRng;
pub use seed::{EntropySource, OsEntropy, Seed, SeedError};
pub use shuffle::{shuffle_indices, shuffle_values, shuffle_with_seed};
