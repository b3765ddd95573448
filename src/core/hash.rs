//! Hashing Primitives and Seed Commitment
//!
//! SHA-256 is the only hash in the protocol: it backs both the seed
//! commitment published before a round and the counter-mode draw stream.

use sha2::{Digest, Sha256};

use super::seed::Seed;

/// Hash output type (256 bits / 32 bytes).
pub type Digest32 = [u8; 32];

/// SHA-256 over raw bytes.
pub fn sha256(data: &[u8]) -> Digest32 {
    let mut hasher = Sha256::new();
    hasher.update(data);
    hasher.finalize().into()
}

/// Commitment hash of a seed, as 64 lowercase hex characters.
///
/// Interoperability contract: the digest is computed over the seed's
/// canonical hex *text* (ASCII), not over the raw seed bytes. Every
/// implementation of the protocol must reproduce this exactly, or
/// commitments published by one side will not verify on the other.
pub fn hash_seed(seed: &Seed) -> String {
    hex::encode(sha256(seed.hex().as_bytes()))
}

// =============================================================================
// TESTS
// =============================================================================
