//! Shuffle Proof Assembly
//!
//! Packages everything a third party needs to redo the fairness check:
//! the seed, its pre-committed hash, a timestamp, and the protocol
//! version. Assembled once per round; immutable thereafter.

use chrono::{SecondsFormat, Utc};
use serde::{Deserialize, Serialize};

use crate::core::hash::hash_seed;
use crate::core::seed::{Seed, SeedError};
use crate::core::shuffle::shuffle_values;

/// The single supported protocol version literal.
///
/// Covers the whole draw construction: SHA-256 over seed hex plus
/// 10-digit decimal counter, big-endian digest bytes 0..4, divisor
/// 2^32 - 1. Any change to those is a new version, and a conforming
/// verifier rejects every other value.
pub const PROTOCOL_VERSION: &str = "PF-VL-1.0-A";

/// Transferable fairness proof for one shuffle.
///
/// Wire format (JSON):
///
/// ```json
/// {
///   "seed": "<64-hex>",
///   "seedHash": "<64-hex>",
///   "timestamp": "<ISO-8601>",
///   "version": "PF-VL-1.0-A"
/// }
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShuffleProof {
    /// Canonical seed text the shuffle was derived from.
    pub seed: String,

    /// SHA-256 of the seed text, published before the round as the
    /// pre-commitment.
    #[serde(rename = "seedHash")]
    pub seed_hash: String,

    /// Assembly instant, ISO-8601.
    pub timestamp: String,

    /// Protocol version literal.
    pub version: String,
}

impl ShuffleProof {
    /// Assemble a proof for a known seed, stamped with the current time.
    pub fn for_seed(seed: &Seed) -> Self {
        Self {
            seed: seed.hex(),
            seed_hash: hash_seed(seed),
            timestamp: Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true),
            version: PROTOCOL_VERSION.to_string(),
        }
    }

    /// Serialize to the JSON wire format.
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }

    /// Parse from the JSON wire format.
    pub fn from_json(text: &str) -> serde_json::Result<Self> {
        serde_json::from_str(text)
    }
}

/// Generate a shuffle proof, resolving the seed first.
///
/// A provided seed is validated and canonicalized; otherwise a fresh
/// seed comes from the OS CSPRNG.
pub fn generate_shuffle_proof(provided: Option<&str>) -> Result<ShuffleProof, SeedError> {
    let seed = Seed::resolve(provided)?;
    Ok(ShuffleProof::for_seed(&seed))
}

/// Deck-module entry point: shuffle under a fresh seed and return the
/// reordered deck together with its proof.
pub fn shuffle_with_proof<T: Clone>(deck: &[T]) -> Result<(Vec<T>, ShuffleProof), SeedError> {
    let seed = Seed::generate()?;
    let shuffled = shuffle_values(deck, &seed);
    Ok((shuffled, ShuffleProof::for_seed(&seed)))
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_proof_fields() {
        let seed_text = "0".repeat(64);
        let proof = generate_shuffle_proof(Some(&seed_text)).unwrap();

        assert_eq!(proof.seed, seed_text);
        assert_eq!(
            proof.seed_hash,
            "60e05bd1b195af2f94112fa7197a5c88289058840ce7c6df9693756bc6250f55"
        );
        assert_eq!(proof.version, PROTOCOL_VERSION);
        assert!(chrono::DateTime::parse_from_rfc3339(&proof.timestamp).is_ok());
    }

    #[test]
    fn test_generated_seed_is_well_formed() {
        let proof = generate_shuffle_proof(None).unwrap();
        assert!(Seed::parse(&proof.seed).is_ok());
        assert_eq!(proof.seed_hash.len(), 64);
    }

    #[test]
    fn test_invalid_provided_seed_rejected() {
        assert!(matches!(
            generate_shuffle_proof(Some("not-hex")),
            Err(SeedError::InvalidFormat { .. })
        ));
    }

    #[test]
    fn test_json_field_names() {
        let proof = generate_shuffle_proof(Some(&"0".repeat(64))).unwrap();
        let json = proof.to_json().unwrap();

        // Wire format uses camelCase seedHash
        assert!(json.contains("\"seedHash\""));
        assert!(json.contains("\"seed\""));
        assert!(json.contains("\"timestamp\""));
        assert!(json.contains("\"version\":\"PF-VL-1.0-A\""));

        assert_eq!(ShuffleProof::from_json(&json).unwrap(), proof);
    }

    #[test]
    fn test_shuffle_with_proof_consistent() {
        let deck: Vec<u8> = (0..52).collect();
        let (shuffled, proof) = shuffle_with_proof(&deck).unwrap();

        // The returned deck is exactly what the proof's seed derives
        let seed = Seed::parse(&proof.seed).unwrap();
        assert_eq!(shuffle_values(&deck, &seed), shuffled);
    }
}
