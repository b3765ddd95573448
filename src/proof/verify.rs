//! Verification API
//!
//! Two independent checks let a third party audit a round without
//! trusting the operator:
//!
//! - **Structural**: the proof is internally consistent (seedHash,
//!   timestamp, version).
//! - **Reproduction**: re-running the shuffle from the seed yields
//!   exactly the claimed deck order. This is the actual fairness proof.
//!
//! Failed verification is an expected adversarial outcome, not a bug:
//! every entry point reports a result value and never raises.

use tracing::debug;

use crate::core::hash::hash_seed;
use crate::core::seed::Seed;
use crate::core::shuffle::shuffle_values;
use crate::proof::assemble::{ShuffleProof, PROTOCOL_VERSION};

/// Per-check breakdown of a structural verification.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct StructuralChecks {
    /// seedHash equals SHA-256 of the seed's canonical text.
    pub seed_hash: bool,
    /// timestamp parses as a valid ISO-8601 instant.
    pub timestamp: bool,
    /// version equals the supported protocol literal.
    pub version: bool,
}

/// Which structural check failed first.
///
/// Named to aid dispute resolution; check order is seedHash, timestamp,
/// version.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum StructuralError {
    /// seedHash is not the hash of the seed (or the seed itself is
    /// malformed, which makes the commitment unverifiable).
    #[error("seedHash does not match SHA-256 of the seed")]
    SeedHashMismatch,

    /// timestamp is not a parseable instant.
    #[error("timestamp is not a valid ISO-8601 instant")]
    InvalidTimestamp,

    /// version is not the supported literal.
    #[error("unsupported protocol version: {got}")]
    UnsupportedVersion {
        /// The version literal found in the proof.
        got: String,
    },
}

/// Outcome of a structural proof verification.
#[derive(Clone, Debug)]
pub struct ProofVerification {
    /// Did every check pass?
    pub valid: bool,

    /// Per-check breakdown.
    pub checks: StructuralChecks,

    /// First failing check, if any.
    pub error: Option<StructuralError>,
}

impl ProofVerification {
    /// Human-readable name of the first failing check.
    pub fn message(&self) -> Option<String> {
        self.error.as_ref().map(|e| e.to_string())
    }
}

/// Structural check: is the proof internally consistent?
///
/// All three checks are always evaluated so the breakdown is complete;
/// `error` names the first failure. A malformed seed fails the seedHash
/// check rather than raising.
pub fn verify_shuffle_proof(proof: &ShuffleProof) -> ProofVerification {
    let seed_hash = match Seed::parse(&proof.seed) {
        Ok(seed) => hash_seed(&seed) == proof.seed_hash,
        Err(_) => false,
    };
    let timestamp = chrono::DateTime::parse_from_rfc3339(&proof.timestamp).is_ok();
    let version = proof.version == PROTOCOL_VERSION;

    let checks = StructuralChecks {
        seed_hash,
        timestamp,
        version,
    };

    let error = if !seed_hash {
        Some(StructuralError::SeedHashMismatch)
    } else if !timestamp {
        Some(StructuralError::InvalidTimestamp)
    } else if !version {
        Some(StructuralError::UnsupportedVersion {
            got: proof.version.clone(),
        })
    } else {
        None
    };

    if let Some(e) = &error {
        debug!(error = %e, "structural verification failed");
    }

    ProofVerification {
        valid: error.is_none(),
        checks,
        error,
    }
}

/// Reproduction check: does the seed actually produce the claimed
/// shuffle of `original`?
///
/// Returns `false` on any internal error (malformed seed, length
/// mismatch) - reporting pass/fail is this function's entire job, so it
/// never propagates errors to the caller. Reports only pass/fail, never
/// which index diverged.
pub fn verify_shuffle_with_seed<T: Clone + PartialEq>(
    original: &[T],
    claimed: &[T],
    seed_text: &str,
) -> bool {
    let seed = match Seed::parse(seed_text) {
        Ok(seed) => seed,
        Err(_) => {
            debug!("reproduction check: malformed seed");
            return false;
        }
    };

    if original.len() != claimed.len() {
        debug!("reproduction check: cardinality mismatch");
        return false;
    }

    shuffle_values(original, &seed) == claimed
}

/// Full audit: structural pass and reproduction pass.
pub fn verify_shuffle_with_proof<T: Clone + PartialEq>(
    original: &[T],
    claimed: &[T],
    proof: &ShuffleProof,
) -> bool {
    verify_shuffle_proof(proof).valid && verify_shuffle_with_seed(original, claimed, &proof.seed)
}

// =============================================================================
// TESTS
// =============================================================================
