//! Seed Generation and Codec
//!
//! A seed is the single secret from which an entire shuffle is derived.
//! Canonical form: exactly 64 lowercase hex characters (256 bits).
//!
//! Seeds come from the OS CSPRNG or from a caller (validated). There is
//! no fallback to a weaker generator - if the OS source fails, seed
//! generation fails.

use std::fmt;

use rand::rngs::OsRng;
use rand::RngCore;
use thiserror::Error;

/// Seed length in raw bytes.
pub const SEED_BYTES: usize = 32;

/// Seed length in canonical hex characters.
pub const SEED_HEX_LEN: usize = 64;

/// Errors from seed creation and parsing.
#[derive(Debug, Error)]
pub enum SeedError {
    /// Seed text fails the `[0-9a-fA-F]{64}` grammar.
    #[error("seed must be exactly 64 hex characters ({reason})")]
    InvalidFormat {
        /// What about the text was wrong.
        reason: String,
    },

    /// The OS secure random generator is unavailable.
    ///
    /// Fatal for seed generation - there is deliberately no fallback,
    /// which would void every fairness guarantee.
    #[error("secure random generator unavailable: {0}")]
    EntropyUnavailable(#[from] rand::Error),
}

/// Capability interface for secure random bytes.
///
/// The rest of the crate is pure computation; this trait is the only
/// seam that touches a platform primitive. Tests and alternate
/// platforms supply their own implementation.
pub trait EntropySource {
    /// Fill `dest` with cryptographically secure random bytes.
    fn fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), SeedError>;
}

/// Production entropy source backed by the OS CSPRNG.
pub struct OsEntropy;

impl EntropySource for OsEntropy {
    fn fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), SeedError> {
        OsRng.try_fill_bytes(dest)?;
        Ok(())
    }
}

/// A validated 256-bit shuffle seed.
///
/// Construction always goes through validation or the entropy source,
/// so holding a `Seed` means the grammar already passed. Immutable.
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct Seed([u8; SEED_BYTES]);

impl Seed {
    /// Generate a fresh seed from the OS CSPRNG.
    pub fn generate() -> Result<Self, SeedError> {
        Self::generate_with(&mut OsEntropy)
    }

    /// Generate a fresh seed from a caller-supplied entropy source.
    pub fn generate_with(source: &mut impl EntropySource) -> Result<Self, SeedError> {
        let mut bytes = [0u8; SEED_BYTES];
        source.fill_bytes(&mut bytes)?;
        Ok(Self(bytes))
    }

    /// Parse seed text, accepting hex case-insensitively.
    ///
    /// The stored form is canonical (lowercase); `hex()` round-trips it.
    pub fn parse(text: &str) -> Result<Self, SeedError> {
        if text.len() != SEED_HEX_LEN {
            return Err(SeedError::InvalidFormat {
                reason: format!("got {} characters", text.len()),
            });
        }

        let mut bytes = [0u8; SEED_BYTES];
        hex::decode_to_slice(text.to_ascii_lowercase(), &mut bytes).map_err(|_| {
            SeedError::InvalidFormat {
                reason: "non-hex character".to_string(),
            }
        })?;

        Ok(Self(bytes))
    }

    /// Resolve an optional caller-provided seed.
    ///
    /// Validates and canonicalizes the text if present, otherwise
    /// generates a fresh seed.
    pub fn resolve(provided: Option<&str>) -> Result<Self, SeedError> {
        match provided {
            Some(text) => Self::parse(text),
            None => Self::generate(),
        }
    }

    /// Canonical text form: 64 lowercase hex characters.
    pub fn hex(&self) -> String {
        hex::encode(self.0)
    }

    /// Raw seed bytes.
    pub fn as_bytes(&self) -> &[u8; SEED_BYTES] {
        &self.0
    }
}

impl fmt::Display for Seed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.hex())
    }
}

impl fmt::Debug for Seed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Seed({})", self.hex())
    }
}

// =============================================================================
// TESTS
// =============================================================================
