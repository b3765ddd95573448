//! # Fairdeck
//!
//! Cryptographic fairness core for an online card game: produces a deck
//! permutation that neither operator nor player can bias after the
//! fact, and lets any third party verify - without trusting the
//! operator - that the permutation used in a round was exactly the one
//! determined by a jointly agreed seed.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                        FAIRDECK                             │
//! ├─────────────────────────────────────────────────────────────┤
//! │  core/            - Deterministic primitives                │
//! │  ├── seed.rs      - Seed codec + OS entropy source          │
//! │  ├── hash.rs      - SHA-256 + seed commitment               │
//! │  ├── rng.rs       - Counter-mode draw stream                │
//! │  └── shuffle.rs   - Seeded Fisher-Yates engine              │
//! │                                                             │
//! │  proof/           - Public fairness artifact                │
//! │  ├── assemble.rs  - ShuffleProof generation                 │
//! │  └── verify.rs    - Structural + reproduction checks        │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Determinism Guarantee
//!
//! Every draw a shuffle consumes comes from SHA-256 over the seed's
//! canonical hex text and a zero-padded decimal counter. Given the same
//! seed, the permutation is identical on any platform, so a verifier
//! can replay it bit-for-bit. No component carries state across calls;
//! the draw counter lives inside one shuffle invocation.
//!
//! ## Round flow
//!
//! 1. Operator publishes `seedHash` before the round (pre-commitment).
//! 2. The deck is shuffled under the seed; proof + shuffle are stored.
//! 3. After the round, anyone replays the shuffle from the revealed
//!    seed and checks both the commitment and the permutation.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![deny(unsafe_code)]

pub mod core;
pub mod proof;

// Re-export commonly used types
pub use core::seed::{EntropySource, OsEntropy, Seed, SeedError};
pub use core::shuffle::{shuffle_indices, shuffle_values, shuffle_with_seed};
pub use proof::assemble::{
    generate_shuffle_proof, shuffle_with_proof, ShuffleProof, PROTOCOL_VERSION,
};
pub use proof::verify::{
    verify_shuffle_proof, verify_shuffle_with_proof, verify_shuffle_with_seed, ProofVerification,
};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
