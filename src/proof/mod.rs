//! Provably Fair Proof System
//!
//! Assembles and verifies the public artifact for one shuffle:
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                    PROOF SYSTEM                             │
//! ├─────────────────────────────────────────────────────────────┤
//! │  assemble.rs  - ShuffleProof artifact + proof generation    │
//! │  verify.rs    - structural + reproduction verification      │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! Round bookkeeping persists `seedHash` before a round begins and the
//! full proof afterward; this module persists nothing itself.

pub mod assemble;
pub mod verify;

// Re-export key types
pub use assemble::{generate_shuffle_proof, shuffle_with_proof, ShuffleProof, PROTOCOL_VERSION};
pub use verify::{
    verify_shuffle_proof, verify_shuffle_with_proof, verify_shuffle_with_seed, ProofVerification,
    StructuralChecks, StructuralError,
};
