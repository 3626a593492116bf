//! # Aegis Primitives
//!
//! Shared field, curve and proof-system types used by the confidential
//! ledger (`cbdc-ledger`) and the batch settlement engine
//! (`aegis-settlement`).
//!
//! ## Architecture
//!
//! ```text
//! ┌──────────────────────────────┐   ┌──────────────────────────────┐
//! │          cbdc-ledger         │   │       aegis-settlement       │
//! │ register/send/receive/exch.  │   │  verify / update_commitment  │
//! └──────────────┬───────────────┘   └──────────────┬───────────────┘
//!                │                                  │
//!                ▼                                  ▼
//! ┌─────────────────────────────────────────────────────────────────┐
//! │                        aegis-primitives                         │
//! │                                                                 │
//! │  Word / FieldElement    G1Point / G2Point / CurvePoint          │
//! │  ProofSystem ──► Bn254Groth16      AccumulatorHasher ──► Poseidon│
//! └─────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Everything that crosses a process boundary is expressed in 256-bit
//! big-endian [`Word`]s, the unit of the flat verifying-key and proof
//! encodings. [`FieldElement`] narrows a word to the BN254 scalar field and
//! never reduces silently.

pub mod curve;
pub mod error;
pub mod field;
pub mod groth16;
pub mod hasher;

pub use curve::{CurvePoint, G1Point, G2Point, elliptic_add};
pub use error::PrimitiveError;
pub use field::{FieldElement, Word, hash_to_field};
pub use groth16::{Bn254Groth16, Groth16Error, Proof, ProofSystem, VerifyingKey};
pub use hasher::{AccumulatorHasher, PoseidonHasher};
