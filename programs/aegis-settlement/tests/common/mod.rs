//! Shared test helpers organized by domain.
//!
//! - `proof_system`: deterministic stand-in for the pairing check
//! - `signing`: secp256k1 keys and personal-message signatures
//! - `setup`: points, batches and engine construction

#![allow(dead_code)]

pub mod proof_system;
pub mod setup;
pub mod signing;

pub use proof_system::*;
pub use setup::*;
pub use signing::*;
