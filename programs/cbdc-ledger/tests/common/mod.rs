//! Shared test helpers organized by domain.
//!
//! - `proof_system`: deterministic stand-in for the pairing check
//! - `setup`: keys, configuration and ledger construction
//! - `args`: instruction arguments with valid proofs attached

#![allow(dead_code)]

pub mod args;
pub mod proof_system;
pub mod setup;

pub use args::*;
pub use proof_system::*;
pub use setup::*;
