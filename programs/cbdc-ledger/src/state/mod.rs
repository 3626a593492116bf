//! Ledger state owned by a [`crate::CbdcLedger`] instance.

mod commitment_tree;
mod destination;
mod nullifier;

pub use commitment_tree::*;
pub use destination::*;
pub use nullifier::*;
