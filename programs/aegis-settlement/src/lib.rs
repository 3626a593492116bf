//! Aegis batch settlement.
//!
//! Each account holds an aggregate Pedersen-style commitment on BN254 G1.
//! A batch carries one delta commitment per slot; it is applied in one
//! step once every slot's signature recovers to the slot's contract
//! address and a single aggregate proof verifies against the batch
//! challenge.
//!
//! # Instructions
//!
//! - `UpdateCommitment`: authorize, verify, then add every delta
//! - `Verify`: the proof check alone
//! - `SetCommitment`: authority seeds or resets an account

pub mod config;
pub mod errors;
pub mod events;
pub mod instructions;
pub mod settlement;
pub mod state;

pub use config::{InitialAccount, SettlementConfig};
pub use errors::SettlementError;
pub use events::{EventType, SettlementEvent};
pub use instructions::SettlementInstruction;
pub use settlement::AegisSettlement;
pub use state::{AccountStore, TradeBatch, VrsSignature};
