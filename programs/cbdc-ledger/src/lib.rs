//! Confidential ledger.
//!
//! Account and value notes live as commitments in an append-only Merkle
//! accumulator; spending a note reveals its nullifier. Every state
//! transition is gated by a Groth16 proof whose public inputs the ledger
//! assembles itself from the instruction arguments and its frozen
//! parameters (auditor key, commitment key).
//!
//! ```text
//!                 ┌──────────────────────────────┐
//!   args ───────► │ instructions::process_*      │
//!                 │  validators → public_inputs  │
//!                 │  → verifier → tree_updates   │
//!                 └──────┬───────────┬───────────┘
//!                        │           │
//!          ┌─────────────▼──┐   ┌────▼────────────┐   ┌──────────────────┐
//!          │ merkle_tree    │   │ state           │   │ events           │
//!          │ (accumulator,  │   │ (nullifiers,    │   │ (journal drained │
//!          │  root history) │   │  destinations)  │   │  by the caller)  │
//!          └────────────────┘   └─────────────────┘   └──────────────────┘
//! ```

pub mod config;
pub mod errors;
pub mod events;
pub mod instructions;
pub mod ledger;
pub mod merkle_tree;
pub mod state;
pub mod verifier;

pub use config::{LedgerConfig, OperationKeys};
pub use errors::LedgerError;
pub use events::{EventType, LedgerEvent};
pub use instructions::{ExchangeArgs, LedgerInstruction, ReceiveArgs, RegisterArgs, SendArgs};
pub use ledger::CbdcLedger;
pub use state::{DestinationAccountState, RootHistory, RootHistoryPolicy};
