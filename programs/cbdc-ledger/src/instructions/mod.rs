//! Instruction handlers for the confidential ledger.
//!
//! # Instruction Categories
//!
//! Discriminators are organized by domain:
//! - **0-31**: Proof-gated state transitions
//! - **192-255**: Admin instructions
//!
//! Every proof-gated handler follows the same flow and is all-or-nothing:
//!
//! ```text
//! process_*(ledger, args)
//! │
//! ├─── VALIDATION PHASE ─────────────────────────────────────────
//! ├──► 1. REQUIRE rt ∈ root history          (send/receive/exchange)
//! ├──► 2. REQUIRE nullifiers unspent         (send/receive/exchange)
//! ├──► 3. REQUIRE addr_d registered          (exchange)
//! ├──► 4. REQUIRE tree capacity for new commitments
//! ├──► 5. ASSEMBLE public inputs in circuit order
//! ├──► 6. REQUIRE verify(vk, proof, inputs)
//! │
//! ├─── EXECUTION PHASE ──────────────────────────────────────────
//! ├──► 7. append commitments (staged, committed together)
//! ├──► 8. spend nullifiers
//! └──► 9. update destination                 (exchange)
//! ```

pub mod admin;
pub mod exchange;
pub mod public_inputs;
pub mod receive;
pub mod register;
pub mod send;
pub mod types;

mod tree_updates;
mod validators;

pub use admin::{process_insert_cm, process_register_destination};
pub use exchange::process_exchange;
pub use receive::process_receive;
pub use register::process_register;
pub use send::process_send;
pub use types::{ExchangeArgs, ReceiveArgs, RegisterArgs, SendArgs};

/// Confidential ledger instruction set.
#[repr(u8)]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::IntoStaticStr)]
pub enum LedgerInstruction {
    // =========================================================================
    // State Transitions (0-31)
    // =========================================================================
    /// Register a new account commitment.
    Register = 0,

    /// Spend the account note, append the new account and value notes.
    Send = 1,

    /// Consume a value note into the account.
    Receive = 2,

    /// Move value into a registered destination.
    Exchange = 3,

    // =========================================================================
    // Admin Instructions (192-255)
    // =========================================================================
    /// Append a commitment directly (authority only).
    InsertCm = 192,

    /// Register an exchange destination (authority only).
    RegisterDestination = 193,
}
