//! Settlement instruction handlers.
//!
//! ```text
//! process_update_commitment(engine, signatures, proof, batch)
//! │
//! ├─── VALIDATION PHASE ─────────────────────────────────────────
//! ├──► 1. REQUIRE every column has batch_size slots
//! ├──► 2. messageHash = keccak256(abi.encode(proof, batch))
//! ├──► 3. REQUIRE recover(signatures[i], messageHash) == contract_address[i]
//! ├──► 4. REQUIRE verify(vk, proof, [tau])
//! ├──► 5. stage accounts[user[i]] + delta_cm[i] for every slot
//! │
//! ├─── EXECUTION PHASE ──────────────────────────────────────────
//! └──► 6. commit the staged accounts, emit events
//! ```

pub mod admin;
pub mod authorization;
pub mod public_inputs;
pub mod update_commitment;
pub mod verify;

pub use admin::process_set_commitment;
pub use update_commitment::process_update_commitment;
pub use verify::process_verify;

/// Settlement instruction set.
#[repr(u8)]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::IntoStaticStr)]
pub enum SettlementInstruction {
    /// Apply a signed and proven batch.
    UpdateCommitment = 0,

    /// Check an aggregate proof without applying the batch.
    Verify = 1,

    // =========================================================================
    // Admin Instructions (192-255)
    // =========================================================================
    /// Set an account's commitment (authority only).
    SetCommitment = 192,
}
