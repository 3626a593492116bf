//! Ledger construction parameters.
//!
//! A ledger is built from one [`LedgerConfig`], usually loaded from JSON:
//!
//! ```json
//! {
//!   "tree_height": 32,
//!   "root_history": "unbounded",
//!   "keys": { "register": {...}, "send": {...}, "receive": {...}, "exchange": {...} },
//!   "auditor_public_key": ["1", "2"],
//!   "commitment_key": [["3", "4"], ["5", "6"]],
//!   "authority": "0x0000000000000000000000000000000000000001"
//! }
//! ```
//!
//! Verifying keys use the `{alpha_g1, beta_g2_neg, gamma_g2_neg,
//! delta_g2_neg, gamma_abc_g1}` layout of decimal strings.

use aegis_primitives::{CurvePoint, VerifyingKey};
use ethers_core::types::Address;
use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::errors::LedgerError;
use crate::instructions::{LedgerInstruction, public_inputs};
use crate::state::{DEFAULT_TREE_HEIGHT, MAX_TREE_HEIGHT, RootHistoryPolicy};

fn default_tree_height() -> u8 {
    DEFAULT_TREE_HEIGHT
}

/// One frozen verifying key per proof-gated operation.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct OperationKeys {
    /// Key for `register`.
    pub register: VerifyingKey,
    /// Key for `send`.
    pub send: VerifyingKey,
    /// Key for `receive`.
    pub receive: VerifyingKey,
    /// Key for `exchange`.
    pub exchange: VerifyingKey,
}

impl OperationKeys {
    /// Key for a proof-gated instruction; `None` for admin instructions.
    pub fn for_instruction(&self, instruction: LedgerInstruction) -> Option<&VerifyingKey> {
        match instruction {
            LedgerInstruction::Register => Some(&self.register),
            LedgerInstruction::Send => Some(&self.send),
            LedgerInstruction::Receive => Some(&self.receive),
            LedgerInstruction::Exchange => Some(&self.exchange),
            LedgerInstruction::InsertCm | LedgerInstruction::RegisterDestination => None,
        }
    }
}

/// Everything needed to construct a [`crate::CbdcLedger`].
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct LedgerConfig {
    /// Commitment tree height, `1..=32`.
    #[serde(default = "default_tree_height")]
    pub tree_height: u8,
    /// Root history retention.
    #[serde(default)]
    pub root_history: RootHistoryPolicy,
    /// Operation verifying keys.
    pub keys: OperationKeys,
    /// Auditor public key `apk`, bound into every operation.
    pub auditor_public_key: CurvePoint,
    /// Commitment key `ck`, bound into exchange.
    pub commitment_key: [CurvePoint; 2],
    /// Address allowed to run the admin instructions.
    pub authority: Address,
}

impl LedgerConfig {
    /// Parses and validates a JSON configuration.
    ///
    /// # Errors
    /// [`LedgerError::InvalidConfig`] on malformed JSON or a failed
    /// [`LedgerConfig::validate`].
    pub fn from_json_str(json: &str) -> Result<Self, LedgerError> {
        let config: Self = serde_json::from_str(json).map_err(|e| {
            warn!(error = %e, "ledger config rejected");
            LedgerError::InvalidConfig
        })?;
        config.validate()?;
        Ok(config)
    }

    /// Checks the tree height and that every key has room for the fixed
    /// part of its public-input layout.
    ///
    /// # Errors
    /// [`LedgerError::InvalidConfig`].
    pub fn validate(&self) -> Result<(), LedgerError> {
        if self.tree_height == 0 || self.tree_height > MAX_TREE_HEIGHT {
            warn!(tree_height = self.tree_height, "tree height out of range");
            return Err(LedgerError::InvalidConfig);
        }
        if self.root_history == RootHistoryPolicy::Window(0) {
            warn!("root history window must hold at least one root");
            return Err(LedgerError::InvalidConfig);
        }

        let checks = [
            (LedgerInstruction::Register, public_inputs::REGISTER_FIXED_INPUTS),
            (LedgerInstruction::Send, public_inputs::SEND_FIXED_INPUTS),
            (LedgerInstruction::Receive, public_inputs::RECEIVE_FIXED_INPUTS),
            (LedgerInstruction::Exchange, public_inputs::EXCHANGE_FIXED_INPUTS),
        ];
        for (instruction, fixed) in checks {
            let Some(vk) = self.keys.for_instruction(instruction) else {
                continue;
            };
            if vk.nr_pubinputs() < fixed {
                warn!(
                    instruction = <&'static str>::from(instruction),
                    arity = vk.nr_pubinputs(),
                    fixed,
                    "verifying key arity below the fixed layout"
                );
                return Err(LedgerError::InvalidConfig);
            }
        }
        Ok(())
    }
}
