//! Settlement engine construction parameters, loaded from JSON:
//!
//! ```json
//! {
//!   "batch_size": 8,
//!   "verifying_key": { "alpha_g1": [...], ... },
//!   "authority": "0x...",
//!   "accounts": [{ "address": "0x...", "commitment": ["1", "2"] }]
//! }
//! ```

use std::collections::HashSet;

use aegis_primitives::{G1Point, VerifyingKey};
use ethers_core::types::Address;
use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::errors::SettlementError;
use crate::instructions::public_inputs::AGGREGATE_INPUTS;

/// Initial commitment of one account.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct InitialAccount {
    /// Account address.
    pub address: Address,
    /// Aggregate commitment.
    pub commitment: G1Point,
}

/// Everything needed to construct a [`crate::AegisSettlement`].
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SettlementConfig {
    /// Slots per batch.
    pub batch_size: usize,
    /// Aggregate proof key.
    pub verifying_key: VerifyingKey,
    /// Address allowed to set account commitments.
    pub authority: Address,
    /// Accounts seeded at construction.
    #[serde(default)]
    pub accounts: Vec<InitialAccount>,
}

impl SettlementConfig {
    /// Parses and validates a JSON configuration.
    ///
    /// # Errors
    /// [`SettlementError::InvalidConfig`].
    pub fn from_json_str(json: &str) -> Result<Self, SettlementError> {
        let config: Self = serde_json::from_str(json).map_err(|e| {
            warn!(error = %e, "settlement config rejected");
            SettlementError::InvalidConfig
        })?;
        config.validate()?;
        Ok(config)
    }

    /// Checks the batch size, key arity and the seeded accounts.
    ///
    /// # Errors
    /// [`SettlementError::InvalidConfig`].
    pub fn validate(&self) -> Result<(), SettlementError> {
        if self.batch_size == 0 {
            warn!("batch size must be positive");
            return Err(SettlementError::InvalidConfig);
        }
        if self.verifying_key.nr_pubinputs() != AGGREGATE_INPUTS {
            warn!(
                arity = self.verifying_key.nr_pubinputs(),
                expected = AGGREGATE_INPUTS,
                "settlement key arity mismatch"
            );
            return Err(SettlementError::InvalidConfig);
        }

        let mut seen = HashSet::with_capacity(self.accounts.len());
        for account in &self.accounts {
            if !seen.insert(account.address) {
                warn!(address = ?account.address, "account seeded twice");
                return Err(SettlementError::InvalidConfig);
            }
            if account.commitment.to_affine().is_err() {
                warn!(address = ?account.address, "seeded commitment is not a curve point");
                return Err(SettlementError::InvalidConfig);
            }
        }
        Ok(())
    }
}
