//! Settlement state and batch types.

use std::collections::HashMap;

use aegis_primitives::{G1Point, Word};
use ethers_core::types::{Address, Signature, U256};
use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::errors::SettlementError;

/// Aggregate commitment per account.
///
/// Accounts never written read as the point at infinity.
#[derive(Clone, Debug, Default)]
pub struct AccountStore {
    accounts: HashMap<Address, G1Point>,
}

impl AccountStore {
    /// Current commitment of `address`.
    pub fn get(&self, address: &Address) -> G1Point {
        self.accounts
            .get(address)
            .copied()
            .unwrap_or(G1Point::INFINITY)
    }

    /// Overwrites the commitment of `address`.
    pub fn set(&mut self, address: Address, commitment: G1Point) {
        self.accounts.insert(address, commitment);
    }

    /// Returns true if `address` has ever been written.
    pub fn contains(&self, address: &Address) -> bool {
        self.accounts.contains_key(address)
    }

    /// Number of written accounts.
    pub fn len(&self) -> usize {
        self.accounts.len()
    }

    /// Returns true if no account has been written.
    pub fn is_empty(&self) -> bool {
        self.accounts.is_empty()
    }
}

/// One batch of commitment deltas.
///
/// Slot `i` adds `delta_cm[i]` to the account of `user_address[i]`,
/// authorized by a signature from `contract_address[i]`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TradeBatch {
    /// Expected signer per slot.
    pub contract_address: Vec<Address>,
    /// Account updated per slot.
    pub user_address: Vec<Address>,
    /// Delta commitment per slot.
    pub delta_cm: Vec<G1Point>,
}

impl TradeBatch {
    /// Number of slots, or `None` if the three columns disagree.
    pub fn len(&self) -> Option<usize> {
        let len = self.contract_address.len();
        (self.user_address.len() == len && self.delta_cm.len() == len).then_some(len)
    }

    /// Returns true for a batch with no slots.
    pub fn is_empty(&self) -> bool {
        self.len() == Some(0)
    }

    /// Requires every column to hold exactly `batch_size` slots.
    ///
    /// # Errors
    /// [`SettlementError::MalformedInput`].
    pub fn require_size(&self, batch_size: usize) -> Result<(), SettlementError> {
        if self.len() != Some(batch_size) {
            warn!(
                contract_address = self.contract_address.len(),
                user_address = self.user_address.len(),
                delta_cm = self.delta_cm.len(),
                batch_size,
                "batch does not match the configured size"
            );
            return Err(SettlementError::MalformedInput);
        }
        Ok(())
    }
}

/// ECDSA signature in `(v, r, s)` form.
///
/// `v` is 27/28 as produced by Ethereum wallets; 0/1 is accepted too.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct VrsSignature {
    /// Recovery id.
    pub v: u8,
    /// `r` scalar, big-endian.
    pub r: Word,
    /// `s` scalar, big-endian.
    pub s: Word,
}

impl From<&VrsSignature> for Signature {
    fn from(sig: &VrsSignature) -> Self {
        Signature {
            r: U256::from_big_endian(sig.r.as_bytes()),
            s: U256::from_big_endian(sig.s.as_bytes()),
            v: u64::from(sig.v),
        }
    }
}
