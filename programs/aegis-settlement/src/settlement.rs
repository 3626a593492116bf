//! Settlement engine state: account commitments, configuration and emitted events.

use aegis_primitives::{G1Point, Proof, ProofSystem, VerifyingKey, elliptic_add};
use ethers_core::types::Address;
use tracing::info;

use crate::config::SettlementConfig;
use crate::errors::SettlementError;
use crate::events::SettlementEvent;
use crate::instructions::{self, authorization};
use crate::state::{AccountStore, TradeBatch, VrsSignature};

/// Batch settlement engine.
///
/// Owns the per-account aggregate commitments and the frozen settlement
/// key. Each call runs to completion against `&mut self`.
pub struct AegisSettlement<P: ProofSystem> {
    pub(crate) proof_system: P,
    pub(crate) verifying_key: VerifyingKey,
    pub(crate) batch_size: usize,
    pub(crate) authority: Address,
    pub(crate) accounts: AccountStore,
    pub(crate) events: Vec<SettlementEvent>,
}

impl<P: ProofSystem> AegisSettlement<P> {
    /// Builds an engine and seeds the configured accounts.
    ///
    /// # Errors
    /// [`SettlementError::InvalidConfig`].
    pub fn new(config: SettlementConfig, proof_system: P) -> Result<Self, SettlementError> {
        config.validate()?;

        let mut accounts = AccountStore::default();
        for account in &config.accounts {
            accounts.set(account.address, account.commitment);
        }
        info!(
            batch_size = config.batch_size,
            accounts = accounts.len(),
            authority = ?config.authority,
            "settlement engine initialized"
        );

        Ok(Self {
            proof_system,
            verifying_key: config.verifying_key,
            batch_size: config.batch_size,
            authority: config.authority,
            accounts,
            events: Vec::new(),
        })
    }

    /// Returns true iff `proof` verifies for `batch`. Never mutates.
    pub fn verify(&self, proof: &Proof, batch: &TradeBatch) -> bool {
        instructions::process_verify(self, proof, batch)
    }

    /// Applies a signed and proven batch.
    ///
    /// # Errors
    /// See [`instructions::process_update_commitment`].
    pub fn update_commitment(
        &mut self,
        signatures: &[VrsSignature],
        proof: &Proof,
        batch: &TradeBatch,
    ) -> Result<(), SettlementError> {
        instructions::process_update_commitment(self, signatures, proof, batch)
    }

    /// Sets an account commitment. Authority only.
    ///
    /// # Errors
    /// See [`instructions::process_set_commitment`].
    pub fn set_commitment(
        &mut self,
        caller: &Address,
        address: Address,
        commitment: G1Point,
    ) -> Result<(), SettlementError> {
        instructions::process_set_commitment(self, caller, address, commitment)
    }

    /// Commitment of `address`; infinity if never written.
    pub fn get_cm(&self, address: &Address) -> G1Point {
        self.accounts.get(address)
    }

    /// G1 addition helper.
    ///
    /// # Errors
    /// [`SettlementError::MalformedInput`] if either operand is not a G1
    /// point.
    pub fn bn_add(&self, p: &G1Point, q: &G1Point) -> Result<G1Point, SettlementError> {
        Ok(elliptic_add(p, q)?)
    }

    /// Hash the slot signatures of `(proof, batch)` must cover.
    pub fn message_hash(&self, proof: &Proof, batch: &TradeBatch) -> [u8; 32] {
        authorization::message_hash(proof, batch)
    }

    /// Slots per batch.
    pub fn batch_size(&self) -> usize {
        self.batch_size
    }

    /// Settlement verifying key.
    pub fn verifying_key(&self) -> &VerifyingKey {
        &self.verifying_key
    }

    /// Admin authority.
    pub fn authority(&self) -> &Address {
        &self.authority
    }

    /// Number of accounts ever written.
    pub fn account_count(&self) -> usize {
        self.accounts.len()
    }

    /// Events emitted since the last drain, oldest first.
    pub fn events(&self) -> &[SettlementEvent] {
        &self.events
    }

    /// Drains the event journal.
    pub fn take_events(&mut self) -> Vec<SettlementEvent> {
        core::mem::take(&mut self.events)
    }
}
