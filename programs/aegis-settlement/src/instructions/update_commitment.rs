//! Batch settlement: authorize, verify, then apply every slot's delta atomically.

use std::collections::HashMap;

use aegis_primitives::{G1Point, Proof, ProofSystem, elliptic_add};
use ethers_core::types::{Address, H256};
use tracing::{debug, warn};

use super::verify::require_valid_aggregate_proof;
use super::{SettlementInstruction, authorization};
use crate::AegisSettlement;
use crate::errors::SettlementError;
use crate::events::{
    BatchSettledEvent, CommitmentUpdatedEvent, SettlementEvent, address_bytes, commitment_bytes,
};
use crate::state::{TradeBatch, VrsSignature};

const INSTRUCTION: SettlementInstruction = SettlementInstruction::UpdateCommitment;

/// Applies `batch` once every slot is authorized and the aggregate proof
/// verifies.
///
/// Slot `i` sets `accounts[user_address[i]] += delta_cm[i]`; a user listed
/// in several slots receives every delta in slot order. Accounts outside
/// the batch are untouched.
///
/// # Errors
/// `MalformedInput`, `UnauthorizedSigner`, `ProofVerificationFailed`. On
/// any error no account changes.
pub fn process_update_commitment<P: ProofSystem>(
    engine: &mut AegisSettlement<P>,
    signatures: &[VrsSignature],
    proof: &Proof,
    batch: &TradeBatch,
) -> Result<(), SettlementError> {
    batch.require_size(engine.batch_size)?;

    let message_hash = authorization::message_hash(proof, batch);
    authorization::authorize_batch(signatures, &message_hash, batch)?;
    require_valid_aggregate_proof(engine, INSTRUCTION, proof, batch)?;

    // Stage every sum first so an invalid delta leaves all accounts as they were.
    let mut staged: HashMap<Address, G1Point> = HashMap::with_capacity(batch.user_address.len());
    let mut updates = Vec::with_capacity(batch.user_address.len());
    for (slot, (user, delta)) in batch.user_address.iter().zip(&batch.delta_cm).enumerate() {
        let current = staged
            .get(user)
            .copied()
            .unwrap_or_else(|| engine.accounts.get(user));
        let updated = elliptic_add(&current, delta).map_err(|e| {
            warn!(slot, user = ?user, error = %e, "invalid delta commitment");
            SettlementError::from(e)
        })?;
        staged.insert(*user, updated);
        updates.push((*user, updated));
    }

    for (user, commitment) in updates {
        engine.accounts.set(user, commitment);
        engine
            .events
            .push(SettlementEvent::CommitmentUpdated(CommitmentUpdatedEvent {
                address: address_bytes(&user),
                commitment: commitment_bytes(&commitment),
            }));
    }
    engine
        .events
        .push(SettlementEvent::BatchSettled(BatchSettledEvent {
            message_hash,
            slots: batch.user_address.len() as u64,
        }));

    debug!(
        slots = batch.user_address.len(),
        message_hash = ?H256::from(message_hash),
        "batch settled"
    );
    Ok(())
}
