//! Aggregate batch proof check over the single public input `tau`.

use aegis_primitives::{Proof, ProofSystem};
use tracing::{debug, warn};

use super::{SettlementInstruction, public_inputs};
use crate::AegisSettlement;
use crate::errors::SettlementError;
use crate::state::TradeBatch;

/// Verifies the aggregate proof of `batch` against the settlement key.
///
/// # Errors
/// `MalformedInput` for a batch of the wrong shape,
/// `ProofVerificationFailed` otherwise.
pub(crate) fn require_valid_aggregate_proof<P: ProofSystem>(
    engine: &AegisSettlement<P>,
    instruction: SettlementInstruction,
    proof: &Proof,
    batch: &TradeBatch,
) -> Result<(), SettlementError> {
    batch.require_size(engine.batch_size)?;

    let inputs = public_inputs::aggregate_inputs(batch);
    engine
        .proof_system
        .verify(&engine.verifying_key, proof, &inputs)
        .map_err(|e| {
            warn!(
                instruction = <&'static str>::from(instruction),
                code = u32::from(e),
                error = %e,
                "aggregate proof rejected"
            );
            SettlementError::ProofVerificationFailed
        })
}

/// Pure check of `(proof, batch)`; never mutates the engine.
pub fn process_verify<P: ProofSystem>(
    engine: &AegisSettlement<P>,
    proof: &Proof,
    batch: &TradeBatch,
) -> bool {
    let valid =
        require_valid_aggregate_proof(engine, SettlementInstruction::Verify, proof, batch).is_ok();
    debug!(valid, "batch verified");
    valid
}
