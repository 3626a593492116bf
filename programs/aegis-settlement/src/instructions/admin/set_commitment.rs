use aegis_primitives::{G1Point, ProofSystem};
use ethers_core::types::Address;
use tracing::{info, warn};

use crate::AegisSettlement;
use crate::errors::SettlementError;
use crate::events::{CommitmentSetEvent, SettlementEvent, address_bytes, commitment_bytes};
use crate::instructions::SettlementInstruction;

/// Sets the commitment of `address`, replacing any previous value.
///
/// # Errors
/// `Unauthorized` if `caller` is not the authority, `MalformedInput` if
/// `commitment` is not a G1 point.
pub fn process_set_commitment<P: ProofSystem>(
    engine: &mut AegisSettlement<P>,
    caller: &Address,
    address: Address,
    commitment: G1Point,
) -> Result<(), SettlementError> {
    if *caller != engine.authority {
        warn!(
            instruction = <&'static str>::from(SettlementInstruction::SetCommitment),
            caller = ?caller,
            "caller is not the settlement authority"
        );
        return Err(SettlementError::Unauthorized);
    }
    commitment.to_affine().map(|_| ()).inspect_err(|e| {
        warn!(address = ?address, error = %e, "commitment is not a G1 point");
    })?;

    engine.accounts.set(address, commitment);
    engine
        .events
        .push(SettlementEvent::CommitmentSet(CommitmentSetEvent {
            address: address_bytes(&address),
            commitment: commitment_bytes(&commitment),
        }));
    info!(address = ?address, "account commitment set");
    Ok(())
}
