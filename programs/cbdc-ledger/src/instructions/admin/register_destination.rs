use aegis_primitives::{AccumulatorHasher, FieldElement, ProofSystem};
use ethers_core::types::Address;
use tracing::{info, warn};

use crate::CbdcLedger;
use crate::errors::LedgerError;
use crate::events::{DestinationRegisteredEvent, LedgerEvent};
use crate::instructions::{LedgerInstruction, validators};
use crate::state::DestinationAccountState;

const INSTRUCTION: LedgerInstruction = LedgerInstruction::RegisterDestination;

/// Register an exchange destination with its initial commitments.
///
/// Exchange only writes to destinations registered here.
///
/// # Errors
/// `Unauthorized` if `caller` is not the authority, `MalformedInput` if
/// `addr_d` is already registered.
pub fn process_register_destination<P: ProofSystem, H: AccumulatorHasher>(
    ledger: &mut CbdcLedger<P, H>,
    caller: &Address,
    addr_d: FieldElement,
    state: DestinationAccountState,
) -> Result<(), LedgerError> {
    validators::require_authority(ledger, INSTRUCTION, caller)?;

    ledger.destinations.register(addr_d, state).inspect_err(|_| {
        warn!(addr_d = %addr_d, "destination already registered");
    })?;

    ledger
        .events
        .push(LedgerEvent::DestinationRegistered(DestinationRegisteredEvent {
            addr_d: addr_d.to_be_bytes(),
            cm_new_d: state.cm_new_d.coordinates().map(|c| c.to_be_bytes()),
            cm_v_d: state.cm_v_d.coordinates().map(|c| c.to_be_bytes()),
        }));
    info!(addr_d = %addr_d, "destination registered");
    Ok(())
}
