//! State mutations shared by the instruction handlers.
//!
//! Handlers call these only after every precondition and the proof have
//! been checked.

use aegis_primitives::{AccumulatorHasher, FieldElement, ProofSystem};
use tracing::debug;

use crate::CbdcLedger;
use crate::errors::LedgerError;
use crate::events::{
    DestinationUpdatedEvent, LedgerEvent, NewCommitmentEvent, NewNullifierEvent,
};
use crate::state::DestinationAccountState;

/// Append `commitments` as one unit and emit a `NewCommitment` per leaf.
///
/// Returns the root after the last commitment.
pub(crate) fn append_commitments<P: ProofSystem, H: AccumulatorHasher>(
    ledger: &mut CbdcLedger<P, H>,
    commitments: &[FieldElement],
) -> Result<FieldElement, LedgerError> {
    let first_index = ledger.accumulator.next_index();
    let roots = ledger.accumulator.insert_all(commitments)?;

    for (offset, (cm, root)) in commitments.iter().zip(&roots).enumerate() {
        let index = first_index + offset as u64;
        debug!(index, commitment = %cm, root = %root, "commitment appended");
        ledger
            .events
            .push(LedgerEvent::NewCommitment(NewCommitmentEvent {
                index,
                commitment: cm.to_be_bytes(),
                root: root.to_be_bytes(),
            }));
    }
    Ok(ledger.accumulator.current_root())
}

/// Spend `nullifiers` and emit a `NewNullifier` for each.
///
/// Callers check with `require_unspent` first, so the inserts cannot fail
/// part-way.
pub(crate) fn spend_nullifiers<P: ProofSystem, H: AccumulatorHasher>(
    ledger: &mut CbdcLedger<P, H>,
    nullifiers: &[FieldElement],
) -> Result<(), LedgerError> {
    for sn in nullifiers {
        ledger.nullifiers.insert(*sn)?;
        debug!(nullifier = %sn, "nullifier spent");
        ledger
            .events
            .push(LedgerEvent::NewNullifier(NewNullifierEvent {
                nullifier: sn.to_be_bytes(),
            }));
    }
    Ok(())
}

/// Overwrite a registered destination and emit `DestinationUpdated`.
pub(crate) fn update_destination<P: ProofSystem, H: AccumulatorHasher>(
    ledger: &mut CbdcLedger<P, H>,
    addr_d: &FieldElement,
    state: DestinationAccountState,
) -> Result<(), LedgerError> {
    ledger.destinations.update(addr_d, state)?;
    debug!(addr_d = %addr_d, "destination updated");
    ledger
        .events
        .push(LedgerEvent::DestinationUpdated(DestinationUpdatedEvent {
            addr_d: addr_d.to_be_bytes(),
            cm_new_d: state.cm_new_d.coordinates().map(|c| c.to_be_bytes()),
            cm_v_d: state.cm_v_d.coordinates().map(|c| c.to_be_bytes()),
        }));
    Ok(())
}
