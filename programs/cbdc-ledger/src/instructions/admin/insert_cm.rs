use aegis_primitives::{AccumulatorHasher, FieldElement, ProofSystem};
use ethers_core::types::Address;
use tracing::info;

use crate::CbdcLedger;
use crate::errors::LedgerError;
use crate::instructions::{LedgerInstruction, tree_updates, validators};

const INSTRUCTION: LedgerInstruction = LedgerInstruction::InsertCm;

/// Append a commitment without a proof.
///
/// Used by the authority to seed the tree (for example with notes minted
/// off-ledger). Returns the new root.
///
/// # Errors
/// `Unauthorized` if `caller` is not the authority, `TreeFull`.
pub fn process_insert_cm<P: ProofSystem, H: AccumulatorHasher>(
    ledger: &mut CbdcLedger<P, H>,
    caller: &Address,
    cm: FieldElement,
) -> Result<FieldElement, LedgerError> {
    validators::require_authority(ledger, INSTRUCTION, caller)?;
    validators::require_capacity(ledger, INSTRUCTION, 1)?;

    let root = tree_updates::append_commitments(ledger, &[cm])?;
    info!(cm = %cm, root = %root, "commitment inserted by authority");
    Ok(root)
}
