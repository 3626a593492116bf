//! Exchange instruction.

use aegis_primitives::{AccumulatorHasher, FieldElement, ProofSystem};
use tracing::debug;

use super::types::ExchangeArgs;
use super::{LedgerInstruction, public_inputs, tree_updates, validators};
use crate::CbdcLedger;
use crate::errors::LedgerError;
use crate::state::DestinationAccountState;
use crate::verifier;

const INSTRUCTION: LedgerInstruction = LedgerInstruction::Exchange;

/// Process an exchange instruction.
///
/// Spends the account note, appends the updated account commitment and
/// overwrites the destination's `(cm_new_d, cm_v_d)`.
///
/// # Checks
/// 1. `rt` is a known root
/// 2. `sn_cur` is unspent
/// 3. `addr_d` was registered
/// 4. Tree has room for one commitment
/// 5. Proof verifies against
///    `rt, ck, addr_d, sn_cur, cm_new, cm_new_d, cm_v_d, ct_bar, apk, ct_bar_key`
///
/// # Errors
/// `UnknownRoot`, `NullifierAlreadySpent`, `UnknownDestination`,
/// `TreeFull`, `MalformedInput`, `ProofVerificationFailed`.
pub fn process_exchange<P: ProofSystem, H: AccumulatorHasher>(
    ledger: &mut CbdcLedger<P, H>,
    args: &ExchangeArgs,
) -> Result<FieldElement, LedgerError> {
    validators::require_known_root(ledger, INSTRUCTION, &args.rt)?;
    validators::require_unspent(ledger, INSTRUCTION, &[args.sn_cur])?;
    validators::require_registered_destination(ledger, &args.addr_d)?;
    validators::require_capacity(ledger, INSTRUCTION, 1)?;

    let vk = &ledger.keys.exchange;
    let inputs = public_inputs::exchange(
        args,
        &ledger.auditor_public_key,
        &ledger.commitment_key,
        vk.nr_pubinputs(),
    )?;
    verifier::require_valid_proof(&ledger.proof_system, INSTRUCTION, vk, &args.proof, &inputs)?;

    let root = tree_updates::append_commitments(ledger, &[args.cm_new])?;
    tree_updates::spend_nullifiers(ledger, &[args.sn_cur])?;
    tree_updates::update_destination(
        ledger,
        &args.addr_d,
        DestinationAccountState {
            cm_new_d: args.cm_new_d,
            cm_v_d: args.cm_v_d,
        },
    )?;

    debug!(addr_d = %args.addr_d, sn_cur = %args.sn_cur, root = %root, "exchange executed");
    Ok(root)
}
