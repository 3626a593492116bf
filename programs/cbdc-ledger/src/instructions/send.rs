//! Send instruction.

use aegis_primitives::{AccumulatorHasher, FieldElement, ProofSystem};
use tracing::debug;

use super::types::SendArgs;
use super::{LedgerInstruction, public_inputs, tree_updates, validators};
use crate::CbdcLedger;
use crate::errors::LedgerError;
use crate::verifier;

const INSTRUCTION: LedgerInstruction = LedgerInstruction::Send;

/// Process a send instruction.
///
/// Spends the sender's account note (`sn_cur`), appends the updated account
/// commitment `cm_new` and the value note `cm_v` for the recipient.
///
/// # Checks
/// 1. `rt` is a known root
/// 2. `sn_cur` is unspent
/// 3. Tree has room for two commitments
/// 4. Proof verifies against
///    `sn_cur, cm_new, cm_v, rt, auth, apk, ct_bar, ct_key, ct`
///
/// # Errors
/// `UnknownRoot`, `NullifierAlreadySpent`, `TreeFull`, `MalformedInput`,
/// `ProofVerificationFailed`.
pub fn process_send<P: ProofSystem, H: AccumulatorHasher>(
    ledger: &mut CbdcLedger<P, H>,
    args: &SendArgs,
) -> Result<FieldElement, LedgerError> {
    validators::require_known_root(ledger, INSTRUCTION, &args.rt)?;
    validators::require_unspent(ledger, INSTRUCTION, &[args.sn_cur])?;
    validators::require_capacity(ledger, INSTRUCTION, 2)?;

    let vk = &ledger.keys.send;
    let inputs = public_inputs::send(args, &ledger.auditor_public_key, vk.nr_pubinputs())?;
    verifier::require_valid_proof(&ledger.proof_system, INSTRUCTION, vk, &args.proof, &inputs)?;

    let root = tree_updates::append_commitments(ledger, &[args.cm_new, args.cm_v])?;
    tree_updates::spend_nullifiers(ledger, &[args.sn_cur])?;

    debug!(sn_cur = %args.sn_cur, root = %root, "send executed");
    Ok(root)
}
