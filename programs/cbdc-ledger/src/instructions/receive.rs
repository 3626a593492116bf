//! Receive instruction.

use aegis_primitives::{AccumulatorHasher, FieldElement, ProofSystem};
use tracing::debug;

use super::types::ReceiveArgs;
use super::{LedgerInstruction, public_inputs, tree_updates, validators};
use crate::CbdcLedger;
use crate::errors::LedgerError;
use crate::verifier;

const INSTRUCTION: LedgerInstruction = LedgerInstruction::Receive;

/// Process a receive instruction.
///
/// Consumes a value note (`sn_v`) together with the current account note
/// (`sn_cur`) and appends the updated account commitment `cm_new`.
///
/// # Checks
/// 1. `rt` is a known root
/// 2. `sn_v` and `sn_cur` are unspent and distinct
/// 3. Tree has room for one commitment
/// 4. Proof verifies against `apk, sn_v, sn_cur, cm_new, rt, ct_key, ct`
///
/// # Errors
/// `UnknownRoot`, `NullifierAlreadySpent`, `TreeFull`, `MalformedInput`,
/// `ProofVerificationFailed`.
pub fn process_receive<P: ProofSystem, H: AccumulatorHasher>(
    ledger: &mut CbdcLedger<P, H>,
    args: &ReceiveArgs,
) -> Result<FieldElement, LedgerError> {
    let nullifiers = [args.sn_v, args.sn_cur];

    validators::require_known_root(ledger, INSTRUCTION, &args.rt)?;
    validators::require_unspent(ledger, INSTRUCTION, &nullifiers)?;
    validators::require_capacity(ledger, INSTRUCTION, 1)?;

    let vk = &ledger.keys.receive;
    let inputs = public_inputs::receive(args, &ledger.auditor_public_key, vk.nr_pubinputs())?;
    verifier::require_valid_proof(&ledger.proof_system, INSTRUCTION, vk, &args.proof, &inputs)?;

    let root = tree_updates::append_commitments(ledger, &[args.cm_new])?;
    tree_updates::spend_nullifiers(ledger, &nullifiers)?;

    debug!(sn_v = %args.sn_v, sn_cur = %args.sn_cur, root = %root, "receive executed");
    Ok(root)
}
