//! Register instruction.
//!
//! Appends a fresh account commitment. There is no nullifier and no root:
//! the register proof only ties `cm` to the auditor and key ciphertexts.

use aegis_primitives::{AccumulatorHasher, FieldElement, ProofSystem};
use tracing::debug;

use super::types::RegisterArgs;
use super::{LedgerInstruction, public_inputs, tree_updates, validators};
use crate::CbdcLedger;
use crate::errors::LedgerError;
use crate::verifier;

const INSTRUCTION: LedgerInstruction = LedgerInstruction::Register;

/// Process a register instruction.
///
/// # Checks
/// 1. Tree has room for one commitment
/// 2. `ct_bar` has 7 elements and `ct_key` fills the key's arity
/// 3. Proof verifies against `[cm] ++ ct_bar ++ apk ++ ct_key`
///
/// # Errors
/// `TreeFull`, `MalformedInput`, `ProofVerificationFailed`.
pub fn process_register<P: ProofSystem, H: AccumulatorHasher>(
    ledger: &mut CbdcLedger<P, H>,
    args: &RegisterArgs,
) -> Result<FieldElement, LedgerError> {
    validators::require_capacity(ledger, INSTRUCTION, 1)?;

    let vk = &ledger.keys.register;
    let inputs = public_inputs::register(args, &ledger.auditor_public_key, vk.nr_pubinputs())?;
    verifier::require_valid_proof(&ledger.proof_system, INSTRUCTION, vk, &args.proof, &inputs)?;

    let root = tree_updates::append_commitments(ledger, &[args.cm])?;
    debug!(cm = %args.cm, root = %root, "register executed");
    Ok(root)
}
