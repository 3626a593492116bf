//! Proof verifier adapter.
//!
//! Binds an instruction's assembled public-input vector to the pairing
//! check and fails closed: every [`aegis_primitives::Groth16Error`]
//! (malformed point, wrong arity, failed pairing) becomes
//! [`LedgerError::ProofVerificationFailed`].

use aegis_primitives::{FieldElement, Proof, ProofSystem, VerifyingKey};
use tracing::warn;

use crate::errors::LedgerError;
use crate::instructions::LedgerInstruction;

/// Returns true iff `proof` verifies against `vk` and `public_inputs`.
pub fn verify<P: ProofSystem>(
    proof_system: &P,
    vk: &VerifyingKey,
    proof: &Proof,
    public_inputs: &[FieldElement],
) -> bool {
    proof_system.verify(vk, proof, public_inputs).is_ok()
}

/// Verifies the proof of `instruction`, logging the cause on rejection.
///
/// # Errors
/// [`LedgerError::ProofVerificationFailed`].
#[inline(never)]
pub fn require_valid_proof<P: ProofSystem>(
    proof_system: &P,
    instruction: LedgerInstruction,
    vk: &VerifyingKey,
    proof: &Proof,
    public_inputs: &[FieldElement],
) -> Result<(), LedgerError> {
    proof_system
        .verify(vk, proof, public_inputs)
        .map_err(|e| {
            warn!(
                instruction = <&'static str>::from(instruction),
                inputs = public_inputs.len(),
                code = u32::from(e),
                error = %e,
                "proof rejected"
            );
            LedgerError::ProofVerificationFailed
        })
}
