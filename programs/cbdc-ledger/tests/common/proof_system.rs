//! Mock proof system.
//!
//! A proof is accepted iff `proof.a.x` equals `sha256(vk ‖ inputs)`, so a
//! test can only produce an accepted proof for the exact key and the exact
//! ordered input vector it committed to.

use aegis_primitives::{
    FieldElement, G1Point, Groth16Error, Proof, ProofSystem, VerifyingKey, Word,
};
use sha2::{Digest, Sha256};

#[derive(Clone, Copy, Debug, Default)]
pub struct MockProofSystem;

fn transcript(vk: &VerifyingKey, inputs: &[FieldElement]) -> Word {
    let mut hasher = Sha256::new();
    for word in vk.to_flat() {
        hasher.update(word.as_bytes());
    }
    hasher.update((inputs.len() as u64).to_be_bytes());
    for input in inputs {
        hasher.update(input.as_slice());
    }
    Word(hasher.finalize().into())
}

/// Produces the proof the mock accepts for `(vk, inputs)`.
pub fn prove(vk: &VerifyingKey, inputs: &[FieldElement]) -> Proof {
    Proof {
        a: G1Point::new(transcript(vk, inputs), Word::ZERO),
        ..Proof::default()
    }
}

impl ProofSystem for MockProofSystem {
    fn verify(
        &self,
        vk: &VerifyingKey,
        proof: &Proof,
        public_inputs: &[FieldElement],
    ) -> Result<(), Groth16Error> {
        if public_inputs.len() != vk.nr_pubinputs() {
            return Err(Groth16Error::InvalidPublicInputsLength);
        }
        if proof.a.x != transcript(vk, public_inputs) {
            return Err(Groth16Error::ProofVerificationFailed);
        }
        Ok(())
    }
}
