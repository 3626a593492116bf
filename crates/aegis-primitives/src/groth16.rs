//! Groth16 verifying keys, proofs and the pairing-check boundary.
//!
//! Verifying keys carry their G2 elements pre-negated, so a proof verifies
//! iff
//!
//! ```text
//! e(A, B) · e(α, −β) · e(vk_x, −γ) · e(C, −δ) = 1
//! vk_x = gamma_abc[0] + Σ inputs[i] · gamma_abc[i + 1]
//! ```
//!
//! ## Flat encodings
//!
//! | Object | Words |
//! |--------|-------|
//! | VerifyingKey | `alpha_g1(2) ‖ beta_g2_neg(4) ‖ gamma_g2_neg(4) ‖ delta_g2_neg(4) ‖ gamma_abc_g1(2·(k+1))` |
//! | Proof | `a(2) ‖ b(4) ‖ c(2)` |

use ark_bn254::{Bn254, G1Affine};
use ark_ec::pairing::Pairing;
use ark_ec::{AffineRepr, CurveGroup};
use ark_ff::One;
use num_enum::IntoPrimitive;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::curve::{G1Point, G2Point};
use crate::field::{FieldElement, Word};

/// Groth16 decoding and verification failures.
#[repr(u32)]
#[derive(Clone, Copy, Debug, PartialEq, Eq, IntoPrimitive, Error)]
pub enum Groth16Error {
    /// Flat verifying key has the wrong number of words.
    #[error("verifying key has an invalid length")]
    InvalidVerifyingKeyLength = 100,

    /// Flat proof is not exactly eight words.
    #[error("proof has an invalid length")]
    InvalidProofLength = 101,

    /// Public input count does not match the verifying key.
    #[error("public input count does not match the verifying key")]
    InvalidPublicInputsLength = 102,

    /// A public input word is not below r.
    #[error("public input is not in the scalar field")]
    PublicInputGreaterThanFieldSize = 103,

    /// Pairing product is not the identity.
    #[error("proof verification failed")]
    ProofVerificationFailed = 104,

    /// A G1 element is malformed.
    #[error("invalid G1 point")]
    InvalidG1 = 105,

    /// A G2 element is malformed.
    #[error("invalid G2 point")]
    InvalidG2 = 106,
}

/// Groth16 verifying key with negated G2 elements.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawVerifyingKey", into = "RawVerifyingKey")]
pub struct VerifyingKey {
    /// α in G1.
    pub alpha_g1: G1Point,
    /// −β in G2.
    pub beta_g2_neg: G2Point,
    /// −γ in G2.
    pub gamma_g2_neg: G2Point,
    /// −δ in G2.
    pub delta_g2_neg: G2Point,
    /// Input commitment bases, one more than the number of public inputs.
    pub gamma_abc_g1: Vec<G1Point>,
}

impl VerifyingKey {
    /// Words before `gamma_abc_g1` in the flat encoding.
    pub const FIXED_WORDS: usize = 2 + 3 * 4;

    /// Number of public inputs the key accepts.
    pub fn nr_pubinputs(&self) -> usize {
        self.gamma_abc_g1.len().saturating_sub(1)
    }

    /// Decodes the flat word encoding.
    ///
    /// # Errors
    /// [`Groth16Error::InvalidVerifyingKeyLength`] unless the word count is
    /// `14 + 2·(k+1)` for some k ≥ 0.
    pub fn from_flat(words: &[Word]) -> Result<Self, Groth16Error> {
        let Some(abc_words) = words.len().checked_sub(Self::FIXED_WORDS) else {
            return Err(Groth16Error::InvalidVerifyingKeyLength);
        };
        if abc_words < 2 || abc_words % 2 != 0 {
            return Err(Groth16Error::InvalidVerifyingKeyLength);
        }

        let g1 = |w: &[Word]| G1Point::new(w[0], w[1]);
        let g2 = |w: &[Word]| G2Point::from([w[0], w[1], w[2], w[3]]);

        Ok(Self {
            alpha_g1: g1(&words[0..2]),
            beta_g2_neg: g2(&words[2..6]),
            gamma_g2_neg: g2(&words[6..10]),
            delta_g2_neg: g2(&words[10..14]),
            gamma_abc_g1: words[Self::FIXED_WORDS..].chunks_exact(2).map(g1).collect(),
        })
    }

    /// Flat word encoding.
    pub fn to_flat(&self) -> Vec<Word> {
        let mut words = Vec::with_capacity(Self::FIXED_WORDS + 2 * self.gamma_abc_g1.len());
        words.extend(self.alpha_g1.to_words());
        words.extend(self.beta_g2_neg.to_words());
        words.extend(self.gamma_g2_neg.to_words());
        words.extend(self.delta_g2_neg.to_words());
        for point in &self.gamma_abc_g1 {
            words.extend(point.to_words());
        }
        words
    }
}

/// JSON layout of a verifying key: one array of words per element.
#[derive(Clone, Debug, Serialize, Deserialize)]
struct RawVerifyingKey {
    alpha_g1: Vec<Word>,
    beta_g2_neg: Vec<Word>,
    gamma_g2_neg: Vec<Word>,
    delta_g2_neg: Vec<Word>,
    gamma_abc_g1: Vec<Word>,
}

impl TryFrom<RawVerifyingKey> for VerifyingKey {
    type Error = Groth16Error;

    fn try_from(raw: RawVerifyingKey) -> Result<Self, Self::Error> {
        if raw.alpha_g1.len() != 2
            || raw.beta_g2_neg.len() != 4
            || raw.gamma_g2_neg.len() != 4
            || raw.delta_g2_neg.len() != 4
        {
            return Err(Groth16Error::InvalidVerifyingKeyLength);
        }
        let mut flat = raw.alpha_g1;
        flat.extend(raw.beta_g2_neg);
        flat.extend(raw.gamma_g2_neg);
        flat.extend(raw.delta_g2_neg);
        flat.extend(raw.gamma_abc_g1);
        Self::from_flat(&flat)
    }
}

impl From<VerifyingKey> for RawVerifyingKey {
    fn from(vk: VerifyingKey) -> Self {
        Self {
            alpha_g1: vk.alpha_g1.to_words().to_vec(),
            beta_g2_neg: vk.beta_g2_neg.to_words().to_vec(),
            gamma_g2_neg: vk.gamma_g2_neg.to_words().to_vec(),
            delta_g2_neg: vk.delta_g2_neg.to_words().to_vec(),
            gamma_abc_g1: vk.gamma_abc_g1.iter().flat_map(G1Point::to_words).collect(),
        }
    }
}

/// Groth16 proof `(A, B, C)`.
#[repr(C)]
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "RawProof", into = "RawProof")]
pub struct Proof {
    /// A in G1.
    pub a: G1Point,
    /// B in G2.
    pub b: G2Point,
    /// C in G1.
    pub c: G1Point,
}

impl Proof {
    /// Words in the flat encoding.
    pub const FLAT_WORDS: usize = 8;

    /// Decodes the flat word encoding.
    ///
    /// # Errors
    /// [`Groth16Error::InvalidProofLength`] unless exactly eight words.
    pub fn from_flat(words: &[Word]) -> Result<Self, Groth16Error> {
        let words: &[Word; Self::FLAT_WORDS] = words
            .try_into()
            .map_err(|_| Groth16Error::InvalidProofLength)?;
        Ok(Self {
            a: G1Point::new(words[0], words[1]),
            b: G2Point::from([words[2], words[3], words[4], words[5]]),
            c: G1Point::new(words[6], words[7]),
        })
    }

    /// Flat word encoding.
    pub fn to_flat(&self) -> [Word; Self::FLAT_WORDS] {
        let [a0, a1] = self.a.to_words();
        let [b0, b1, b2, b3] = self.b.to_words();
        let [c0, c1] = self.c.to_words();
        [a0, a1, b0, b1, b2, b3, c0, c1]
    }
}

#[derive(Clone, Debug, Serialize, Deserialize)]
struct RawProof {
    a: Vec<Word>,
    b: Vec<Word>,
    c: Vec<Word>,
}

impl TryFrom<RawProof> for Proof {
    type Error = Groth16Error;

    fn try_from(raw: RawProof) -> Result<Self, Self::Error> {
        if raw.a.len() != 2 || raw.b.len() != 4 || raw.c.len() != 2 {
            return Err(Groth16Error::InvalidProofLength);
        }
        let mut flat = raw.a;
        flat.extend(raw.b);
        flat.extend(raw.c);
        Self::from_flat(&flat)
    }
}

impl From<Proof> for RawProof {
    fn from(proof: Proof) -> Self {
        Self {
            a: proof.a.to_words().to_vec(),
            b: proof.b.to_words().to_vec(),
            c: proof.c.to_words().to_vec(),
        }
    }
}

/// Opaque pairing-check primitive.
///
/// Implementations must fail closed: every malformed key, proof or input
/// vector is an `Err`, never a panic.
pub trait ProofSystem {
    /// Verifies `proof` against `vk` and the ordered `public_inputs`.
    ///
    /// # Errors
    /// Any [`Groth16Error`]; callers treat all of them as a rejected proof.
    fn verify(
        &self,
        vk: &VerifyingKey,
        proof: &Proof,
        public_inputs: &[FieldElement],
    ) -> Result<(), Groth16Error>;
}

impl<T: ProofSystem + ?Sized> ProofSystem for &T {
    fn verify(
        &self,
        vk: &VerifyingKey,
        proof: &Proof,
        public_inputs: &[FieldElement],
    ) -> Result<(), Groth16Error> {
        (**self).verify(vk, proof, public_inputs)
    }
}

/// Groth16 verification over BN254 with arkworks pairings.
#[derive(Clone, Copy, Debug, Default)]
pub struct Bn254Groth16;

impl Bn254Groth16 {
    /// Computes `vk_x = gamma_abc[0] + Σ inputs[i] · gamma_abc[i + 1]`.
    fn prepare_inputs(
        vk: &VerifyingKey,
        public_inputs: &[FieldElement],
    ) -> Result<G1Affine, Groth16Error> {
        let (first, bases) = vk
            .gamma_abc_g1
            .split_first()
            .ok_or(Groth16Error::InvalidVerifyingKeyLength)?;

        let mut prepared = first
            .to_affine()
            .map_err(|_| Groth16Error::InvalidG1)?
            .into_group();
        for (input, base) in public_inputs.iter().zip(bases) {
            let base = base.to_affine().map_err(|_| Groth16Error::InvalidG1)?;
            prepared += base * input.to_fr();
        }
        Ok(prepared.into_affine())
    }
}

impl ProofSystem for Bn254Groth16 {
    fn verify(
        &self,
        vk: &VerifyingKey,
        proof: &Proof,
        public_inputs: &[FieldElement],
    ) -> Result<(), Groth16Error> {
        if public_inputs.len() + 1 != vk.gamma_abc_g1.len() {
            return Err(Groth16Error::InvalidPublicInputsLength);
        }

        let prepared = Self::prepare_inputs(vk, public_inputs)?;

        let g1 = |p: &G1Point| p.to_affine().map_err(|_| Groth16Error::InvalidG1);
        let g2 = |p: &G2Point| p.to_affine().map_err(|_| Groth16Error::InvalidG2);

        let pairing = Bn254::multi_pairing(
            [g1(&proof.a)?, g1(&vk.alpha_g1)?, prepared, g1(&proof.c)?],
            [
                g2(&proof.b)?,
                g2(&vk.beta_g2_neg)?,
                g2(&vk.gamma_g2_neg)?,
                g2(&vk.delta_g2_neg)?,
            ],
        );

        if !pairing.0.is_one() {
            return Err(Groth16Error::ProofVerificationFailed);
        }
        Ok(())
    }
}
