//! Two-to-one hash used by the commitment accumulator.

use light_hasher::{Hasher, Poseidon};
use tracing::warn;

use crate::error::PrimitiveError;
use crate::field::FieldElement;

/// Domain hash `hash(left, right) -> FieldElement` for Merkle nodes.
pub trait AccumulatorHasher {
    /// Hashes an ordered pair of children into their parent.
    ///
    /// # Errors
    /// [`PrimitiveError::HashFailed`] if the backend rejects the inputs.
    fn hash(&self, left: &FieldElement, right: &FieldElement)
    -> Result<FieldElement, PrimitiveError>;
}

/// BN254 Poseidon with circom parameters (t = 3), big-endian.
#[derive(Clone, Copy, Debug, Default)]
pub struct PoseidonHasher;

impl AccumulatorHasher for PoseidonHasher {
    fn hash(
        &self,
        left: &FieldElement,
        right: &FieldElement,
    ) -> Result<FieldElement, PrimitiveError> {
        let digest = Poseidon::hashv(&[left.as_slice(), right.as_slice()]).map_err(|e| {
            warn!(error = ?e, "poseidon hash error");
            PrimitiveError::HashFailed
        })?;
        FieldElement::from_be_bytes(digest)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use core::str::FromStr;

    #[test]
    fn test_poseidon_zero_pair_matches_circom() {
        // poseidon([0, 0]) from circomlib
        let expected = FieldElement::from_str(
            "14744269619966411208579211824598458697587494354926760081771325075741142829156",
        )
        .unwrap();
        let digest = PoseidonHasher
            .hash(&FieldElement::ZERO, &FieldElement::ZERO)
            .unwrap();
        assert_eq!(digest, expected);
    }

    #[test]
    fn test_poseidon_matches_light_zero_bytes() {
        let zero_bytes = Poseidon::zero_bytes();
        let mut current = FieldElement::ZERO;
        for level in zero_bytes.iter().take(8).skip(1) {
            current = PoseidonHasher.hash(&current, &current).unwrap();
            assert_eq!(current.to_be_bytes(), *level);
        }
    }

    #[test]
    fn test_poseidon_is_order_sensitive() {
        let (a, b) = (FieldElement::from_u64(1), FieldElement::from_u64(2));
        assert_ne!(
            PoseidonHasher.hash(&a, &b).unwrap(),
            PoseidonHasher.hash(&b, &a).unwrap()
        );
    }
}
