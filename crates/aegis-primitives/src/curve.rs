//! Curve points in their EVM precompile layout.
//!
//! | Type | Curve | Coordinates | Layout |
//! |------|-------|-------------|--------|
//! | [`G1Point`] | BN254 G1 | Fq | `x ‖ y`, `(0, 0)` is infinity |
//! | [`G2Point`] | BN254 G2 | Fq2 | `x_im ‖ x_re ‖ y_im ‖ y_re` (EIP-197) |
//! | [`CurvePoint`] | embedded curve over Fr | Fr | `x ‖ y` |
//!
//! Decoding into arkworks points always checks range and curve membership,
//! so a malformed point surfaces as a [`PrimitiveError`] instead of a panic.

use ark_bn254::{Fq, Fq2, G1Affine, G2Affine};
use ark_ec::{AffineRepr, CurveGroup};
use ark_ff::{BigInteger, PrimeField};
use bytemuck::{Pod, Zeroable};
use serde::{Deserialize, Serialize};

use crate::error::PrimitiveError;
use crate::field::{FieldElement, WORD_SIZE, Word, is_less_than_bn254_base_field_size_be};

fn fq_from_word(word: &Word) -> Result<Fq, PrimitiveError> {
    if !is_less_than_bn254_base_field_size_be(&word.0) {
        return Err(PrimitiveError::NotInBaseField);
    }
    Ok(Fq::from_be_bytes_mod_order(&word.0))
}

fn word_from_fq(value: &Fq) -> Word {
    let bytes = value.into_bigint().to_bytes_be();
    let mut out = [0u8; WORD_SIZE];
    out[WORD_SIZE - bytes.len()..].copy_from_slice(&bytes);
    Word(out)
}

/// Negates a y-coordinate in Fq. Zero maps to itself, so infinity is preserved.
fn negate_y(y: &Word) -> Result<Word, PrimitiveError> {
    Ok(word_from_fq(&-fq_from_word(y)?))
}

/// BN254 G1 affine point, 64 bytes.
#[repr(C)]
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Pod, Zeroable, Serialize, Deserialize)]
#[serde(from = "[Word; 2]", into = "[Word; 2]")]
pub struct G1Point {
    /// x coordinate.
    pub x: Word,
    /// y coordinate.
    pub y: Word,
}

impl G1Point {
    /// Point at infinity, encoded as `(0, 0)`.
    pub const INFINITY: Self = Self {
        x: Word::ZERO,
        y: Word::ZERO,
    };

    /// Creates a point from raw coordinates without validating it.
    pub const fn new(x: Word, y: Word) -> Self {
        Self { x, y }
    }

    /// Returns true for the `(0, 0)` encoding of infinity.
    pub fn is_infinity(&self) -> bool {
        self.x.is_zero() && self.y.is_zero()
    }

    /// Decodes into an arkworks point.
    ///
    /// # Errors
    /// [`PrimitiveError::NotInBaseField`] or [`PrimitiveError::NotOnCurve`].
    pub fn to_affine(&self) -> Result<G1Affine, PrimitiveError> {
        if self.is_infinity() {
            return Ok(G1Affine::identity());
        }
        let point = G1Affine::new_unchecked(fq_from_word(&self.x)?, fq_from_word(&self.y)?);
        // G1 has cofactor 1, so being on the curve implies subgroup membership.
        if !point.is_on_curve() {
            return Err(PrimitiveError::NotOnCurve);
        }
        Ok(point)
    }

    /// Encodes an arkworks point.
    pub fn from_affine(point: &G1Affine) -> Self {
        if point.infinity {
            return Self::INFINITY;
        }
        Self {
            x: word_from_fq(&point.x),
            y: word_from_fq(&point.y),
        }
    }

    /// Additive inverse `(x, p - y)`. Infinity maps to itself.
    ///
    /// # Errors
    ///
    /// [`PrimitiveError::NotInBaseField`] when `y` is not below the base
    /// field modulus.
    pub fn negate(&self) -> Result<Self, PrimitiveError> {
        Ok(Self {
            x: self.x,
            y: negate_y(&self.y)?,
        })
    }

    /// Precompile byte layout `x ‖ y`.
    pub fn to_bytes(&self) -> [u8; 64] {
        bytemuck::cast(*self)
    }

    /// Reads the precompile byte layout without validating the point.
    pub fn from_bytes(bytes: &[u8; 64]) -> Self {
        bytemuck::cast(*bytes)
    }

    /// Coordinates as words.
    pub fn to_words(&self) -> [Word; 2] {
        [self.x, self.y]
    }
}

impl From<[Word; 2]> for G1Point {
    fn from([x, y]: [Word; 2]) -> Self {
        Self { x, y }
    }
}

impl From<G1Point> for [Word; 2] {
    fn from(point: G1Point) -> Self {
        point.to_words()
    }
}

/// BN254 G2 affine point, 128 bytes, EIP-197 word order.
#[repr(C)]
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Pod, Zeroable, Serialize, Deserialize)]
#[serde(from = "[Word; 4]", into = "[Word; 4]")]
pub struct G2Point {
    /// `[x_im, x_re]`.
    pub x: [Word; 2],
    /// `[y_im, y_re]`.
    pub y: [Word; 2],
}

impl G2Point {
    /// Returns true for the all-zero encoding of infinity.
    pub fn is_infinity(&self) -> bool {
        self.x.iter().chain(self.y.iter()).all(Word::is_zero)
    }

    /// Decodes into an arkworks point, including the subgroup check.
    ///
    /// # Errors
    /// [`PrimitiveError::NotInBaseField`], [`PrimitiveError::NotOnCurve`] or
    /// [`PrimitiveError::NotInSubgroup`].
    pub fn to_affine(&self) -> Result<G2Affine, PrimitiveError> {
        if self.is_infinity() {
            return Ok(G2Affine::identity());
        }
        let x = Fq2::new(fq_from_word(&self.x[1])?, fq_from_word(&self.x[0])?);
        let y = Fq2::new(fq_from_word(&self.y[1])?, fq_from_word(&self.y[0])?);
        let point = G2Affine::new_unchecked(x, y);
        if !point.is_on_curve() {
            return Err(PrimitiveError::NotOnCurve);
        }
        if !point.is_in_correct_subgroup_assuming_on_curve() {
            return Err(PrimitiveError::NotInSubgroup);
        }
        Ok(point)
    }

    /// Encodes an arkworks point.
    pub fn from_affine(point: &G2Affine) -> Self {
        if point.infinity {
            return Self::default();
        }
        Self {
            x: [word_from_fq(&point.x.c1), word_from_fq(&point.x.c0)],
            y: [word_from_fq(&point.y.c1), word_from_fq(&point.y.c0)],
        }
    }

    /// Coordinates as words, in EIP-197 order.
    pub fn to_words(&self) -> [Word; 4] {
        [self.x[0], self.x[1], self.y[0], self.y[1]]
    }
}

impl From<[Word; 4]> for G2Point {
    fn from([x_im, x_re, y_im, y_re]: [Word; 4]) -> Self {
        Self {
            x: [x_im, x_re],
            y: [y_im, y_re],
        }
    }
}

impl From<G2Point> for [Word; 4] {
    fn from(point: G2Point) -> Self {
        point.to_words()
    }
}

/// Point on the circuit's embedded curve, whose coordinates live in the
/// BN254 scalar field.
///
/// The ledger never does arithmetic on these; they only occupy public-input
/// slots (auditor key, commitment key, destination commitments).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "[FieldElement; 2]", into = "[FieldElement; 2]")]
pub struct CurvePoint {
    /// x coordinate.
    pub x: FieldElement,
    /// y coordinate.
    pub y: FieldElement,
}

impl CurvePoint {
    /// Creates a point from its coordinates.
    pub const fn new(x: FieldElement, y: FieldElement) -> Self {
        Self { x, y }
    }

    /// `[x, y]`, the order in which the point occupies public inputs.
    pub fn coordinates(&self) -> [FieldElement; 2] {
        [self.x, self.y]
    }
}

impl From<[FieldElement; 2]> for CurvePoint {
    fn from([x, y]: [FieldElement; 2]) -> Self {
        Self { x, y }
    }
}

impl From<CurvePoint> for [FieldElement; 2] {
    fn from(point: CurvePoint) -> Self {
        point.coordinates()
    }
}

/// BN254 G1 point addition, including the identity and doubling cases.
///
/// # Errors
/// Fails if either operand is not a valid G1 point.
pub fn elliptic_add(p: &G1Point, q: &G1Point) -> Result<G1Point, PrimitiveError> {
    let sum = p.to_affine()?.into_group() + q.to_affine()?;
    Ok(G1Point::from_affine(&sum.into_affine()))
}
