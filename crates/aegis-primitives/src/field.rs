//! 256-bit words and BN254 scalar field elements.
//!
//! [`Word`] is the raw unit of the flat encodings (EVM `uint256`). It is
//! only ever narrowed into a [`FieldElement`] by an explicit, checked
//! conversion: out-of-range values are rejected, never reduced. The one
//! place where reduction is intended is [`hash_to_field`].

use core::fmt;
use core::str::FromStr;

use ark_bn254::Fr;
use ark_ff::{BigInteger, PrimeField};
use bytemuck::{Pod, Zeroable};
use num_bigint::BigUint;
use serde::de::{self, Visitor};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::PrimitiveError;

/// Size of a word in bytes.
pub const WORD_SIZE: usize = 32;

/// Raw 256-bit big-endian word.
#[repr(transparent)]
#[derive(Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Pod, Zeroable)]
pub struct Word(pub [u8; WORD_SIZE]);

impl Word {
    /// The zero word.
    pub const ZERO: Self = Self([0u8; WORD_SIZE]);

    /// Word holding a small integer.
    pub fn from_u64(value: u64) -> Self {
        let mut bytes = [0u8; WORD_SIZE];
        bytes[24..].copy_from_slice(&value.to_be_bytes());
        Self(bytes)
    }

    /// Big-endian bytes.
    pub fn as_bytes(&self) -> &[u8; WORD_SIZE] {
        &self.0
    }

    /// Returns true if every byte is zero.
    pub fn is_zero(&self) -> bool {
        self.0 == [0u8; WORD_SIZE]
    }

    /// Unsigned integer value of the word.
    pub fn to_biguint(&self) -> BigUint {
        BigUint::from_bytes_be(&self.0)
    }

    /// Converts an integer into a word.
    ///
    /// # Errors
    /// [`PrimitiveError::WordOverflow`] if the value needs more than 256 bits.
    pub fn from_biguint(value: &BigUint) -> Result<Self, PrimitiveError> {
        let bytes = value.to_bytes_be();
        if bytes.len() > WORD_SIZE {
            return Err(PrimitiveError::WordOverflow);
        }
        let mut out = [0u8; WORD_SIZE];
        out[WORD_SIZE - bytes.len()..].copy_from_slice(&bytes);
        Ok(Self(out))
    }

    /// Decimal representation.
    pub fn to_decimal_string(&self) -> String {
        self.to_biguint().to_str_radix(10)
    }
}

impl FromStr for Word {
    type Err = PrimitiveError;

    /// Parses a decimal literal or a `0x`-prefixed hex literal.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let parsed = match s.strip_prefix("0x").or_else(|| s.strip_prefix("0X")) {
            Some(hex_digits) => BigUint::parse_bytes(hex_digits.as_bytes(), 16),
            None => BigUint::parse_bytes(s.as_bytes(), 10),
        };
        let value = parsed.ok_or(PrimitiveError::InvalidWordLiteral)?;
        Self::from_biguint(&value)
    }
}

impl fmt::Debug for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "0x{}", hex::encode(self.0))
    }
}

impl fmt::Display for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "0x{}", hex::encode(self.0))
    }
}

impl From<[u8; WORD_SIZE]> for Word {
    fn from(bytes: [u8; WORD_SIZE]) -> Self {
        Self(bytes)
    }
}

impl Serialize for Word {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_decimal_string())
    }
}

struct WordVisitor;

impl Visitor<'_> for WordVisitor {
    type Value = Word;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a decimal or 0x-prefixed hex string, or an unsigned integer")
    }

    fn visit_str<E: de::Error>(self, v: &str) -> Result<Word, E> {
        v.parse().map_err(E::custom)
    }

    fn visit_u64<E: de::Error>(self, v: u64) -> Result<Word, E> {
        Ok(Word::from_u64(v))
    }
}

impl<'de> Deserialize<'de> for Word {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_any(WordVisitor)
    }
}

/// Returns true if the big-endian value is strictly below the BN254 scalar
/// modulus r.
pub fn is_less_than_bn254_field_size_be(bytes: &[u8; WORD_SIZE]) -> bool {
    let bigint = BigUint::from_bytes_be(bytes);
    bigint < Fr::MODULUS.into()
}

/// Returns true if the big-endian value is strictly below the BN254 base
/// modulus p.
pub fn is_less_than_bn254_base_field_size_be(bytes: &[u8; WORD_SIZE]) -> bool {
    let bigint = BigUint::from_bytes_be(bytes);
    bigint < ark_bn254::Fq::MODULUS.into()
}

/// Element of the BN254 scalar field, stored as a canonical big-endian word.
///
/// Commitments, nullifiers, roots and every public input are field
/// elements. Equality is exact.
#[derive(Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct FieldElement(Word);

impl FieldElement {
    /// Additive identity.
    pub const ZERO: Self = Self(Word::ZERO);

    /// Field element holding a small integer.
    pub fn from_u64(value: u64) -> Self {
        Self(Word::from_u64(value))
    }

    /// Checked conversion from big-endian bytes.
    ///
    /// # Errors
    /// [`PrimitiveError::NotInScalarField`] if the value is not below r.
    pub fn from_be_bytes(bytes: [u8; WORD_SIZE]) -> Result<Self, PrimitiveError> {
        if !is_less_than_bn254_field_size_be(&bytes) {
            return Err(PrimitiveError::NotInScalarField);
        }
        Ok(Self(Word(bytes)))
    }

    /// Canonical big-endian bytes.
    pub fn to_be_bytes(&self) -> [u8; WORD_SIZE] {
        self.0.0
    }

    /// Borrowed big-endian bytes.
    pub fn as_slice(&self) -> &[u8] {
        &self.0.0
    }

    /// The underlying word.
    pub fn as_word(&self) -> &Word {
        &self.0
    }

    /// Returns true for the additive identity.
    pub fn is_zero(&self) -> bool {
        self.0.is_zero()
    }

    /// Arkworks representation.
    pub fn to_fr(&self) -> Fr {
        // Canonical by construction, so this never reduces.
        Fr::from_be_bytes_mod_order(&self.0.0)
    }

    /// Converts from the arkworks representation.
    pub fn from_fr(value: &Fr) -> Self {
        let bytes = value.into_bigint().to_bytes_be();
        let mut out = [0u8; WORD_SIZE];
        out[WORD_SIZE - bytes.len()..].copy_from_slice(&bytes);
        Self(Word(out))
    }
}

impl TryFrom<Word> for FieldElement {
    type Error = PrimitiveError;

    fn try_from(word: Word) -> Result<Self, Self::Error> {
        Self::from_be_bytes(word.0)
    }
}

impl From<FieldElement> for Word {
    fn from(value: FieldElement) -> Self {
        value.0
    }
}

impl FromStr for FieldElement {
    type Err = PrimitiveError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::try_from(s.parse::<Word>()?)
    }
}

impl fmt::Debug for FieldElement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(&self.0, f)
    }
}

impl fmt::Display for FieldElement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

impl Serialize for FieldElement {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.0.serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for FieldElement {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let word = Word::deserialize(deserializer)?;
        Self::try_from(word).map_err(de::Error::custom)
    }
}

/// Reduces 32 arbitrary bytes modulo r.
///
/// Only for deriving challenges from digests. Caller-provided values go
/// through [`FieldElement::from_be_bytes`] instead.
pub fn hash_to_field(digest: &[u8; WORD_SIZE]) -> FieldElement {
    FieldElement::from_fr(&Fr::from_be_bytes_mod_order(digest))
}
