//! Errors raised while decoding or combining primitive values.

use num_enum::IntoPrimitive;
use thiserror::Error;

/// Decoding and arithmetic failures for words, field elements and points.
///
/// Error codes start at 200 so they never collide with the program error
/// ranges of the ledger and settlement engines.
#[repr(u32)]
#[derive(Clone, Copy, Debug, PartialEq, Eq, IntoPrimitive, Error)]
pub enum PrimitiveError {
    /// A literal does not fit in 256 bits.
    #[error("value does not fit in a 256-bit word")]
    WordOverflow = 200,

    /// A literal is neither decimal nor `0x`-prefixed hex.
    #[error("malformed word literal")]
    InvalidWordLiteral = 201,

    /// Value is not strictly below the BN254 scalar modulus r.
    #[error("value is not in the BN254 scalar field")]
    NotInScalarField = 202,

    /// Coordinate is not strictly below the BN254 base modulus p.
    #[error("coordinate is not in the BN254 base field")]
    NotInBaseField = 203,

    /// Coordinates do not satisfy the curve equation.
    #[error("point is not on the curve")]
    NotOnCurve = 204,

    /// G2 point lies outside the prime-order subgroup.
    #[error("point is not in the prime-order subgroup")]
    NotInSubgroup = 205,

    /// The accumulator hash rejected its inputs.
    #[error("hash primitive failed")]
    HashFailed = 206,
}
