//! Settlement errors.
//!
//! Every error aborts the call with no account modified.

use aegis_primitives::PrimitiveError;
use num_enum::IntoPrimitive;
use thiserror::Error;

/// Settlement error codes.
#[repr(u32)]
#[derive(Clone, Copy, Debug, PartialEq, Eq, IntoPrimitive, Error)]
pub enum SettlementError {
    /// Aggregate proof rejected
    #[error("aggregate proof verification failed")]
    ProofVerificationFailed = 0,
    /// A slot's signature does not recover to its contract address
    #[error("signature does not match the slot's contract address")]
    UnauthorizedSigner = 1,
    /// Batch shape or a point is invalid
    #[error("malformed batch input")]
    MalformedInput = 2,
    /// Caller is not the settlement authority
    #[error("caller is not the settlement authority")]
    Unauthorized = 3,
    /// Construction parameters are inconsistent
    #[error("invalid settlement configuration")]
    InvalidConfig = 4,
}

impl From<PrimitiveError> for SettlementError {
    fn from(_: PrimitiveError) -> Self {
        SettlementError::MalformedInput
    }
}
