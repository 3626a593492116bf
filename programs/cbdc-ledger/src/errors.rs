//! Error types for the confidential ledger.
//!
//! # Error Code Reference
//!
//! | Code | Error | Raised by |
//! |------|-------|-----------|
//! | 0 | ProofVerificationFailed | every proof-gated operation |
//! | 1 | UnknownRoot | send, receive, exchange |
//! | 2 | NullifierAlreadySpent | send, receive, exchange |
//! | 3 | TreeFull | every operation that appends commitments |
//! | 4 | MalformedInput | layout and encoding checks |
//! | 5 | Unauthorized | insert_cm, register_destination |
//! | 6 | UnknownDestination | exchange |
//! | 7 | InvalidConfig | construction |
//! | 8 | HashFailed | accumulator hashing |
//!
//! Every error aborts the whole operation and leaves the ledger unchanged.

use aegis_primitives::PrimitiveError;
use num_enum::IntoPrimitive;
use thiserror::Error;

/// Confidential ledger errors.
#[repr(u32)]
#[derive(Clone, Copy, Debug, PartialEq, Eq, IntoPrimitive, Error)]
pub enum LedgerError {
    /// The proof did not verify against the operation's key and inputs.
    #[error("proof verification failed")]
    ProofVerificationFailed = 0,

    /// The referenced root was never produced by the accumulator.
    #[error("unknown merkle root")]
    UnknownRoot = 1,

    /// A nullifier in the operation is already spent.
    #[error("nullifier already spent")]
    NullifierAlreadySpent = 2,

    /// The accumulator has no room for the new commitments.
    #[error("commitment tree is full")]
    TreeFull = 3,

    /// Arguments do not fit the operation layout.
    #[error("input does not match the operation layout")]
    MalformedInput = 4,

    /// Caller is not the ledger authority.
    #[error("caller is not the ledger authority")]
    Unauthorized = 5,

    /// Exchange targets an address that was never registered.
    #[error("destination address is not registered")]
    UnknownDestination = 6,

    /// Construction parameters are inconsistent.
    #[error("invalid ledger configuration")]
    InvalidConfig = 7,

    /// The accumulator hash rejected its inputs.
    #[error("accumulator hash failed")]
    HashFailed = 8,
}

impl From<PrimitiveError> for LedgerError {
    fn from(e: PrimitiveError) -> Self {
        match e {
            PrimitiveError::HashFailed => LedgerError::HashFailed,
            _ => LedgerError::MalformedInput,
        }
    }
}
