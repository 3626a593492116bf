//! Precondition checks shared by the instruction handlers.
//!
//! Each check is read-only; handlers run all of them before touching state.

use aegis_primitives::{AccumulatorHasher, FieldElement, ProofSystem};
use ethers_core::types::Address;
use tracing::warn;

use super::LedgerInstruction;
use crate::CbdcLedger;
use crate::errors::LedgerError;

/// Require `rt` to be a root the accumulator produced and still retains.
#[inline]
pub(crate) fn require_known_root<P: ProofSystem, H: AccumulatorHasher>(
    ledger: &CbdcLedger<P, H>,
    instruction: LedgerInstruction,
    rt: &FieldElement,
) -> Result<(), LedgerError> {
    if !ledger.accumulator.is_known_root(rt) {
        warn!(
            instruction = <&'static str>::from(instruction),
            root = %rt,
            "unknown merkle root"
        );
        return Err(LedgerError::UnknownRoot);
    }
    Ok(())
}

/// Require every nullifier to be unspent and distinct from the others in
/// the same instruction.
#[inline]
pub(crate) fn require_unspent<P: ProofSystem, H: AccumulatorHasher>(
    ledger: &CbdcLedger<P, H>,
    instruction: LedgerInstruction,
    nullifiers: &[FieldElement],
) -> Result<(), LedgerError> {
    for (i, sn) in nullifiers.iter().enumerate() {
        if ledger.nullifiers.contains(sn) || nullifiers[..i].contains(sn) {
            warn!(
                instruction = <&'static str>::from(instruction),
                nullifier = %sn,
                "nullifier already spent"
            );
            return Err(LedgerError::NullifierAlreadySpent);
        }
    }
    Ok(())
}

/// Require room for `count` more commitments.
#[inline]
pub(crate) fn require_capacity<P: ProofSystem, H: AccumulatorHasher>(
    ledger: &CbdcLedger<P, H>,
    instruction: LedgerInstruction,
    count: u64,
) -> Result<(), LedgerError> {
    let remaining = ledger.accumulator.remaining_capacity();
    if remaining < count {
        warn!(
            instruction = <&'static str>::from(instruction),
            remaining, count, "commitment tree is full"
        );
        return Err(LedgerError::TreeFull);
    }
    Ok(())
}

/// Require `addr_d` to have been registered.
#[inline]
pub(crate) fn require_registered_destination<P: ProofSystem, H: AccumulatorHasher>(
    ledger: &CbdcLedger<P, H>,
    addr_d: &FieldElement,
) -> Result<(), LedgerError> {
    if !ledger.destinations.contains(addr_d) {
        warn!(addr_d = %addr_d, "exchange to unregistered destination");
        return Err(LedgerError::UnknownDestination);
    }
    Ok(())
}

/// Require `caller` to be the ledger authority.
#[inline]
pub(crate) fn require_authority<P: ProofSystem, H: AccumulatorHasher>(
    ledger: &CbdcLedger<P, H>,
    instruction: LedgerInstruction,
    caller: &Address,
) -> Result<(), LedgerError> {
    if *caller != ledger.authority {
        warn!(
            instruction = <&'static str>::from(instruction),
            caller = ?caller,
            "caller is not the ledger authority"
        );
        return Err(LedgerError::Unauthorized);
    }
    Ok(())
}
