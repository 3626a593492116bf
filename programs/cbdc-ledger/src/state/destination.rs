use std::collections::HashMap;

use aegis_primitives::{CurvePoint, FieldElement};
use serde::{Deserialize, Serialize};

use crate::errors::LedgerError;

/// Commitments held for an exchange destination.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DestinationAccountState {
    /// Destination balance commitment.
    pub cm_new_d: CurvePoint,
    /// Commitment to the value last moved into the destination.
    pub cm_v_d: CurvePoint,
}

/// Exchange destinations keyed by `addr_d`.
///
/// An address must be registered before an exchange may write to it.
#[derive(Clone, Debug, Default)]
pub struct DestinationStore {
    entries: HashMap<FieldElement, DestinationAccountState>,
}

impl DestinationStore {
    /// Registers `addr_d` with its initial state.
    ///
    /// # Errors
    /// [`LedgerError::MalformedInput`] if the address is already registered.
    pub fn register(
        &mut self,
        addr_d: FieldElement,
        state: DestinationAccountState,
    ) -> Result<(), LedgerError> {
        if self.entries.contains_key(&addr_d) {
            return Err(LedgerError::MalformedInput);
        }
        self.entries.insert(addr_d, state);
        Ok(())
    }

    /// Returns true if `addr_d` was registered.
    pub fn contains(&self, addr_d: &FieldElement) -> bool {
        self.entries.contains_key(addr_d)
    }

    /// Current state of `addr_d`.
    pub fn get(&self, addr_d: &FieldElement) -> Option<&DestinationAccountState> {
        self.entries.get(addr_d)
    }

    /// Overwrites the state of a registered address.
    ///
    /// # Errors
    /// [`LedgerError::UnknownDestination`] if `addr_d` was never registered.
    pub fn update(
        &mut self,
        addr_d: &FieldElement,
        state: DestinationAccountState,
    ) -> Result<(), LedgerError> {
        let entry = self
            .entries
            .get_mut(addr_d)
            .ok_or(LedgerError::UnknownDestination)?;
        *entry = state;
        Ok(())
    }

    /// Number of registered destinations.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if nothing is registered.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
