use std::collections::HashSet;

use aegis_primitives::FieldElement;

use crate::errors::LedgerError;

/// Spent-note registry.
///
/// A nullifier is inserted exactly once and never removed, so `contains`
/// only ever flips from false to true.
#[derive(Clone, Debug, Default)]
pub struct NullifierSet {
    spent: HashSet<FieldElement>,
}

impl NullifierSet {
    /// Empty set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Marks `sn` as spent.
    ///
    /// # Errors
    /// [`LedgerError::NullifierAlreadySpent`] if `sn` is already present; the
    /// set is left unchanged.
    pub fn insert(&mut self, sn: FieldElement) -> Result<(), LedgerError> {
        if !self.spent.insert(sn) {
            return Err(LedgerError::NullifierAlreadySpent);
        }
        Ok(())
    }

    /// Returns true if `sn` has been spent.
    pub fn contains(&self, sn: &FieldElement) -> bool {
        self.spent.contains(sn)
    }

    /// Number of spent nullifiers.
    pub fn len(&self) -> usize {
        self.spent.len()
    }

    /// Returns true if nothing has been spent.
    pub fn is_empty(&self) -> bool {
        self.spent.is_empty()
    }
}
