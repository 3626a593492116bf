//! New nullifier event definition.

use borsh::{BorshDeserialize, BorshSerialize};

use super::{Event, EventType};

/// Event emitted when a nullifier is spent (input note consumed).
///
/// Nullifiers prevent double-spending; once this event is observed the
/// nullifier can never be used again.
#[derive(Clone, Copy, Debug, PartialEq, Eq, BorshSerialize, BorshDeserialize)]
pub struct NewNullifierEvent {
    /// The nullifier (32 bytes, big-endian)
    pub nullifier: [u8; 32],
}

impl Event for NewNullifierEvent {
    const EVENT_TYPE: EventType = EventType::NewNullifier;
}
