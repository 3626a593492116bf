//! New commitment event definition.

use borsh::{BorshDeserialize, BorshSerialize};

use super::{Event, EventType};

/// Event emitted when a new commitment is appended to the commitment tree.
///
/// Wire format: `[discriminator: 8 bytes][index: 8][commitment: 32][root: 32]`
#[derive(Clone, Copy, Debug, PartialEq, Eq, BorshSerialize, BorshDeserialize)]
pub struct NewCommitmentEvent {
    /// Leaf index of this commitment in the tree
    pub index: u64,
    /// The commitment (32 bytes, big-endian)
    pub commitment: [u8; 32],
    /// Tree root right after the insertion
    pub root: [u8; 32],
}

impl Event for NewCommitmentEvent {
    const EVENT_TYPE: EventType = EventType::NewCommitment;
}
