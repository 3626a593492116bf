//! Destination updated event definition.

use borsh::{BorshDeserialize, BorshSerialize};

use super::{Event, EventType};

/// Event emitted when an exchange overwrites a destination's commitments.
///
/// Curve points are encoded as `[x, y]`, each coordinate 32 bytes big-endian.
#[derive(Clone, Copy, Debug, PartialEq, Eq, BorshSerialize, BorshDeserialize)]
pub struct DestinationUpdatedEvent {
    /// Destination address
    pub addr_d: [u8; 32],
    /// New destination balance commitment
    pub cm_new_d: [[u8; 32]; 2],
    /// Commitment to the value moved into the destination
    pub cm_v_d: [[u8; 32]; 2],
}

impl Event for DestinationUpdatedEvent {
    const EVENT_TYPE: EventType = EventType::DestinationUpdated;
}
