//! Destination registered event definition.

use borsh::{BorshDeserialize, BorshSerialize};

use super::{Event, EventType};

/// Event emitted when the authority registers an exchange destination.
#[derive(Clone, Copy, Debug, PartialEq, Eq, BorshSerialize, BorshDeserialize)]
pub struct DestinationRegisteredEvent {
    /// Destination address
    pub addr_d: [u8; 32],
    /// Initial destination balance commitment
    pub cm_new_d: [[u8; 32]; 2],
    /// Initial value commitment
    pub cm_v_d: [[u8; 32]; 2],
}

impl Event for DestinationRegisteredEvent {
    const EVENT_TYPE: EventType = EventType::DestinationRegistered;
}
