//! Event definitions for the settlement engine.
//!
//! # Event Types
//!
//! - [`CommitmentUpdatedEvent`] - Emitted per slot when a batch is applied
//! - [`BatchSettledEvent`] - Emitted once per applied batch
//! - [`CommitmentSetEvent`] - Emitted when the authority sets an account
//!
//! Wire format is `[discriminator: u64 LE][borsh(body)]`, the same framing
//! the confidential ledger uses.

use aegis_primitives::G1Point;
use borsh::{BorshDeserialize, BorshSerialize};
use ethers_core::types::Address;

use crate::errors::SettlementError;

/// Event type discriminators.
///
/// # Ranges
/// - **1-15**: Core events (batch settlement)
/// - **48-63**: Admin events
#[repr(u64)]
#[derive(Clone, Copy, Debug, PartialEq, Eq, strum::IntoStaticStr)]
pub enum EventType {
    // =========================================================================
    // Core Events (1-15)
    // =========================================================================
    /// Account commitment advanced by a batch slot
    CommitmentUpdated = 1,
    /// Batch applied
    BatchSettled = 2,
    // Reserved: 3-15

    // =========================================================================
    // Admin Events (48-63)
    // =========================================================================
    /// Account commitment set by the authority
    CommitmentSet = 48,
}

impl TryFrom<u64> for EventType {
    type Error = SettlementError;

    fn try_from(value: u64) -> Result<Self, Self::Error> {
        match value {
            1 => Ok(Self::CommitmentUpdated),
            2 => Ok(Self::BatchSettled),
            48 => Ok(Self::CommitmentSet),
            _ => Err(SettlementError::MalformedInput),
        }
    }
}

/// Event emitted for each slot of an applied batch.
#[derive(Clone, Debug, PartialEq, Eq, BorshSerialize, BorshDeserialize)]
pub struct CommitmentUpdatedEvent {
    /// Account address
    pub address: [u8; 20],
    /// Commitment after the slot's delta, `[x, y]` big-endian
    pub commitment: [[u8; 32]; 2],
}

/// Event emitted once per applied batch, after its slot events.
#[derive(Clone, Debug, PartialEq, Eq, BorshSerialize, BorshDeserialize)]
pub struct BatchSettledEvent {
    /// Hash the slot signatures covered
    pub message_hash: [u8; 32],
    /// Number of slots applied
    pub slots: u64,
}

/// Event emitted when the authority sets an account commitment.
#[derive(Clone, Debug, PartialEq, Eq, BorshSerialize, BorshDeserialize)]
pub struct CommitmentSetEvent {
    /// Account address
    pub address: [u8; 20],
    /// New commitment, `[x, y]` big-endian
    pub commitment: [[u8; 32]; 2],
}

pub(crate) fn commitment_bytes(point: &G1Point) -> [[u8; 32]; 2] {
    [point.x.0, point.y.0]
}

pub(crate) fn address_bytes(address: &Address) -> [u8; 20] {
    address.to_fixed_bytes()
}

/// Any event the settlement engine emits.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SettlementEvent {
    /// See [`CommitmentUpdatedEvent`].
    CommitmentUpdated(CommitmentUpdatedEvent),
    /// See [`BatchSettledEvent`].
    BatchSettled(BatchSettledEvent),
    /// See [`CommitmentSetEvent`].
    CommitmentSet(CommitmentSetEvent),
}

impl SettlementEvent {
    /// Discriminator of the wrapped event.
    pub fn event_type(&self) -> EventType {
        match self {
            SettlementEvent::CommitmentUpdated(_) => EventType::CommitmentUpdated,
            SettlementEvent::BatchSettled(_) => EventType::BatchSettled,
            SettlementEvent::CommitmentSet(_) => EventType::CommitmentSet,
        }
    }

    /// Event name for logs and indexers.
    pub fn name(&self) -> &'static str {
        self.event_type().into()
    }

    /// Wire encoding.
    ///
    /// # Errors
    /// Propagates borsh write failures.
    pub fn to_event_bytes(&self) -> borsh::io::Result<Vec<u8>> {
        let mut bytes = (self.event_type() as u64).to_le_bytes().to_vec();
        match self {
            SettlementEvent::CommitmentUpdated(e) => e.serialize(&mut bytes)?,
            SettlementEvent::BatchSettled(e) => e.serialize(&mut bytes)?,
            SettlementEvent::CommitmentSet(e) => e.serialize(&mut bytes)?,
        }
        Ok(bytes)
    }

    /// Parses the wire encoding.
    ///
    /// # Errors
    /// [`SettlementError::MalformedInput`] on a short buffer, unknown
    /// discriminator or trailing bytes.
    pub fn from_event_bytes(data: &[u8]) -> Result<Self, SettlementError> {
        let (discriminator, body) = data
            .split_first_chunk::<8>()
            .ok_or(SettlementError::MalformedInput)?;
        let malformed = |_| SettlementError::MalformedInput;

        Ok(match EventType::try_from(u64::from_le_bytes(*discriminator))? {
            EventType::CommitmentUpdated => {
                Self::CommitmentUpdated(BorshDeserialize::try_from_slice(body).map_err(malformed)?)
            }
            EventType::BatchSettled => {
                Self::BatchSettled(BorshDeserialize::try_from_slice(body).map_err(malformed)?)
            }
            EventType::CommitmentSet => {
                Self::CommitmentSet(BorshDeserialize::try_from_slice(body).map_err(malformed)?)
            }
        })
    }
}
