//! Event definitions for the confidential ledger.
//!
//! Every successful mutation appends events to the ledger's journal, which
//! callers drain with [`crate::CbdcLedger::take_events`].
//!
//! # Event Types
//!
//! ## Core Events (1-15)
//! - [`NewCommitmentEvent`] - Emitted when a commitment is appended to the tree
//! - [`NewNullifierEvent`] - Emitted when a nullifier is spent
//! - [`DestinationUpdatedEvent`] - Emitted when an exchange rewrites a destination
//!
//! ## Admin Events (48-63)
//! - [`DestinationRegisteredEvent`] - Emitted when the authority registers a destination
//!
//! # Wire Format
//!
//! `[discriminator: u64 LE][borsh(body)]`. All bodies are fixed-size, so the
//! borsh encoding is the plain concatenation of their fields.

mod destination_registered;
mod destination_updated;
mod new_commitment;
mod new_nullifier;

pub use destination_registered::*;
pub use destination_updated::*;
pub use new_commitment::*;
pub use new_nullifier::*;

use borsh::{BorshDeserialize, BorshSerialize};

use crate::errors::LedgerError;

/// Event type discriminators for identifying event types in logs.
///
/// # Ranges
/// - **1-15**: Core events (commitment, nullifier, destination)
/// - **48-63**: Admin events (ledger administration)
#[repr(u64)]
#[derive(Clone, Copy, Debug, PartialEq, Eq, strum::IntoStaticStr)]
pub enum EventType {
    // =========================================================================
    // Core Events (1-15)
    // =========================================================================
    /// New commitment appended to the commitment merkle tree
    NewCommitment = 1,
    /// Nullifier spent
    NewNullifier = 2,
    /// Destination commitments rewritten by an exchange
    DestinationUpdated = 3,
    // Reserved: 4-15

    // =========================================================================
    // Admin Events (48-63)
    // =========================================================================
    /// Destination registered by the authority
    DestinationRegistered = 48,
    // Reserved: 49-63
}

impl EventType {
    fn from_discriminator(value: u64) -> Option<Self> {
        match value {
            1 => Some(Self::NewCommitment),
            2 => Some(Self::NewNullifier),
            3 => Some(Self::DestinationUpdated),
            48 => Some(Self::DestinationRegistered),
            _ => None,
        }
    }
}

/// A typed event body.
pub trait Event: BorshSerialize + BorshDeserialize {
    /// Discriminator written in front of the body.
    const EVENT_TYPE: EventType;

    /// Event name for logs and indexers.
    fn name() -> &'static str {
        Self::EVENT_TYPE.into()
    }

    /// Serialize the event to bytes with the discriminator prepended.
    ///
    /// # Errors
    /// Propagates borsh write failures.
    fn to_event_bytes(&self) -> borsh::io::Result<Vec<u8>> {
        let mut bytes = (Self::EVENT_TYPE as u64).to_le_bytes().to_vec();
        self.serialize(&mut bytes)?;
        Ok(bytes)
    }
}

/// Any event the ledger emits.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum LedgerEvent {
    /// See [`NewCommitmentEvent`].
    NewCommitment(NewCommitmentEvent),
    /// See [`NewNullifierEvent`].
    NewNullifier(NewNullifierEvent),
    /// See [`DestinationUpdatedEvent`].
    DestinationUpdated(DestinationUpdatedEvent),
    /// See [`DestinationRegisteredEvent`].
    DestinationRegistered(DestinationRegisteredEvent),
}

impl LedgerEvent {
    /// Discriminator of the wrapped event.
    pub fn event_type(&self) -> EventType {
        match self {
            LedgerEvent::NewCommitment(_) => NewCommitmentEvent::EVENT_TYPE,
            LedgerEvent::NewNullifier(_) => NewNullifierEvent::EVENT_TYPE,
            LedgerEvent::DestinationUpdated(_) => DestinationUpdatedEvent::EVENT_TYPE,
            LedgerEvent::DestinationRegistered(_) => DestinationRegisteredEvent::EVENT_TYPE,
        }
    }

    /// Wire encoding of the wrapped event.
    ///
    /// # Errors
    /// Propagates borsh write failures.
    pub fn to_event_bytes(&self) -> borsh::io::Result<Vec<u8>> {
        match self {
            LedgerEvent::NewCommitment(e) => e.to_event_bytes(),
            LedgerEvent::NewNullifier(e) => e.to_event_bytes(),
            LedgerEvent::DestinationUpdated(e) => e.to_event_bytes(),
            LedgerEvent::DestinationRegistered(e) => e.to_event_bytes(),
        }
    }
}

/// Parse an event from its wire encoding.
///
/// # Errors
/// [`LedgerError::MalformedInput`] on a short buffer, unknown
/// discriminator, or trailing bytes.
pub fn parse_event(data: &[u8]) -> Result<LedgerEvent, LedgerError> {
    let (discriminator, body) = data
        .split_first_chunk::<8>()
        .ok_or(LedgerError::MalformedInput)?;
    let event_type = EventType::from_discriminator(u64::from_le_bytes(*discriminator))
        .ok_or(LedgerError::MalformedInput)?;

    fn body_of<T: BorshDeserialize>(body: &[u8]) -> Result<T, LedgerError> {
        T::try_from_slice(body).map_err(|_| LedgerError::MalformedInput)
    }

    Ok(match event_type {
        EventType::NewCommitment => LedgerEvent::NewCommitment(body_of(body)?),
        EventType::NewNullifier => LedgerEvent::NewNullifier(body_of(body)?),
        EventType::DestinationUpdated => LedgerEvent::DestinationUpdated(body_of(body)?),
        EventType::DestinationRegistered => LedgerEvent::DestinationRegistered(body_of(body)?),
    })
}
