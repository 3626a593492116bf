//! Arguments of the proof-gated instructions.
//!
//! Ciphertext, key and auth vectors are opaque positional slots: the ledger
//! only checks their lengths and binds them into the public inputs.

use aegis_primitives::{CurvePoint, FieldElement, Proof};
use serde::{Deserialize, Serialize};

/// Register a fresh account commitment.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegisterArgs {
    /// New account commitment.
    pub cm: FieldElement,
    /// Auditor ciphertext, 7 elements.
    pub ct_bar: Vec<FieldElement>,
    /// Key ciphertext, sized by the verifying key.
    pub ct_key: Vec<FieldElement>,
    /// Register proof.
    pub proof: Proof,
}

/// Spend the current account note and emit a value note for a recipient.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SendArgs {
    /// Nullifier of the spent account note.
    pub sn_cur: FieldElement,
    /// Updated sender account commitment.
    pub cm_new: FieldElement,
    /// Value note commitment for the recipient.
    pub cm_v: FieldElement,
    /// Root the spent note is proven against.
    pub rt: FieldElement,
    /// Authorization tag.
    pub auth: FieldElement,
    /// Auditor ciphertext, 6 elements.
    pub ct_bar: Vec<FieldElement>,
    /// Key ciphertext, 4 elements.
    pub ct_key: Vec<FieldElement>,
    /// Recipient ciphertext, sized by the verifying key.
    pub ct: Vec<FieldElement>,
    /// Send proof.
    pub proof: Proof,
}

/// Absorb a received value note into the account.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReceiveArgs {
    /// Nullifier of the consumed value note.
    pub sn_v: FieldElement,
    /// Nullifier of the spent account note.
    pub sn_cur: FieldElement,
    /// Updated account commitment.
    pub cm_new: FieldElement,
    /// Root both notes are proven against.
    pub rt: FieldElement,
    /// Key ciphertext, 6 elements.
    pub ct_key: Vec<FieldElement>,
    /// Auditor ciphertext, sized by the verifying key.
    pub ct: Vec<FieldElement>,
    /// Receive proof.
    pub proof: Proof,
}

/// Move value from the account into a registered destination.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExchangeArgs {
    /// Root the spent note is proven against.
    pub rt: FieldElement,
    /// Destination address.
    pub addr_d: FieldElement,
    /// Nullifier of the spent account note.
    pub sn_cur: FieldElement,
    /// Updated account commitment.
    pub cm_new: FieldElement,
    /// New destination balance commitment.
    pub cm_new_d: CurvePoint,
    /// Commitment to the moved value.
    pub cm_v_d: CurvePoint,
    /// Auditor ciphertext, 6 elements.
    pub ct_bar: Vec<FieldElement>,
    /// Auditor key ciphertext, sized by the verifying key.
    pub ct_bar_key: Vec<FieldElement>,
    /// Exchange proof.
    pub proof: Proof,
}
