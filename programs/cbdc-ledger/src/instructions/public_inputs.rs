//! Public-input layouts of the proof-gated instructions.
//!
//! The vector handed to the verifier must match the circuit's public signal
//! order exactly; a permuted vector fails verification.
//!
//! | Instruction | Public inputs (ordered) |
//! |-------------|-------------------------|
//! | register | `cm, ct_bar(7), apk(2), ct_key(rest)` |
//! | send | `sn_cur, cm_new, cm_v, rt, auth, apk(2), ct_bar(6), ct_key(4), ct(rest)` |
//! | receive | `apk(2), sn_v, sn_cur, cm_new, rt, ct_key(6), ct(rest)` |
//! | exchange | `rt, ck(4), addr_d, sn_cur, cm_new, cm_new_d(2), cm_v_d(2), ct_bar(6), apk(2), ct_bar_key(rest)` |
//!
//! `rest` is whatever the verifying key's arity leaves after the fixed
//! slots; the trailing vector must fill it exactly.

use aegis_primitives::{CurvePoint, FieldElement};
use tracing::warn;

use super::LedgerInstruction;
use super::types::{ExchangeArgs, ReceiveArgs, RegisterArgs, SendArgs};
use crate::errors::LedgerError;

/// Auditor ciphertext length in register.
pub const REGISTER_CT_BAR_LEN: usize = 7;
/// Auditor ciphertext length in send.
pub const SEND_CT_BAR_LEN: usize = 6;
/// Key ciphertext length in send.
pub const SEND_CT_KEY_LEN: usize = 4;
/// Key ciphertext length in receive.
pub const RECEIVE_CT_KEY_LEN: usize = 6;
/// Auditor ciphertext length in exchange.
pub const EXCHANGE_CT_BAR_LEN: usize = 6;

const POINT_LEN: usize = 2;
const CK_LEN: usize = 2 * POINT_LEN;

/// Inputs preceding `ct_key` in register.
pub const REGISTER_FIXED_INPUTS: usize = 1 + REGISTER_CT_BAR_LEN + POINT_LEN;
/// Inputs preceding `ct` in send.
pub const SEND_FIXED_INPUTS: usize = 5 + POINT_LEN + SEND_CT_BAR_LEN + SEND_CT_KEY_LEN;
/// Inputs preceding `ct` in receive.
pub const RECEIVE_FIXED_INPUTS: usize = POINT_LEN + 4 + RECEIVE_CT_KEY_LEN;
/// Inputs preceding `ct_bar_key` in exchange.
pub const EXCHANGE_FIXED_INPUTS: usize =
    1 + CK_LEN + 3 + 2 * POINT_LEN + EXCHANGE_CT_BAR_LEN + POINT_LEN;

/// Ordered public-input vector under construction.
struct PublicInputs {
    instruction: LedgerInstruction,
    arity: usize,
    inputs: Vec<FieldElement>,
}

impl PublicInputs {
    fn new(instruction: LedgerInstruction, arity: usize) -> Self {
        Self {
            instruction,
            arity,
            inputs: Vec::with_capacity(arity),
        }
    }

    fn scalar(mut self, value: &FieldElement) -> Self {
        self.inputs.push(*value);
        self
    }

    fn point(mut self, point: &CurvePoint) -> Self {
        self.inputs.extend(point.coordinates());
        self
    }

    fn fixed(
        mut self,
        slot: &'static str,
        values: &[FieldElement],
        len: usize,
    ) -> Result<Self, LedgerError> {
        if values.len() != len {
            return Err(self.mismatch(slot, values.len(), len));
        }
        self.inputs.extend_from_slice(values);
        Ok(self)
    }

    /// Appends the trailing vector, which must complete the arity exactly.
    fn rest(
        mut self,
        slot: &'static str,
        values: &[FieldElement],
    ) -> Result<Vec<FieldElement>, LedgerError> {
        let Some(expected) = self.arity.checked_sub(self.inputs.len()) else {
            return Err(self.mismatch(slot, values.len(), 0));
        };
        if values.len() != expected {
            return Err(self.mismatch(slot, values.len(), expected));
        }
        self.inputs.extend_from_slice(values);
        Ok(self.inputs)
    }

    fn mismatch(&self, slot: &'static str, got: usize, expected: usize) -> LedgerError {
        warn!(
            instruction = <&'static str>::from(self.instruction),
            slot, got, expected, "public input slot has the wrong length"
        );
        LedgerError::MalformedInput
    }
}

/// `cm, ct_bar(7), apk(2), ct_key(rest)`
///
/// # Errors
/// [`LedgerError::MalformedInput`] if a vector has the wrong length.
pub fn register(
    args: &RegisterArgs,
    apk: &CurvePoint,
    arity: usize,
) -> Result<Vec<FieldElement>, LedgerError> {
    PublicInputs::new(LedgerInstruction::Register, arity)
        .scalar(&args.cm)
        .fixed("ct_bar", &args.ct_bar, REGISTER_CT_BAR_LEN)?
        .point(apk)
        .rest("ct_key", &args.ct_key)
}

/// `sn_cur, cm_new, cm_v, rt, auth, apk(2), ct_bar(6), ct_key(4), ct(rest)`
///
/// # Errors
/// [`LedgerError::MalformedInput`] if a vector has the wrong length.
pub fn send(
    args: &SendArgs,
    apk: &CurvePoint,
    arity: usize,
) -> Result<Vec<FieldElement>, LedgerError> {
    PublicInputs::new(LedgerInstruction::Send, arity)
        .scalar(&args.sn_cur)
        .scalar(&args.cm_new)
        .scalar(&args.cm_v)
        .scalar(&args.rt)
        .scalar(&args.auth)
        .point(apk)
        .fixed("ct_bar", &args.ct_bar, SEND_CT_BAR_LEN)?
        .fixed("ct_key", &args.ct_key, SEND_CT_KEY_LEN)?
        .rest("ct", &args.ct)
}

/// `apk(2), sn_v, sn_cur, cm_new, rt, ct_key(6), ct(rest)`
///
/// # Errors
/// [`LedgerError::MalformedInput`] if a vector has the wrong length.
pub fn receive(
    args: &ReceiveArgs,
    apk: &CurvePoint,
    arity: usize,
) -> Result<Vec<FieldElement>, LedgerError> {
    PublicInputs::new(LedgerInstruction::Receive, arity)
        .point(apk)
        .scalar(&args.sn_v)
        .scalar(&args.sn_cur)
        .scalar(&args.cm_new)
        .scalar(&args.rt)
        .fixed("ct_key", &args.ct_key, RECEIVE_CT_KEY_LEN)?
        .rest("ct", &args.ct)
}

/// `rt, ck(4), addr_d, sn_cur, cm_new, cm_new_d(2), cm_v_d(2), ct_bar(6),
/// apk(2), ct_bar_key(rest)`
///
/// # Errors
/// [`LedgerError::MalformedInput`] if a vector has the wrong length.
pub fn exchange(
    args: &ExchangeArgs,
    apk: &CurvePoint,
    ck: &[CurvePoint; 2],
    arity: usize,
) -> Result<Vec<FieldElement>, LedgerError> {
    PublicInputs::new(LedgerInstruction::Exchange, arity)
        .scalar(&args.rt)
        .point(&ck[0])
        .point(&ck[1])
        .scalar(&args.addr_d)
        .scalar(&args.sn_cur)
        .scalar(&args.cm_new)
        .point(&args.cm_new_d)
        .point(&args.cm_v_d)
        .fixed("ct_bar", &args.ct_bar, EXCHANGE_CT_BAR_LEN)?
        .point(apk)
        .rest("ct_bar_key", &args.ct_bar_key)
}
