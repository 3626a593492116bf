//! Instruction arguments with accepted proofs.
//!
//! Each builder spells out the public-input order on its own, so a test
//! fails if the ledger assembles the vector differently.

use aegis_primitives::{FieldElement, Proof};
use cbdc_ledger::{ExchangeArgs, ReceiveArgs, RegisterArgs, SendArgs};

use super::proof_system::prove;
use super::setup::*;

pub fn register_inputs(args: &RegisterArgs) -> Vec<FieldElement> {
    let mut inputs = vec![args.cm];
    inputs.extend(&args.ct_bar);
    inputs.extend(auditor_key().coordinates());
    inputs.extend(&args.ct_key);
    inputs
}

pub fn send_inputs(args: &SendArgs) -> Vec<FieldElement> {
    let mut inputs = vec![args.sn_cur, args.cm_new, args.cm_v, args.rt, args.auth];
    inputs.extend(auditor_key().coordinates());
    inputs.extend(&args.ct_bar);
    inputs.extend(&args.ct_key);
    inputs.extend(&args.ct);
    inputs
}

pub fn receive_inputs(args: &ReceiveArgs) -> Vec<FieldElement> {
    let mut inputs = auditor_key().coordinates().to_vec();
    inputs.extend([args.sn_v, args.sn_cur, args.cm_new, args.rt]);
    inputs.extend(&args.ct_key);
    inputs.extend(&args.ct);
    inputs
}

pub fn exchange_inputs(args: &ExchangeArgs) -> Vec<FieldElement> {
    let [ck0, ck1] = commitment_key();
    let mut inputs = vec![args.rt];
    inputs.extend(ck0.coordinates());
    inputs.extend(ck1.coordinates());
    inputs.extend([args.addr_d, args.sn_cur, args.cm_new]);
    inputs.extend(args.cm_new_d.coordinates());
    inputs.extend(args.cm_v_d.coordinates());
    inputs.extend(&args.ct_bar);
    inputs.extend(auditor_key().coordinates());
    inputs.extend(&args.ct_bar_key);
    inputs
}

/// Register `cm` with a valid proof.
pub fn register_args(cm: u64) -> RegisterArgs {
    let mut args = RegisterArgs {
        cm: fe(cm),
        ct_bar: fes(100..107),
        ct_key: fes(110..110 + REGISTER_CT_KEY_LEN as u64),
        proof: Proof::default(),
    };
    args.proof = prove(&test_vk(1, REGISTER_ARITY), &register_inputs(&args));
    args
}

/// Send spending `sn_cur` against `rt`, with a valid proof.
pub fn send_args(sn_cur: u64, cm_new: u64, cm_v: u64, rt: FieldElement) -> SendArgs {
    let mut args = SendArgs {
        sn_cur: fe(sn_cur),
        cm_new: fe(cm_new),
        cm_v: fe(cm_v),
        rt,
        auth: fe(55),
        ct_bar: fes(200..206),
        ct_key: fes(210..214),
        ct: fes(220..220 + SEND_CT_LEN as u64),
        proof: Proof::default(),
    };
    args.proof = prove(&test_vk(2, SEND_ARITY), &send_inputs(&args));
    args
}

/// Receive consuming `sn_v` and `sn_cur` against `rt`, with a valid proof.
pub fn receive_args(sn_v: u64, sn_cur: u64, cm_new: u64, rt: FieldElement) -> ReceiveArgs {
    let mut args = ReceiveArgs {
        sn_v: fe(sn_v),
        sn_cur: fe(sn_cur),
        cm_new: fe(cm_new),
        rt,
        ct_key: fes(300..306),
        ct: fes(310..310 + RECEIVE_CT_LEN as u64),
        proof: Proof::default(),
    };
    args.proof = prove(&test_vk(3, RECEIVE_ARITY), &receive_inputs(&args));
    args
}

/// Exchange into `addr_d` spending `sn_cur` against `rt`, with a valid proof.
pub fn exchange_args(addr_d: u64, sn_cur: u64, cm_new: u64, rt: FieldElement) -> ExchangeArgs {
    let mut args = ExchangeArgs {
        rt,
        addr_d: fe(addr_d),
        sn_cur: fe(sn_cur),
        cm_new: fe(cm_new),
        cm_new_d: point(400, 401),
        cm_v_d: point(402, 403),
        ct_bar: fes(410..416),
        ct_bar_key: fes(420..420 + EXCHANGE_CT_BAR_KEY_LEN as u64),
        proof: Proof::default(),
    };
    args.proof = prove(&test_vk(4, EXCHANGE_ARITY), &exchange_inputs(&args));
    args
}

/// Re-signs `args` after a test mutated a field.
pub fn reprove_send(args: &mut SendArgs) {
    args.proof = prove(&test_vk(2, SEND_ARITY), &send_inputs(args));
}

pub fn reprove_exchange(args: &mut ExchangeArgs) {
    args.proof = prove(&test_vk(4, EXCHANGE_ARITY), &exchange_inputs(args));
}
