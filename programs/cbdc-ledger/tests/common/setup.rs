//! Ledger construction helpers.

use aegis_primitives::{CurvePoint, FieldElement, G1Point, G2Point, VerifyingKey, Word};
use cbdc_ledger::{CbdcLedger, LedgerConfig, OperationKeys, RootHistoryPolicy};
use ethers_core::types::Address;

use super::proof_system::MockProofSystem;

pub type TestLedger = CbdcLedger<MockProofSystem>;

/// Trailing-slot lengths the test keys leave after the fixed layout.
pub const REGISTER_CT_KEY_LEN: usize = 2;
pub const SEND_CT_LEN: usize = 3;
pub const RECEIVE_CT_LEN: usize = 2;
pub const EXCHANGE_CT_BAR_KEY_LEN: usize = 2;

pub const REGISTER_ARITY: usize = 10 + REGISTER_CT_KEY_LEN;
pub const SEND_ARITY: usize = 17 + SEND_CT_LEN;
pub const RECEIVE_ARITY: usize = 12 + RECEIVE_CT_LEN;
pub const EXCHANGE_ARITY: usize = 20 + EXCHANGE_CT_BAR_KEY_LEN;

pub fn fe(value: u64) -> FieldElement {
    FieldElement::from_u64(value)
}

pub fn fes(values: impl IntoIterator<Item = u64>) -> Vec<FieldElement> {
    values.into_iter().map(fe).collect()
}

pub fn point(x: u64, y: u64) -> CurvePoint {
    CurvePoint::new(fe(x), fe(y))
}

/// Key with `arity` public inputs, distinguished from other test keys by
/// `tag`.
pub fn test_vk(tag: u64, arity: usize) -> VerifyingKey {
    VerifyingKey {
        alpha_g1: G1Point::new(Word::from_u64(tag), Word::ZERO),
        beta_g2_neg: G2Point::default(),
        gamma_g2_neg: G2Point::default(),
        delta_g2_neg: G2Point::default(),
        gamma_abc_g1: vec![G1Point::INFINITY; arity + 1],
    }
}

pub fn authority() -> Address {
    Address::from_low_u64_be(0xa11ce)
}

pub fn stranger() -> Address {
    Address::from_low_u64_be(0xbad)
}

pub fn auditor_key() -> CurvePoint {
    point(7001, 7002)
}

pub fn commitment_key() -> [CurvePoint; 2] {
    [point(8001, 8002), point(8003, 8004)]
}

pub fn test_config(tree_height: u8, root_history: RootHistoryPolicy) -> LedgerConfig {
    LedgerConfig {
        tree_height,
        root_history,
        keys: OperationKeys {
            register: test_vk(1, REGISTER_ARITY),
            send: test_vk(2, SEND_ARITY),
            receive: test_vk(3, RECEIVE_ARITY),
            exchange: test_vk(4, EXCHANGE_ARITY),
        },
        auditor_public_key: auditor_key(),
        commitment_key: commitment_key(),
        authority: authority(),
    }
}

pub fn setup_ledger() -> TestLedger {
    setup_ledger_with(16, RootHistoryPolicy::Unbounded)
}

pub fn setup_ledger_with(tree_height: u8, root_history: RootHistoryPolicy) -> TestLedger {
    CbdcLedger::new(test_config(tree_height, root_history), MockProofSystem).unwrap()
}

/// Routes ledger logs to the test harness; `RUST_LOG` picks the level.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}
