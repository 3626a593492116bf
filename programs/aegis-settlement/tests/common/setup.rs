//! Engine construction and batch helpers.

use aegis_primitives::{FieldElement, G1Point, G2Point, Proof, VerifyingKey, Word, hash_to_field};
use aegis_settlement::{AegisSettlement, InitialAccount, SettlementConfig, TradeBatch};
use ark_bn254::{Fr, G1Affine};
use ark_ec::{AffineRepr, CurveGroup};
use ethers_core::abi::{self, Token};
use ethers_core::types::{Address, U256};
use ethers_core::utils::keccak256;

use super::proof_system::{MockProofSystem, prove};

pub type TestEngine = AegisSettlement<MockProofSystem>;

pub const BATCH_SIZE: usize = 2;

/// `k·G` on BN254 G1.
pub fn g1(k: u64) -> G1Point {
    G1Point::from_affine(&(G1Affine::generator() * Fr::from(k)).into_affine())
}

pub fn settlement_vk() -> VerifyingKey {
    VerifyingKey {
        alpha_g1: G1Point::new(Word::from_u64(9), Word::ZERO),
        beta_g2_neg: G2Point::default(),
        gamma_g2_neg: G2Point::default(),
        delta_g2_neg: G2Point::default(),
        gamma_abc_g1: vec![G1Point::INFINITY; 2],
    }
}

pub fn authority() -> Address {
    Address::from_low_u64_be(0xa11ce)
}

pub fn user(n: u64) -> Address {
    Address::from_low_u64_be(0x1000 + n)
}

pub fn test_config(batch_size: usize, accounts: &[(Address, G1Point)]) -> SettlementConfig {
    SettlementConfig {
        batch_size,
        verifying_key: settlement_vk(),
        authority: authority(),
        accounts: accounts
            .iter()
            .map(|&(address, commitment)| InitialAccount { address, commitment })
            .collect(),
    }
}

/// Engine with users 1, 2 and 3 seeded at `10·G`, `20·G` and `30·G`.
pub fn setup_engine() -> TestEngine {
    let accounts = [(user(1), g1(10)), (user(2), g1(20)), (user(3), g1(30))];
    AegisSettlement::new(test_config(BATCH_SIZE, &accounts), MockProofSystem).unwrap()
}

/// `keccak256(abi.encode(batch)) mod r`, built independently of the engine.
pub fn expected_tau(batch: &TradeBatch) -> FieldElement {
    let uint = |w: &Word| Token::Uint(U256::from_big_endian(w.as_bytes()));
    let token = Token::Tuple(vec![
        Token::Array(batch.contract_address.iter().map(|a| Token::Address(*a)).collect()),
        Token::Array(batch.user_address.iter().map(|a| Token::Address(*a)).collect()),
        Token::Array(
            batch
                .delta_cm
                .iter()
                .map(|p| Token::Tuple(vec![uint(&p.x), uint(&p.y)]))
                .collect(),
        ),
    ]);
    hash_to_field(&keccak256(abi::encode(&[token])))
}

/// Accepted aggregate proof for `batch`.
pub fn prove_batch(batch: &TradeBatch) -> Proof {
    prove(&settlement_vk(), &[expected_tau(batch)])
}

pub fn batch(
    contract_address: Vec<Address>,
    user_address: Vec<Address>,
    delta_cm: Vec<G1Point>,
) -> TradeBatch {
    TradeBatch {
        contract_address,
        user_address,
        delta_cm,
    }
}

pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}
