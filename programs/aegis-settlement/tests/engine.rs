//! Proof pre-check, admin seeding, helpers and configuration.

mod common;

use aegis_primitives::{G1Point, Proof, Word};
use aegis_settlement::instructions::authorization;
use aegis_settlement::instructions::public_inputs::aggregate_inputs;
use aegis_settlement::{
    AegisSettlement, EventType, SettlementConfig, SettlementError, SettlementEvent,
};
use common::*;
use ethers_core::types::Address;
use ethers_core::utils::keccak256;
use test_case::test_case;

fn sample_batch() -> aegis_settlement::TradeBatch {
    let contract = address_of(&signing_key(7));
    batch(vec![contract; 2], vec![user(1), user(2)], vec![g1(1), g1(2)])
}

// ============================================================================
// verify
// ============================================================================

#[test]
fn test_verify_accepts_matching_proof() {
    let engine = setup_engine();
    let batch = sample_batch();

    assert_eq!(aggregate_inputs(&batch), vec![expected_tau(&batch)]);
    assert!(engine.verify(&prove_batch(&batch), &batch));
    assert_eq!(engine.get_cm(&user(1)), g1(10));
    assert!(engine.events().is_empty());
}

#[test]
fn test_verify_rejects_altered_batch() {
    let engine = setup_engine();
    let batch = sample_batch();
    let proof = prove_batch(&batch);

    let mut altered = batch.clone();
    altered.delta_cm[1] = g1(3);
    assert!(!engine.verify(&proof, &altered));

    let mut altered = batch.clone();
    altered.user_address.swap(0, 1);
    assert!(!engine.verify(&proof, &altered));

    assert!(!engine.verify(&Proof::default(), &batch));
}

#[test]
fn test_verify_rejects_wrong_batch_size() {
    let engine = setup_engine();
    let batch = batch(vec![user(9)], vec![user(1)], vec![g1(1)]);
    assert!(!engine.verify(&prove_batch(&batch), &batch));
}

// ============================================================================
// set_commitment
// ============================================================================

#[test]
fn test_set_commitment() {
    let mut engine = setup_engine();

    engine
        .set_commitment(&authority(), user(4), g1(44))
        .unwrap();

    assert_eq!(engine.get_cm(&user(4)), g1(44));
    let events = engine.take_events();
    assert_eq!(events.len(), 1);
    assert_eq!(events[0].event_type(), EventType::CommitmentSet);
}

#[test]
fn test_set_commitment_unauthorized() {
    let mut engine = setup_engine();

    assert_eq!(
        engine.set_commitment(&user(1), user(1), g1(1)),
        Err(SettlementError::Unauthorized)
    );
    assert_eq!(engine.get_cm(&user(1)), g1(10));
}

#[test]
fn test_set_commitment_off_curve() {
    let mut engine = setup_engine();

    assert_eq!(
        engine.set_commitment(
            &authority(),
            user(1),
            G1Point::new(Word::from_u64(1), Word::from_u64(3))
        ),
        Err(SettlementError::MalformedInput)
    );
    assert_eq!(engine.get_cm(&user(1)), g1(10));
    assert!(engine.events().is_empty());
}

// ============================================================================
// Helpers
// ============================================================================

#[test]
fn test_bn_add() {
    let engine = setup_engine();
    assert_eq!(engine.bn_add(&g1(2), &g1(3)).unwrap(), g1(5));
    assert_eq!(engine.bn_add(&g1(4), &g1(4)).unwrap(), g1(8));
    assert_eq!(
        engine.bn_add(&g1(1), &G1Point::new(Word::from_u64(1), Word::from_u64(3))),
        Err(SettlementError::MalformedInput)
    );
}

#[test]
fn test_message_hash_matches_abi_encoding() {
    let engine = setup_engine();
    let batch = sample_batch();
    let proof = prove_batch(&batch);

    let encoded = authorization::abi_encode(&proof, &batch);
    // Two head words, proof array (length + 8), tuple head (3), contract and
    // user arrays (length + 2 each), delta array (length + 2·2).
    assert_eq!(encoded.len(), 32 * (2 + 9 + 3 + 3 + 3 + 5));
    assert_eq!(engine.message_hash(&proof, &batch), keccak256(&encoded));
}

#[test]
fn test_signature_recovers_signer() {
    let key = signing_key(42);
    let hash = keccak256(b"aegis");
    let signature = sign(&key, &hash);

    assert!(signature.v == 27 || signature.v == 28);
    assert_eq!(
        authorization::recover_signer(&signature, &hash).unwrap(),
        address_of(&key)
    );
}

#[test]
fn test_event_wire_round_trip() {
    let mut engine = setup_engine();
    engine.set_commitment(&authority(), user(5), g1(5)).unwrap();

    for event in engine.take_events() {
        let bytes = event.to_event_bytes().unwrap();
        assert_eq!(SettlementEvent::from_event_bytes(&bytes).unwrap(), event);
        assert_eq!(hex::encode(&bytes[..8]), "3000000000000000");
    }
}

// ============================================================================
// Configuration
// ============================================================================

#[test]
fn test_config_json_round_trip() {
    let config = test_config(4, &[(user(1), g1(10)), (user(2), G1Point::INFINITY)]);
    let json = serde_json::to_string(&config).unwrap();

    let parsed = SettlementConfig::from_json_str(&json).unwrap();
    assert_eq!(parsed, config);

    let engine = AegisSettlement::new(parsed, MockProofSystem).unwrap();
    assert_eq!(engine.batch_size(), 4);
    assert_eq!(engine.account_count(), 2);
    assert_eq!(engine.authority(), &authority());
    assert_eq!(engine.verifying_key().nr_pubinputs(), 1);
}

#[test]
fn test_config_accounts_default_to_empty() {
    let mut value = serde_json::to_value(test_config(2, &[])).unwrap();
    value.as_object_mut().unwrap().remove("accounts");

    let config = SettlementConfig::from_json_str(&value.to_string()).unwrap();
    assert!(config.accounts.is_empty());
}

#[test_case(0, &[] ; "zero batch size")]
#[test_case(2, &[(Address::zero(), G1Point::new(Word::from_u64(1), Word::from_u64(3)))] ; "off-curve seed")]
#[test_case(2, &[(Address::zero(), G1Point::INFINITY), (Address::zero(), G1Point::INFINITY)] ; "duplicate seed")]
fn test_invalid_config(batch_size: usize, accounts: &[(Address, G1Point)]) {
    let config = test_config(batch_size, accounts);
    assert_eq!(config.validate(), Err(SettlementError::InvalidConfig));
    assert!(matches!(
        AegisSettlement::new(config, MockProofSystem),
        Err(SettlementError::InvalidConfig)
    ));
}

#[test]
fn test_key_with_wrong_arity() {
    let mut config = test_config(2, &[]);
    config.verifying_key.gamma_abc_g1.push(G1Point::INFINITY);
    assert_eq!(config.validate(), Err(SettlementError::InvalidConfig));
}
