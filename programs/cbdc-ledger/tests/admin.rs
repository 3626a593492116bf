//! Admin instruction tests: authority-only commitment insertion and
//! destination registration.

mod common;

use cbdc_ledger::events::{DestinationRegisteredEvent, NewCommitmentEvent};
use cbdc_ledger::{DestinationAccountState, LedgerError, LedgerEvent, RootHistoryPolicy};
use common::*;

// ============================================================================
// insert_cm
// ============================================================================

#[test]
fn test_insert_cm_by_authority() {
    let mut ledger = setup_ledger();

    let root = ledger.insert_cm(&authority(), fe(5)).unwrap();

    assert_eq!(ledger.get_root(), root);
    assert_eq!(ledger.commitment_count(), 1);
    assert_eq!(
        ledger.take_events(),
        vec![LedgerEvent::NewCommitment(NewCommitmentEvent {
            index: 0,
            commitment: fe(5).to_be_bytes(),
            root: root.to_be_bytes(),
        })]
    );
}

#[test]
fn test_insert_cm_matches_register_root() {
    let mut by_admin = setup_ledger();
    let mut by_proof = setup_ledger();

    assert_eq!(
        by_admin.insert_cm(&authority(), fe(11)).unwrap(),
        by_proof.register(&register_args(11)).unwrap()
    );
}

#[test]
fn test_insert_cm_unauthorized() {
    let mut ledger = setup_ledger();
    let root = ledger.get_root();

    assert_eq!(
        ledger.insert_cm(&stranger(), fe(5)),
        Err(LedgerError::Unauthorized)
    );
    assert_eq!(ledger.get_root(), root);
    assert!(ledger.events().is_empty());
}

#[test]
fn test_insert_cm_tree_full() {
    let mut ledger = setup_ledger_with(1, RootHistoryPolicy::Unbounded);
    ledger.insert_cm(&authority(), fe(1)).unwrap();
    ledger.insert_cm(&authority(), fe(2)).unwrap();

    assert_eq!(
        ledger.insert_cm(&authority(), fe(3)),
        Err(LedgerError::TreeFull)
    );
}

// ============================================================================
// register_destination
// ============================================================================

#[test]
fn test_register_destination() {
    let mut ledger = setup_ledger();
    let state = DestinationAccountState {
        cm_new_d: point(1, 2),
        cm_v_d: point(3, 4),
    };

    ledger
        .register_destination(&authority(), fe(0xd0), state)
        .unwrap();

    assert_eq!(ledger.get_cm_d(&fe(0xd0)), Some(&state));
    assert_eq!(
        ledger.take_events(),
        vec![LedgerEvent::DestinationRegistered(DestinationRegisteredEvent {
            addr_d: fe(0xd0).to_be_bytes(),
            cm_new_d: [fe(1).to_be_bytes(), fe(2).to_be_bytes()],
            cm_v_d: [fe(3).to_be_bytes(), fe(4).to_be_bytes()],
        })]
    );
}

#[test]
fn test_register_destination_twice() {
    let mut ledger = setup_ledger();
    ledger
        .register_destination(&authority(), fe(0xd0), DestinationAccountState::default())
        .unwrap();
    ledger.take_events();

    let other = DestinationAccountState {
        cm_new_d: point(9, 9),
        cm_v_d: point(9, 9),
    };
    assert_eq!(
        ledger.register_destination(&authority(), fe(0xd0), other),
        Err(LedgerError::MalformedInput)
    );
    assert_eq!(
        ledger.get_cm_d(&fe(0xd0)),
        Some(&DestinationAccountState::default())
    );
    assert!(ledger.events().is_empty());
}

#[test]
fn test_register_destination_unauthorized() {
    let mut ledger = setup_ledger();

    assert_eq!(
        ledger.register_destination(&stranger(), fe(0xd0), DestinationAccountState::default()),
        Err(LedgerError::Unauthorized)
    );
    assert_eq!(ledger.get_cm_d(&fe(0xd0)), None);
}
