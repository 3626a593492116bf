//! Wallet-style signing of the batch message hash.

use aegis_primitives::Word;
use aegis_settlement::VrsSignature;
use ethers_core::k256::ecdsa::SigningKey;
use ethers_core::types::Address;
use ethers_core::utils::{hash_message, secret_key_to_address};

/// Deterministic key; `seed` must be non-zero.
pub fn signing_key(seed: u8) -> SigningKey {
    SigningKey::from_slice(&[seed; 32]).unwrap()
}

pub fn address_of(key: &SigningKey) -> Address {
    secret_key_to_address(key)
}

/// Signs `hash` as an Ethereum personal message, `v ∈ {27, 28}`.
pub fn sign(key: &SigningKey, hash: &[u8; 32]) -> VrsSignature {
    let digest = hash_message(hash);
    let (signature, recovery_id) = key.sign_prehash_recoverable(digest.as_bytes()).unwrap();
    let bytes = signature.to_bytes();
    VrsSignature {
        v: recovery_id.to_byte() + 27,
        r: Word(bytes[..32].try_into().unwrap()),
        s: Word(bytes[32..].try_into().unwrap()),
    }
}
