//! Batch message hashing and signer checks.
//!
//! The signed message is the keccak256 of
//! `abi.encode(uint256[] proof, (address[] contractAddress, address[]
//! userAddress, (uint256,uint256)[] deltaCm))`, signed as an Ethereum
//! personal message. Every slot signs the same whole-batch hash.

use aegis_primitives::{G1Point, Proof, Word};
use ethers_core::abi::{self, Token};
use ethers_core::types::{Address, RecoveryMessage, Signature, U256};
use ethers_core::utils::keccak256;
use tracing::warn;

use crate::errors::SettlementError;
use crate::state::{TradeBatch, VrsSignature};

fn uint(word: &Word) -> Token {
    Token::Uint(U256::from_big_endian(word.as_bytes()))
}

fn point(p: &G1Point) -> Token {
    Token::Tuple(vec![uint(&p.x), uint(&p.y)])
}

fn addresses(list: &[Address]) -> Token {
    Token::Array(list.iter().copied().map(Token::Address).collect())
}

/// `(address[], address[], (uint256,uint256)[])` token of `batch`.
pub(crate) fn batch_token(batch: &TradeBatch) -> Token {
    Token::Tuple(vec![
        addresses(&batch.contract_address),
        addresses(&batch.user_address),
        Token::Array(batch.delta_cm.iter().map(point).collect()),
    ])
}

/// ABI encoding of `(proof, batch)`.
pub fn abi_encode(proof: &Proof, batch: &TradeBatch) -> Vec<u8> {
    let proof_words = Token::Array(proof.to_flat().iter().map(uint).collect());
    abi::encode(&[proof_words, batch_token(batch)])
}

/// Hash every slot's signature must cover.
pub fn message_hash(proof: &Proof, batch: &TradeBatch) -> [u8; 32] {
    keccak256(abi_encode(proof, batch))
}

/// Recovers the address that signed `hash` as a personal message.
///
/// # Errors
/// [`SettlementError::UnauthorizedSigner`] if the signature is malformed.
pub fn recover_signer(
    signature: &VrsSignature,
    hash: &[u8; 32],
) -> Result<Address, SettlementError> {
    Signature::from(signature)
        .recover(RecoveryMessage::Data(hash.to_vec()))
        .map_err(|e| {
            warn!(error = %e, "signature recovery failed");
            SettlementError::UnauthorizedSigner
        })
}

/// Requires `signatures[i]` to recover to `batch.contract_address[i]` for
/// every slot.
///
/// # Errors
/// `MalformedInput` on a count mismatch, `UnauthorizedSigner` at the first
/// slot that fails.
pub fn authorize_batch(
    signatures: &[VrsSignature],
    hash: &[u8; 32],
    batch: &TradeBatch,
) -> Result<(), SettlementError> {
    if signatures.len() != batch.contract_address.len() {
        warn!(
            signatures = signatures.len(),
            slots = batch.contract_address.len(),
            "signature count does not match the batch"
        );
        return Err(SettlementError::MalformedInput);
    }

    for (slot, (signature, expected)) in signatures.iter().zip(&batch.contract_address).enumerate() {
        let signer = recover_signer(signature, hash)?;
        if signer != *expected {
            warn!(slot, signer = ?signer, expected = ?expected, "unauthorized signer");
            return Err(SettlementError::UnauthorizedSigner);
        }
    }
    Ok(())
}
