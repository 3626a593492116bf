//! Aggregate proof public inputs.
//!
//! The aggregate circuit has a single public input, the batch challenge
//! `tau = keccak256(abi.encode(batch)) mod r`. Any change to an address or
//! a delta in the batch changes `tau`.

use aegis_primitives::{FieldElement, hash_to_field};
use ethers_core::abi;
use ethers_core::utils::keccak256;

use super::authorization::batch_token;
use crate::state::TradeBatch;

/// Number of public inputs of the settlement key.
pub const AGGREGATE_INPUTS: usize = 1;

/// Batch challenge `tau`.
pub fn batch_challenge(batch: &TradeBatch) -> FieldElement {
    hash_to_field(&keccak256(abi::encode(&[batch_token(batch)])))
}

/// `[tau]`
pub fn aggregate_inputs(batch: &TradeBatch) -> Vec<FieldElement> {
    vec![batch_challenge(batch)]
}
