//! Admin instructions (authority only).

mod set_commitment;

pub use set_commitment::process_set_commitment;
