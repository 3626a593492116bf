//! Admin instructions (authority only).

mod insert_cm;
mod register_destination;

pub use insert_cm::process_insert_cm;
pub use register_destination::process_register_destination;
