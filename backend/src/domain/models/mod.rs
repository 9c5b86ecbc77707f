//! Domain model types for the bill splitter.
//!
//! These are the normalized, in-memory representations the services work
//! with, as opposed to the raw form-field DTOs in the `shared` crate.

pub mod bill;
pub mod participant;
pub mod state;

pub use bill::*;
pub use participant::*;
pub use state::*;
