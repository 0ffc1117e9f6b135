//! Core types: identifiers, errors, and RNG.
//!
//! Everything else in the crate is built on these. They carry no
//! configuration and no game state.

pub mod error;
pub mod ids;
pub mod rng;

pub use error::{BoosterError, Result, Unresolved};
pub use ids::{CardIndex, ItemId, PackTypeId};
pub use rng::{DrawRng, DrawRngState};
