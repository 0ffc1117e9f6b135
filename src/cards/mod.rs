//! Card system: definitions and registry.
//!
//! ## Key Types
//!
//! - `CardDefinition`: Static card data (rarity, granted item, artwork)
//! - `CardRegistry`: Lookup by `CardIndex`, aligned with the host card list

pub mod definition;
pub mod registry;

pub use definition::{CardDefinition, MAX_CARD_RARITY};
pub use registry::CardRegistry;
