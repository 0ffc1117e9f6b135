//! Booster packs: owned-pack inventory, weighted pools, and drawing.
//!
//! ## Key Types
//!
//! - `BoosterInventory`: FIFO queue of unopened packs plus the open mode
//! - `WeightedPool`: Rarity-expanded card list for one pack type
//! - `PackDrawEngine`: Opens packs and applies the drawn cards
//! - `PackOpening`: Cards drawn by one open, with the pack artwork

pub mod engine;
pub mod inventory;
pub mod pool;

pub use engine::{DrawnCards, PackDrawEngine, PackOpening, DEFAULT_MIN_OPEN_CARDS};
pub use inventory::{BoosterInventory, OpenMode, OwnedPack, MAX_PACK_CARDS};
pub use pool::WeightedPool;
