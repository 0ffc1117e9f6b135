//! # booster-packs
//!
//! Collectible booster packs for RPG plugins: players collect sealed packs,
//! then open them to draw cards from rarity-weighted pools.
//!
//! ## Design Principles
//!
//! 1. **Host-Agnostic**: Rendering, saving, and command dispatch belong to
//!    the host game. The crate talks to it only through `BoosterHost`.
//!
//! 2. **Validate Once**: Plugin parameters are checked in a single pass at
//!    startup. Everything after that works on typed, immutable tables.
//!
//! 3. **Never Crash the Host**: Commands and opens absorb their errors,
//!    log them, and tell the player.
//!
//! ## Drawing
//!
//! Each pack type has a weighted pool in which every member card appears
//! once per point of rarity. Drawing picks pool positions uniformly, with
//! replacement, so `P(card) = rarity / pool size` on every draw.
//!
//! ## Modules
//!
//! - `core`: Identifiers, errors, RNG
//! - `cards`: Card definitions and registry
//! - `config`: Parameter decoding, validation, load report, scene layout
//! - `packs`: Inventory, weighted pools, draw engine
//! - `host`: The trait the host game implements
//! - `commands`: Host command parsing and the plugin object
//! - `sequence`: Opening sequence state machine

pub mod core;
pub mod cards;
pub mod config;
pub mod packs;
pub mod host;
pub mod commands;
pub mod sequence;

// Re-export commonly used types
pub use crate::core::{
    BoosterError, Result, Unresolved,
    CardIndex, ItemId, PackTypeId,
    DrawRng, DrawRngState,
};

pub use crate::cards::{CardDefinition, CardRegistry};

pub use crate::config::{
    BoosterConfig, PackType, PluginParameters,
    LoadReport, LoadIssue, IssueLocation,
    SceneLayout, CardSlot,
};

pub use crate::packs::{
    BoosterInventory, OpenMode, OwnedPack,
    WeightedPool, PackDrawEngine, PackOpening,
};

pub use crate::host::{BoosterHost, RecordingHost};

pub use crate::commands::{BoosterPlugin, CommandArgs, CommandOutcome, PluginCommand};

pub use crate::sequence::{OpeningSequence, SequencePhase};
