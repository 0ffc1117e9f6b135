//! Owned, unopened packs and the opening mode.
//!
//! The inventory belongs to the player's persistent state. It is a FIFO
//! queue: the first pack granted is the first pack opened. The queue is an
//! `im::Vector`, so taking a snapshot for the host's save is O(1).

use im::Vector;
use serde::{Deserialize, Serialize};

use crate::core::{BoosterError, PackTypeId, Result};

/// Most cards a single pack may yield. Every drawn card is held in memory
/// before any grant, so larger packs are refused when queued and when opened.
pub const MAX_PACK_CARDS: u32 = 1_000;

/// One unopened pack.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct OwnedPack {
    /// Pack type to draw from.
    pub pack_type: PackTypeId,
    /// Number of cards the pack yields.
    pub card_count: u32,
}

impl OwnedPack {
    /// Create a new pack entry.
    #[must_use]
    pub const fn new(pack_type: PackTypeId, card_count: u32) -> Self {
        Self {
            pack_type,
            card_count,
        }
    }
}

/// Whether an open request stops after one pack or drains the queue.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum OpenMode {
    /// Open exactly one pack.
    #[default]
    Single,
    /// Keep opening until the queue is empty.
    All,
}

/// FIFO queue of owned packs plus the opening mode flag.
///
/// ## Example
///
/// ```
/// use booster_packs::packs::BoosterInventory;
///
/// let mut inventory = BoosterInventory::new();
/// inventory.add_pack(0, 5).unwrap();
/// inventory.add_pack(1, 3).unwrap();
///
/// assert!(inventory.has_packs());
/// assert_eq!(inventory.get_next_pack().unwrap().pack_type.raw(), 0);
/// assert_eq!(inventory.len(), 1);
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoosterInventory {
    packs: Vector<OwnedPack>,
    mode: OpenMode,
    /// Packs queued with fewer cards than an open accepts get a warning.
    #[serde(skip)]
    open_minimum: Option<u32>,
}

impl BoosterInventory {
    /// Create an empty inventory in single-open mode.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Warn when a pack is queued below the card count an open requires.
    #[must_use]
    pub fn with_open_minimum(mut self, minimum: u32) -> Self {
        self.open_minimum = Some(minimum);
        self
    }

    /// Queue a pack at the tail.
    ///
    /// `pack_type` must be non-negative and `card_count` in
    /// `1..=MAX_PACK_CARDS`; on anything else this returns `InvalidArgument`
    /// and leaves the queue
    /// untouched. Arguments are taken as `i64` because they come straight
    /// from host command arguments. Returns the queued entry.
    pub fn add_pack(&mut self, pack_type: i64, card_count: i64) -> Result<OwnedPack> {
        let pack_type = u32::try_from(pack_type).map_err(|_| {
            BoosterError::invalid_argument(
                "boosterNum",
                format!("pack type must be a non-negative integer, got {pack_type}"),
            )
        })?;
        let card_count = match u32::try_from(card_count) {
            Ok(n) if (1..=MAX_PACK_CARDS).contains(&n) => n,
            _ => {
                return Err(BoosterError::invalid_argument(
                    "cardsOpened",
                    format!("card count must be between 1 and {MAX_PACK_CARDS}, got {card_count}"),
                ))
            }
        };

        let pack = OwnedPack::new(PackTypeId::new(pack_type), card_count);
        self.push(pack);
        Ok(pack)
    }

    /// Queue an already validated pack at the tail.
    pub fn push(&mut self, pack: OwnedPack) {
        if let Some(minimum) = self.open_minimum {
            if pack.card_count < minimum {
                tracing::warn!(
                    pack_type = %pack.pack_type,
                    card_count = pack.card_count,
                    minimum,
                    "queued a pack that opening will reject"
                );
            }
        }
        tracing::info!(pack_type = %pack.pack_type, card_count = pack.card_count, "booster pack added");
        self.packs.push_back(pack);
    }

    /// Whether any pack is queued.
    #[must_use]
    pub fn has_packs(&self) -> bool {
        !self.packs.is_empty()
    }

    /// Remove and return the oldest pack.
    ///
    /// Returns `EmptyQueue` when nothing is queued.
    pub fn get_next_pack(&mut self) -> Result<OwnedPack> {
        self.packs.pop_front().ok_or(BoosterError::EmptyQueue)
    }

    /// The pack `get_next_pack` would return, without removing it.
    #[must_use]
    pub fn peek_next_pack(&self) -> Option<&OwnedPack> {
        self.packs.front()
    }

    /// Number of queued packs.
    #[must_use]
    pub fn len(&self) -> usize {
        self.packs.len()
    }

    /// Check if no pack is queued.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.packs.is_empty()
    }

    /// Iterate over queued packs, oldest first.
    pub fn iter(&self) -> impl Iterator<Item = &OwnedPack> {
        self.packs.iter()
    }

    /// Set the opening mode: `true` opens one pack, `false` opens all.
    pub fn set_open_mode(&mut self, single: bool) {
        self.mode = if single { OpenMode::Single } else { OpenMode::All };
    }

    /// Whether the current mode opens a single pack.
    #[must_use]
    pub fn is_single_mode(&self) -> bool {
        self.mode == OpenMode::Single
    }

    /// Current opening mode.
    #[must_use]
    pub fn open_mode(&self) -> OpenMode {
        self.mode
    }
}
