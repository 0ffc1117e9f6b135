//! Pack draw engine: pools, draws, and the effects of a draw.
//!
//! ## Opening a pack
//!
//! 1. Dequeue the oldest owned pack. It is consumed even when the open
//!    fails, so one entry is never opened twice.
//! 2. Validate the entry and resolve its pool. No side effect happens
//!    before both checks pass.
//! 3. Draw `card_count` cards independently, with replacement.
//! 4. In draw order, register each card with the battle plugin or grant
//!    its item. A card whose item cannot be resolved is still part of the
//!    result; only its grant is skipped.

use std::sync::Arc;

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::inventory::{BoosterInventory, MAX_PACK_CARDS};
use super::pool::WeightedPool;
use crate::config::BoosterConfig;
use crate::core::{BoosterError, CardIndex, DrawRng, PackTypeId, Result, Unresolved};
use crate::host::BoosterHost;

/// Smallest card count an open accepts unless configured otherwise.
pub const DEFAULT_MIN_OPEN_CARDS: u32 = 2;

/// Drawn cards, in draw order.
pub type DrawnCards = SmallVec<[CardIndex; 8]>;

/// Outcome of a successful open.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PackOpening {
    /// Pack type that was opened.
    pub pack_type: PackTypeId,
    /// Drawn cards, in draw order. Duplicates are possible.
    pub cards: DrawnCards,
    /// Artwork of the pack type.
    pub booster_image: String,
    /// Drawn cards whose item grant was skipped.
    pub ungranted: SmallVec<[CardIndex; 4]>,
}

impl PackOpening {
    /// Number of drawn cards.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Check if nothing was drawn.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }
}

/// Draws cards from rarity-weighted pools and applies the results.
///
/// Pools are built once from the configuration and never change.
#[derive(Clone, Debug)]
pub struct PackDrawEngine {
    config: Arc<BoosterConfig>,
    pools: FxHashMap<PackTypeId, WeightedPool>,
    min_open_cards: u32,
}

impl PackDrawEngine {
    /// Build a pool for every configured pack type.
    ///
    /// Pack types with nothing drawable get no pool; opening one fails
    /// with `ResolutionFailure`.
    #[must_use]
    pub fn new(config: Arc<BoosterConfig>) -> Self {
        let mut pools = FxHashMap::default();
        for pack_type in config.pack_types() {
            match WeightedPool::build(pack_type, config.cards()) {
                Some(pool) => {
                    pools.insert(pack_type.id, pool);
                }
                None => {
                    tracing::warn!(pack_type = %pack_type.id, "pack type has no drawable cards");
                }
            }
        }

        Self {
            config,
            pools,
            min_open_cards: DEFAULT_MIN_OPEN_CARDS,
        }
    }

    /// Change the smallest card count an open accepts.
    #[must_use]
    pub fn with_min_open_cards(mut self, minimum: u32) -> Self {
        self.min_open_cards = minimum;
        self
    }

    /// Smallest card count an open accepts.
    #[must_use]
    pub fn min_open_cards(&self) -> u32 {
        self.min_open_cards
    }

    /// Shared configuration.
    #[must_use]
    pub fn config(&self) -> &Arc<BoosterConfig> {
        &self.config
    }

    /// Pool of a pack type.
    #[must_use]
    pub fn pool(&self, pack_type: PackTypeId) -> Option<&WeightedPool> {
        self.pools.get(&pack_type)
    }

    /// Draw `count` cards from a pack type's pool without applying them.
    pub fn draw(&self, pack_type: PackTypeId, count: u32, rng: &mut DrawRng) -> Result<DrawnCards> {
        let pool = self
            .pool(pack_type)
            .ok_or(BoosterError::ResolutionFailure(Unresolved::PackType(pack_type)))?;
        Ok((0..count).map(|_| pool.draw(rng)).collect())
    }

    /// Open the oldest owned pack, reporting failures to the caller.
    pub fn try_open_pack(
        &self,
        inventory: &mut BoosterInventory,
        rng: &mut DrawRng,
        host: &mut impl BoosterHost,
    ) -> Result<PackOpening> {
        let pack = inventory.get_next_pack()?;
        if !(self.min_open_cards..=MAX_PACK_CARDS).contains(&pack.card_count) {
            return Err(BoosterError::InvalidPackData {
                pack_type: pack.pack_type,
                card_count: pack.card_count,
                minimum: self.min_open_cards,
                maximum: MAX_PACK_CARDS,
            });
        }

        let booster_image = self
            .config
            .pack_type(pack.pack_type)
            .map(|p| p.booster_image.clone())
            .ok_or(BoosterError::ResolutionFailure(Unresolved::PackType(pack.pack_type)))?;
        let cards = self.draw(pack.pack_type, pack.card_count, rng)?;

        let mut ungranted = SmallVec::new();
        for &card in &cards {
            if self.config.battle_integration() {
                host.register_battle_card(card);
            } else if let Err(error) = self.grant(card, host) {
                tracing::warn!(%card, %error, "skipping item grant for drawn card");
                ungranted.push(card);
            }
        }

        tracing::info!(
            pack_type = %pack.pack_type,
            cards = ?cards,
            "booster pack opened"
        );
        Ok(PackOpening {
            pack_type: pack.pack_type,
            cards,
            booster_image,
            ungranted,
        })
    }

    /// Open the oldest owned pack.
    ///
    /// Never fails outward: any error is logged, shown to the player, and
    /// turned into `None`.
    pub fn open_pack(
        &self,
        inventory: &mut BoosterInventory,
        rng: &mut DrawRng,
        host: &mut impl BoosterHost,
    ) -> Option<PackOpening> {
        match self.try_open_pack(inventory, rng, host) {
            Ok(opening) => Some(opening),
            Err(error) => {
                tracing::error!(%error, "unable to open booster pack");
                host.show_message(error.player_message());
                None
            }
        }
    }

    fn grant(&self, card: CardIndex, host: &mut impl BoosterHost) -> Result<()> {
        let definition = self
            .config
            .cards()
            .get(card)
            .ok_or(BoosterError::ResolutionFailure(Unresolved::Card(card)))?;
        let item = definition
            .item
            .ok_or(BoosterError::ResolutionFailure(Unresolved::ItemReference(card)))?;
        host.gain_item(item, 1)
    }
}
