//! The seam between the pack logic and the host game.
//!
//! Games implement `BoosterHost` to receive the side effects of an open:
//! battle card registrations, item grants, and player-facing messages.
//! Diagnostics go through `tracing` and are not part of this trait.

use rustc_hash::{FxHashMap, FxHashSet};

use crate::core::{BoosterError, CardIndex, ItemId, Result, Unresolved};

/// Host services the pack logic writes to.
///
/// All calls are fire-and-forget from the caller's perspective and must not
/// block.
pub trait BoosterHost {
    /// Append a card to the battle plugin's global card list.
    ///
    /// Duplicates are expected.
    fn register_battle_card(&mut self, card: CardIndex);

    /// Add `amount` of an item to the party inventory.
    ///
    /// Returns `ResolutionFailure` when the host has no such item.
    fn gain_item(&mut self, item: ItemId, amount: u32) -> Result<()>;

    /// Show a short message in the game's message window.
    fn show_message(&mut self, text: &str);
}

/// In-memory host that records every side effect.
///
/// Useful for headless tools and tests. Leave `known_items` empty to accept
/// every item id.
///
/// ## Example
///
/// ```
/// use booster_packs::host::{BoosterHost, RecordingHost};
/// use booster_packs::core::{CardIndex, ItemId};
///
/// let mut host = RecordingHost::new().with_known_items([ItemId::new(3)]);
///
/// host.register_battle_card(CardIndex::new(5));
/// assert!(host.gain_item(ItemId::new(3), 1).is_ok());
/// assert!(host.gain_item(ItemId::new(4), 1).is_err());
///
/// assert_eq!(host.battle_cards, vec![CardIndex::new(5)]);
/// assert_eq!(host.item_count(ItemId::new(3)), 1);
/// ```
#[derive(Clone, Debug, Default)]
pub struct RecordingHost {
    /// Battle card list, in registration order.
    pub battle_cards: Vec<CardIndex>,
    /// Granted item totals.
    pub items: FxHashMap<ItemId, u32>,
    /// Messages shown to the player.
    pub messages: Vec<String>,
    /// Item ids the host can resolve. Empty accepts everything.
    pub known_items: FxHashSet<ItemId>,
}

impl RecordingHost {
    /// Create a host with no recorded effects.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Restrict grantable items to the given ids.
    #[must_use]
    pub fn with_known_items(mut self, items: impl IntoIterator<Item = ItemId>) -> Self {
        self.known_items.extend(items);
        self
    }

    /// Amount of an item granted so far.
    #[must_use]
    pub fn item_count(&self, item: ItemId) -> u32 {
        self.items.get(&item).copied().unwrap_or(0)
    }

    /// Total units granted across all items.
    #[must_use]
    pub fn total_items(&self) -> u32 {
        self.items.values().sum()
    }

    /// True when no side effect reached the game world.
    ///
    /// Messages do not count.
    #[must_use]
    pub fn world_untouched(&self) -> bool {
        self.battle_cards.is_empty() && self.items.is_empty()
    }
}

impl BoosterHost for RecordingHost {
    fn register_battle_card(&mut self, card: CardIndex) {
        self.battle_cards.push(card);
    }

    fn gain_item(&mut self, item: ItemId, amount: u32) -> Result<()> {
        if !self.known_items.is_empty() && !self.known_items.contains(&item) {
            return Err(BoosterError::ResolutionFailure(Unresolved::Item(item)));
        }
        *self.items.entry(item).or_insert(0) += amount;
        Ok(())
    }

    fn show_message(&mut self, text: &str) {
        self.messages.push(text.to_string());
    }
}
