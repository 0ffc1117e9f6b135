//! Card registry for definition lookup.
//!
//! The `CardRegistry` mirrors the host's card list slot for slot. Entries the
//! loader rejected stay as empty slots so that every other card keeps the
//! index the host (and the battle plugin) knows it by.

use std::num::NonZeroU32;

use super::definition::CardDefinition;
use crate::core::CardIndex;

/// Registry of card definitions, indexed by `CardIndex`.
///
/// ## Example
///
/// ```
/// use std::num::NonZeroU32;
/// use booster_packs::cards::{CardDefinition, CardRegistry};
/// use booster_packs::core::CardIndex;
///
/// let mut registry = CardRegistry::with_slots(3);
/// registry.insert(CardDefinition::new(CardIndex::new(2), NonZeroU32::new(4).unwrap()));
///
/// assert_eq!(registry.rarity_of(CardIndex::new(2)).map(|r| r.get()), Some(4));
/// assert!(registry.get(CardIndex::new(0)).is_none());
/// ```
#[derive(Clone, Debug, Default)]
pub struct CardRegistry {
    slots: Vec<Option<CardDefinition>>,
}

impl CardRegistry {
    /// Create a new empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a registry with `len` empty slots.
    #[must_use]
    pub fn with_slots(len: usize) -> Self {
        Self {
            slots: vec![None; len],
        }
    }

    /// Store a definition at its own index, growing the slot list if needed.
    ///
    /// Replaces any definition already in that slot.
    pub fn insert(&mut self, card: CardDefinition) {
        let slot = card.index.as_usize();
        if slot >= self.slots.len() {
            self.slots.resize(slot + 1, None);
        }
        self.slots[slot] = Some(card);
    }

    /// Get a card definition by index.
    #[must_use]
    pub fn get(&self, index: CardIndex) -> Option<&CardDefinition> {
        self.slots.get(index.as_usize()).and_then(Option::as_ref)
    }

    /// Rarity of a card, if it has a valid definition.
    #[must_use]
    pub fn rarity_of(&self, index: CardIndex) -> Option<NonZeroU32> {
        self.get(index).map(|c| c.rarity)
    }

    /// Check if a card index has a valid definition.
    #[must_use]
    pub fn contains(&self, index: CardIndex) -> bool {
        self.get(index).is_some()
    }

    /// Number of slots, valid or not. Matches the host's card list length.
    #[must_use]
    pub fn slot_count(&self) -> usize {
        self.slots.len()
    }

    /// Number of valid definitions.
    #[must_use]
    pub fn len(&self) -> usize {
        self.slots.iter().filter(|s| s.is_some()).count()
    }

    /// Check if the registry holds no valid definitions.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Iterate over valid definitions in index order.
    pub fn iter(&self) -> impl Iterator<Item = &CardDefinition> {
        self.slots.iter().flatten()
    }
}

impl FromIterator<CardDefinition> for CardRegistry {
    fn from_iter<I: IntoIterator<Item = CardDefinition>>(iter: I) -> Self {
        let mut registry = Self::new();
        for card in iter {
            registry.insert(card);
        }
        registry
    }
}
