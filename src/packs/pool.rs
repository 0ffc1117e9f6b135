//! Rarity-expanded card pools.
//!
//! A pool lists each member card once per point of rarity, so a uniform
//! pick over pool positions is a weighted pick over cards:
//! `P(card) = rarity(card) / pool.len()`.

use crate::cards::{CardRegistry, MAX_CARD_RARITY};
use crate::config::PackType;
use crate::core::{CardIndex, DrawRng, PackTypeId};

/// Weighted pool for one pack type. Never empty, never mutated after build.
///
/// ## Example
///
/// ```
/// use std::num::NonZeroU32;
/// use booster_packs::cards::{CardDefinition, CardRegistry};
/// use booster_packs::config::PackType;
/// use booster_packs::core::{CardIndex, PackTypeId};
/// use booster_packs::packs::WeightedPool;
///
/// let cards: CardRegistry = [(5, 1), (7, 3)]
///     .into_iter()
///     .map(|(i, r)| CardDefinition::new(CardIndex::new(i), NonZeroU32::new(r).unwrap()))
///     .collect();
/// let pack = PackType::new(PackTypeId::new(0), "starter")
///     .with_cards([CardIndex::new(5), CardIndex::new(7)]);
///
/// let pool = WeightedPool::build(&pack, &cards).unwrap();
/// assert_eq!(pool.len(), 4);
/// assert_eq!(pool.count_of(CardIndex::new(7)), 3);
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct WeightedPool {
    pack_type: PackTypeId,
    entries: Vec<CardIndex>,
}

impl WeightedPool {
    /// Expand a pack type's members by rarity.
    ///
    /// Members without a valid definition, or rarer than `MAX_CARD_RARITY`
    /// allows, are skipped. Returns `None` when nothing is left to draw.
    #[must_use]
    pub fn build(pack_type: &PackType, cards: &CardRegistry) -> Option<Self> {
        let mut entries = Vec::new();
        for &card in &pack_type.members {
            match cards.rarity_of(card) {
                Some(rarity) if rarity.get() <= MAX_CARD_RARITY => {
                    entries.extend(std::iter::repeat(card).take(rarity.get() as usize));
                }
                Some(rarity) => {
                    tracing::warn!(pack_type = %pack_type.id, %card, rarity = rarity.get(), "member rarity too high, skipped");
                }
                None => {
                    tracing::warn!(pack_type = %pack_type.id, %card, "member has no rarity, skipped");
                }
            }
        }

        if entries.is_empty() {
            return None;
        }
        tracing::debug!(pack_type = %pack_type.id, size = entries.len(), "built weighted pool");
        Some(Self {
            pack_type: pack_type.id,
            entries,
        })
    }

    /// Pack type this pool belongs to.
    #[must_use]
    pub fn pack_type(&self) -> PackTypeId {
        self.pack_type
    }

    /// Total pool size, the sum of member rarities.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Always false for a built pool.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// How many times a card appears.
    #[must_use]
    pub fn count_of(&self, card: CardIndex) -> usize {
        self.entries.iter().filter(|&&c| c == card).count()
    }

    /// Check if a card can be drawn from this pool.
    #[must_use]
    pub fn contains(&self, card: CardIndex) -> bool {
        self.entries.contains(&card)
    }

    /// Probability of drawing `card` in one trial.
    #[must_use]
    pub fn probability(&self, card: CardIndex) -> f64 {
        self.count_of(card) as f64 / self.entries.len() as f64
    }

    /// Pool entries in construction order.
    #[must_use]
    pub fn entries(&self) -> &[CardIndex] {
        &self.entries
    }

    /// Draw one card, uniform over pool positions.
    pub fn draw(&self, rng: &mut DrawRng) -> CardIndex {
        // Entries are non-empty by construction.
        rng.choose(&self.entries)
            .copied()
            .unwrap_or(self.entries[0])
    }
}
