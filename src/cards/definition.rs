//! Card definitions - static card data.
//!
//! A `CardDefinition` holds what the configuration says about one entry of
//! the card list: how common it is and what drawing it gives the player.
//! Definitions are built once by the config loader and never mutated.

use std::num::NonZeroU32;

use serde::{Deserialize, Serialize};

use crate::core::{CardIndex, ItemId};

/// Highest rarity a card may have. Pools hold one entry per point of
/// rarity, so this bounds pool memory per member.
pub const MAX_CARD_RARITY: u32 = 10_000;

/// Static card definition.
///
/// ## Example
///
/// ```
/// use std::num::NonZeroU32;
/// use booster_packs::cards::CardDefinition;
/// use booster_packs::core::{CardIndex, ItemId};
///
/// let card = CardDefinition::new(CardIndex::new(5), NonZeroU32::new(3).unwrap())
///     .with_item(ItemId::new(12))
///     .with_name("Ifrit");
///
/// assert_eq!(card.weight(), 3);
/// assert_eq!(card.item, Some(ItemId::new(12)));
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CardDefinition {
    /// Position in the card list.
    pub index: CardIndex,

    /// Relative draw weight. A card with rarity 3 sits in a pool three times.
    pub rarity: NonZeroU32,

    /// Item granted when the card is drawn without battle integration.
    ///
    /// `None` when the configuration has no usable `gainItem`.
    pub item: Option<ItemId>,

    /// Face image shown when the card is revealed.
    pub image: Option<String>,

    /// Display name, when the card list provides one.
    pub name: Option<String>,
}

impl CardDefinition {
    /// Create a new card definition.
    #[must_use]
    pub fn new(index: CardIndex, rarity: NonZeroU32) -> Self {
        Self {
            index,
            rarity,
            item: None,
            image: None,
            name: None,
        }
    }

    /// Set the grantable item (builder pattern).
    #[must_use]
    pub fn with_item(mut self, item: ItemId) -> Self {
        self.item = Some(item);
        self
    }

    /// Set the face image.
    #[must_use]
    pub fn with_image(mut self, image: impl Into<String>) -> Self {
        self.image = Some(image.into());
        self
    }

    /// Set the display name.
    #[must_use]
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Rarity as a plain count.
    #[must_use]
    pub fn weight(&self) -> u32 {
        self.rarity.get()
    }
}
