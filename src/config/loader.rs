//! Strict configuration loading.
//!
//! The loader turns `PluginParameters` into a typed, immutable
//! `BoosterConfig` in one pass. Every malformed entry is recorded in a
//! `LoadReport` and skipped; well-formed entries are always kept, so one
//! broken card never takes a whole pack type down with it.

use rustc_hash::FxHashMap;
use serde::Deserialize;
use serde_json::Value;
use smallvec::SmallVec;
use std::num::NonZeroU32;

use super::params::{
    decode_list, decode_record, parse_index, parse_positive, parse_text, PluginParameters,
    BATTLE_CARDS_PARAM, CARD_CONFIG_PARAM, PACK_CONFIG_PARAM,
};
use super::report::{IssueLocation, LoadReport};
use super::scene::SceneLayout;
use crate::cards::{CardDefinition, CardRegistry, MAX_CARD_RARITY};
use crate::core::{BoosterError, CardIndex, ItemId, PackTypeId, Result};

/// Card indices of a pack type.
///
/// Most packs list a handful of cards, so they stay inline.
pub type PackMembers = SmallVec<[CardIndex; 16]>;

/// A configured pack type.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PackType {
    /// Position in the pack type list.
    pub id: PackTypeId,
    /// Member cards with a valid rarity, in configuration order.
    pub members: PackMembers,
    /// Booster artwork shown before the cards are revealed.
    pub booster_image: String,
}

impl PackType {
    /// Create a pack type with no members.
    #[must_use]
    pub fn new(id: PackTypeId, booster_image: impl Into<String>) -> Self {
        Self {
            id,
            members: SmallVec::new(),
            booster_image: booster_image.into(),
        }
    }

    /// Add a member card (builder pattern).
    #[must_use]
    pub fn with_card(mut self, card: CardIndex) -> Self {
        self.members.push(card);
        self
    }

    /// Add several member cards.
    #[must_use]
    pub fn with_cards(mut self, cards: impl IntoIterator<Item = CardIndex>) -> Self {
        self.members.extend(cards);
        self
    }
}

/// Immutable configuration shared by the draw engine and the opening scene.
///
/// ## Example
///
/// ```
/// use std::num::NonZeroU32;
/// use booster_packs::cards::{CardDefinition, CardRegistry};
/// use booster_packs::config::{BoosterConfig, PackType};
/// use booster_packs::core::{CardIndex, PackTypeId};
///
/// let cards: CardRegistry = [(5, 1), (7, 3)]
///     .into_iter()
///     .map(|(i, r)| CardDefinition::new(CardIndex::new(i), NonZeroU32::new(r).unwrap()))
///     .collect();
///
/// let config = BoosterConfig::new(cards).with_pack_type(
///     PackType::new(PackTypeId::new(0), "starter")
///         .with_cards([CardIndex::new(5), CardIndex::new(7)]),
/// );
///
/// assert_eq!(config.pack_type(PackTypeId::new(0)).unwrap().booster_image, "starter");
/// ```
#[derive(Clone, Debug, Default)]
pub struct BoosterConfig {
    cards: CardRegistry,
    pack_types: FxHashMap<PackTypeId, PackType>,
    battle_integration: bool,
    scene: Option<SceneLayout>,
}

impl BoosterConfig {
    /// Create a standalone configuration around a card registry.
    #[must_use]
    pub fn new(cards: CardRegistry) -> Self {
        Self {
            cards,
            ..Self::default()
        }
    }

    /// Add a pack type (builder pattern). Replaces one with the same id.
    #[must_use]
    pub fn with_pack_type(mut self, pack_type: PackType) -> Self {
        self.pack_types.insert(pack_type.id, pack_type);
        self
    }

    /// Register drawn cards with the battle plugin instead of granting items.
    #[must_use]
    pub fn with_battle_integration(mut self) -> Self {
        self.battle_integration = true;
        self
    }

    /// Set the scene layout.
    #[must_use]
    pub fn with_scene(mut self, scene: SceneLayout) -> Self {
        self.scene = Some(scene);
        self
    }

    /// Card definitions.
    #[must_use]
    pub fn cards(&self) -> &CardRegistry {
        &self.cards
    }

    /// Get a pack type by id.
    #[must_use]
    pub fn pack_type(&self, id: PackTypeId) -> Option<&PackType> {
        self.pack_types.get(&id)
    }

    /// Pack types in id order.
    pub fn pack_types(&self) -> impl Iterator<Item = &PackType> {
        let mut types: Vec<_> = self.pack_types.values().collect();
        types.sort_by_key(|p| p.id);
        types.into_iter()
    }

    /// Whether the battle plugin's card list is in use.
    #[must_use]
    pub fn battle_integration(&self) -> bool {
        self.battle_integration
    }

    /// Scene layout, when configured.
    #[must_use]
    pub fn scene(&self) -> Option<&SceneLayout> {
        self.scene.as_ref()
    }

    /// Load and validate everything in one pass.
    ///
    /// Always returns a usable configuration; whatever had to be skipped is
    /// listed in the report.
    pub fn load(params: &PluginParameters) -> (Self, LoadReport) {
        let mut report = LoadReport::new();

        let (cards, battle_integration) = match params.card_source() {
            Some((raw, battle)) => (load_cards(raw, battle, &mut report), battle),
            None => {
                report.push(
                    IssueLocation::Parameter(CARD_CONFIG_PARAM),
                    format!("missing; supply it or the battle plugin's `{BATTLE_CARDS_PARAM}`"),
                );
                (CardRegistry::new(), false)
            }
        };

        let mut config = Self {
            cards,
            pack_types: FxHashMap::default(),
            battle_integration,
            scene: None,
        };

        match &params.booster_packs {
            Some(raw) => config.load_pack_types(raw, &mut report),
            None => report.push(IssueLocation::Parameter(PACK_CONFIG_PARAM), "missing"),
        }

        config.scene = params
            .scene
            .as_deref()
            .and_then(|raw| SceneLayout::load(raw, &mut report));

        tracing::info!(
            cards = config.cards.len(),
            pack_types = config.pack_types.len(),
            battle_integration,
            issues = report.len(),
            "loaded booster configuration"
        );
        (config, report)
    }

    /// Like [`BoosterConfig::load`], but a missing or undecodable top-level
    /// parameter is an error instead of a report entry.
    pub fn load_strict(params: &PluginParameters) -> Result<(Self, LoadReport)> {
        let (config, report) = Self::load(params);
        if let Some(issue) = report.parameter_issues().next() {
            return Err(BoosterError::Config(issue.to_string()));
        }
        Ok((config, report))
    }

    fn load_pack_types(&mut self, raw: &str, report: &mut LoadReport) {
        let entries = match decode_list(raw) {
            Ok(entries) => entries,
            Err(message) => {
                report.push(IssueLocation::Parameter(PACK_CONFIG_PARAM), message);
                return;
            }
        };

        for (n, entry) in entries.iter().enumerate() {
            let Ok(raw_id) = u32::try_from(n) else {
                report.push(IssueLocation::PackType(n), "too many pack types");
                break;
            };
            if let Some(pack_type) = self.load_pack_type(PackTypeId::new(raw_id), entry, report) {
                self.pack_types.insert(pack_type.id, pack_type);
            }
        }
    }

    fn load_pack_type(
        &self,
        id: PackTypeId,
        raw: &str,
        report: &mut LoadReport,
    ) -> Option<PackType> {
        let n = id.raw() as usize;
        let record: RawPackType = match decode_record(raw) {
            Ok(record) => record,
            Err(message) => {
                report.push(IssueLocation::PackType(n), message);
                return None;
            }
        };

        let booster_image = match parse_text(record.booster_image.as_ref(), "boosterImage") {
            Ok(image) => image,
            Err(message) => {
                report.push(IssueLocation::PackType(n), message);
                return None;
            }
        };

        let listed = match record.cards.as_ref() {
            Some(Value::String(s)) => decode_list(s),
            Some(inline @ Value::Array(_)) => decode_list(&inline.to_string()),
            _ => Err("missing `cards`".to_string()),
        };
        let listed = match listed {
            Ok(listed) => listed,
            Err(message) => {
                report.push(IssueLocation::PackType(n), message);
                return None;
            }
        };

        let mut pack_type = PackType::new(id, booster_image);
        for (position, card) in listed.iter().enumerate() {
            let card = match card.trim().parse::<i64>() {
                Ok(card) => card,
                Err(_) => {
                    report.push(
                        IssueLocation::PackType(n),
                        format!("member {position} is not a card index: {card:?}"),
                    );
                    continue;
                }
            };
            let location = IssueLocation::PackMember { pack: n, card };
            let index = match u32::try_from(card) {
                Ok(index) => CardIndex::new(index),
                Err(_) => {
                    report.push(location, "negative card index");
                    continue;
                }
            };
            if self.cards.rarity_of(index).is_none() {
                report.push(location, "card has no valid rarity");
                continue;
            }
            pack_type.members.push(index);
        }

        if pack_type.members.is_empty() {
            report.push(IssueLocation::PackType(n), "no drawable cards");
        }
        Some(pack_type)
    }
}

#[derive(Debug, Deserialize)]
struct RawPackType {
    cards: Option<Value>,
    #[serde(rename = "boosterImage")]
    booster_image: Option<Value>,
}

#[derive(Debug, Deserialize)]
struct RawCard {
    #[serde(rename = "Rarity")]
    rarity: Option<Value>,
    #[serde(rename = "gainItem")]
    gain_item: Option<Value>,
    #[serde(rename = "Image_Player_1")]
    image: Option<Value>,
    #[serde(rename = "Name")]
    name: Option<Value>,
}

fn load_cards(raw: &str, battle: bool, report: &mut LoadReport) -> CardRegistry {
    let param = if battle { BATTLE_CARDS_PARAM } else { CARD_CONFIG_PARAM };
    let entries = match decode_list(raw) {
        Ok(entries) => entries,
        Err(message) => {
            report.push(IssueLocation::Parameter(param), message);
            return CardRegistry::new();
        }
    };

    let mut registry = CardRegistry::with_slots(entries.len());
    for (n, entry) in entries.iter().enumerate() {
        let Ok(raw_index) = u32::try_from(n) else {
            report.push(IssueLocation::Card(n), "too many cards");
            break;
        };
        if let Some(card) = load_card(CardIndex::new(raw_index), entry, battle, report) {
            registry.insert(card);
        }
    }
    registry
}

fn load_card(
    index: CardIndex,
    raw: &str,
    battle: bool,
    report: &mut LoadReport,
) -> Option<CardDefinition> {
    let location = || IssueLocation::Card(index.as_usize());
    let record: RawCard = match decode_record(raw) {
        Ok(record) => record,
        Err(message) => {
            report.push(location(), message);
            return None;
        }
    };

    let rarity = match parse_positive(record.rarity.as_ref(), "Rarity") {
        Ok(rarity) if rarity > MAX_CARD_RARITY => {
            report.push(
                location(),
                format!("`Rarity` must be at most {MAX_CARD_RARITY}, got {rarity}"),
            );
            return None;
        }
        Ok(rarity) => NonZeroU32::new(rarity)?,
        Err(message) => {
            report.push(location(), message);
            return None;
        }
    };

    let mut card = CardDefinition::new(index, rarity);

    // Battle cards are registered, not granted, so `gainItem` is irrelevant.
    if !battle {
        match parse_index(record.gain_item.as_ref(), "gainItem") {
            Ok(item) => card.item = Some(ItemId::new(item)),
            Err(message) => report.push(location(), message),
        }
    }
    if let Some(Value::String(image)) = record.image.filter(|v| v.as_str() != Some("")) {
        card.image = Some(image);
    }
    if let Some(Value::String(name)) = record.name.filter(|v| v.as_str() != Some("")) {
        card.name = Some(name);
    }
    Some(card)
}
