//! Opening scene layout: artwork names and where revealed cards land.
//!
//! Only the opening sequence reads this. Coordinates are offsets from the
//! screen centre in host pixels; the crate never interprets them.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::params::{decode_list, decode_record, parse_int, parse_text, SCENE_CONFIG_PARAM};
use super::report::{IssueLocation, LoadReport};

/// Final resting offset of one revealed card.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CardSlot {
    /// Horizontal offset.
    pub x: i32,
    /// Vertical offset.
    pub y: i32,
}

impl CardSlot {
    /// Create a new slot.
    #[must_use]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

/// Scene artwork and card slots.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SceneLayout {
    /// Background image.
    pub back_image: String,
    /// Card back image.
    pub back_card: String,
    /// Slot per card position, in draw order. A malformed entry keeps its
    /// position as `None`.
    pub card_slots: Vec<Option<CardSlot>>,
}

impl SceneLayout {
    /// Create a layout with no card slots.
    #[must_use]
    pub fn new(back_image: impl Into<String>, back_card: impl Into<String>) -> Self {
        Self {
            back_image: back_image.into(),
            back_card: back_card.into(),
            card_slots: Vec::new(),
        }
    }

    /// Add a card slot.
    #[must_use]
    pub fn with_slot(mut self, slot: CardSlot) -> Self {
        self.card_slots.push(Some(slot));
        self
    }

    /// Slot for the card at `position` in a pack, if one is configured.
    #[must_use]
    pub fn slot(&self, position: usize) -> Option<CardSlot> {
        self.card_slots.get(position).copied().flatten()
    }

    /// Decode the `Booster Scene Configuration` parameter.
    ///
    /// Bad card positions are reported and leave an empty slot, so later
    /// positions keep their index. A missing or undecodable
    /// scene object yields `None`.
    pub fn load(raw: &str, report: &mut LoadReport) -> Option<Self> {
        let location = IssueLocation::Parameter(SCENE_CONFIG_PARAM);
        let object: serde_json::Map<String, Value> = match decode_record(raw) {
            Ok(object) => object,
            Err(message) => {
                report.push(location, message);
                return None;
            }
        };

        let back_image = parse_text(object.get("BackImage"), "BackImage");
        let back_card = parse_text(object.get("BackCard"), "BackCard");
        let (back_image, back_card) = match (back_image, back_card) {
            (Ok(image), Ok(card)) => (image, card),
            (Err(message), _) | (_, Err(message)) => {
                report.push(location, message);
                return None;
            }
        };

        let mut layout = Self::new(back_image, back_card);
        let positions = match object.get("card positions") {
            Some(Value::String(s)) => decode_list(s),
            Some(inline @ Value::Array(_)) => decode_list(&inline.to_string()),
            _ => Err("missing `card positions`".to_string()),
        };
        match positions {
            Ok(entries) => {
                for (n, entry) in entries.iter().enumerate() {
                    let slot = parse_slot(entry)
                        .map_err(|message| report.push(IssueLocation::CardSlot(n), message))
                        .ok();
                    layout.card_slots.push(slot);
                }
            }
            Err(message) => report.push(location, message),
        }

        tracing::debug!(slots = layout.card_slots.len(), "loaded booster scene layout");
        Some(layout)
    }
}

fn parse_slot(raw: &str) -> Result<CardSlot, String> {
    let object: serde_json::Map<String, Value> = decode_record(raw)?;
    let x = parse_int(object.get("xPos"), "xPos")?;
    let y = parse_int(object.get("yPos"), "yPos")?;
    let x = i32::try_from(x).map_err(|_| format!("`xPos` out of range: {x}"))?;
    let y = i32::try_from(y).map_err(|_| format!("`yPos` out of range: {y}"))?;
    Ok(CardSlot::new(x, y))
}
