//! Raw plugin parameters and the decoding helpers for their encoding.
//!
//! Host plugin parameters are structured text: a list parameter is a JSON
//! array whose elements are themselves JSON documents encoded as strings,
//! and numbers usually arrive as numeric strings. These helpers peel one
//! layer at a time and report failures as plain messages for the
//! `LoadReport`.

use rustc_hash::FxHashMap;
use serde::de::DeserializeOwned;
use serde_json::Value;

/// Parameter name of the pack type list.
pub const PACK_CONFIG_PARAM: &str = "Booster Pack Configuration";
/// Parameter name of the standalone card list.
pub const CARD_CONFIG_PARAM: &str = "Card Configuration";
/// Parameter name of the scene layout.
pub const SCENE_CONFIG_PARAM: &str = "Booster Scene Configuration";
/// Parameter name of the battle plugin's card list.
pub const BATTLE_CARDS_PARAM: &str = "Card Creation";

/// Plugin parameters as the host hands them over, still encoded.
///
/// The battle plugin's card list is kept apart from this plugin's own
/// parameters. Supplying it switches the loader into battle integration.
#[derive(Clone, Debug, Default)]
pub struct PluginParameters {
    /// `Booster Pack Configuration`
    pub booster_packs: Option<String>,
    /// `Card Configuration`
    pub cards: Option<String>,
    /// `Booster Scene Configuration`
    pub scene: Option<String>,
    /// `Card Creation` from the battle plugin, when it is installed.
    pub battle_cards: Option<String>,
}

impl PluginParameters {
    /// Create an empty parameter set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Pick this plugin's parameters out of the host's name/value map.
    #[must_use]
    pub fn from_map(params: &FxHashMap<String, String>) -> Self {
        Self {
            booster_packs: params.get(PACK_CONFIG_PARAM).cloned(),
            cards: params.get(CARD_CONFIG_PARAM).cloned(),
            scene: params.get(SCENE_CONFIG_PARAM).cloned(),
            battle_cards: None,
        }
    }

    /// Set the pack type list.
    #[must_use]
    pub fn with_booster_packs(mut self, raw: impl Into<String>) -> Self {
        self.booster_packs = Some(raw.into());
        self
    }

    /// Set the standalone card list.
    #[must_use]
    pub fn with_cards(mut self, raw: impl Into<String>) -> Self {
        self.cards = Some(raw.into());
        self
    }

    /// Set the scene layout.
    #[must_use]
    pub fn with_scene(mut self, raw: impl Into<String>) -> Self {
        self.scene = Some(raw.into());
        self
    }

    /// Supply the battle plugin's card list, enabling battle integration.
    #[must_use]
    pub fn with_battle_cards(mut self, raw: impl Into<String>) -> Self {
        self.battle_cards = Some(raw.into());
        self
    }

    /// Card list to load and whether it comes from the battle plugin.
    #[must_use]
    pub fn card_source(&self) -> Option<(&str, bool)> {
        match (&self.battle_cards, &self.cards) {
            (Some(battle), _) => Some((battle.as_str(), true)),
            (None, Some(cards)) => Some((cards.as_str(), false)),
            (None, None) => None,
        }
    }
}

/// Decode a JSON array of encoded strings into its elements.
pub(crate) fn decode_list(raw: &str) -> Result<Vec<String>, String> {
    let values: Vec<Value> =
        serde_json::from_str(raw).map_err(|e| format!("not a JSON array: {e}"))?;
    values
        .into_iter()
        .enumerate()
        .map(|(i, v)| match v {
            Value::String(s) => Ok(s),
            // Hosts occasionally store inner documents unencoded.
            Value::Object(_) | Value::Array(_) | Value::Number(_) => Ok(v.to_string()),
            other => Err(format!("element {i} is {other}, expected an encoded string")),
        })
        .collect()
}

/// Decode one encoded JSON document into a typed record.
pub(crate) fn decode_record<T: DeserializeOwned>(raw: &str) -> Result<T, String> {
    serde_json::from_str(raw).map_err(|e| format!("malformed entry: {e}"))
}

/// Read an integer that may arrive as a number or a numeric string.
pub(crate) fn parse_int(value: Option<&Value>, field: &str) -> Result<i64, String> {
    match value {
        None | Some(Value::Null) => Err(format!("missing `{field}`")),
        Some(Value::Number(n)) => n
            .as_i64()
            .ok_or_else(|| format!("`{field}` is not an integer: {n}")),
        Some(Value::String(s)) => s
            .trim()
            .parse::<i64>()
            .map_err(|_| format!("`{field}` is not an integer: {s:?}")),
        Some(other) => Err(format!("`{field}` is not an integer: {other}")),
    }
}

/// Read an integer in `1..=u32::MAX`.
pub(crate) fn parse_positive(value: Option<&Value>, field: &str) -> Result<u32, String> {
    let n = parse_int(value, field)?;
    match u32::try_from(n) {
        Ok(n) if n > 0 => Ok(n),
        _ => Err(format!("`{field}` must be a positive integer, got {n}")),
    }
}

/// Read an integer in `0..=u32::MAX`.
pub(crate) fn parse_index(value: Option<&Value>, field: &str) -> Result<u32, String> {
    let n = parse_int(value, field)?;
    u32::try_from(n).map_err(|_| format!("`{field}` must be a non-negative integer, got {n}"))
}

/// Read a string field, rejecting missing and empty values.
pub(crate) fn parse_text(value: Option<&Value>, field: &str) -> Result<String, String> {
    match value {
        Some(Value::String(s)) if !s.is_empty() => Ok(s.clone()),
        Some(Value::String(_)) => Err(format!("`{field}` is empty")),
        None | Some(Value::Null) => Err(format!("missing `{field}`")),
        Some(other) => Err(format!("`{field}` is not a string: {other}")),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_decode_list_of_encoded_strings() {
        let raw = json!(["{\"a\":1}", "{\"a\":2}"]).to_string();
        let list = decode_list(&raw).unwrap();
        assert_eq!(list, vec!["{\"a\":1}".to_string(), "{\"a\":2}".to_string()]);
    }

    #[test]
    fn test_decode_list_accepts_inline_documents() {
        let raw = json!([{"a": 1}, "3"]).to_string();
        let list = decode_list(&raw).unwrap();
        assert_eq!(list[0], "{\"a\":1}");
        assert_eq!(list[1], "3");
    }

    #[test]
    fn test_decode_list_rejects_garbage() {
        assert!(decode_list("not json").is_err());
        assert!(decode_list("[true]").is_err());
    }

    #[test]
    fn test_parse_int_variants() {
        assert_eq!(parse_int(Some(&json!("12")), "x"), Ok(12));
        assert_eq!(parse_int(Some(&json!(" 7 ")), "x"), Ok(7));
        assert_eq!(parse_int(Some(&json!(3)), "x"), Ok(3));
        assert!(parse_int(Some(&json!("abc")), "x").is_err());
        assert!(parse_int(Some(&json!("")), "x").is_err());
        assert!(parse_int(None, "x").is_err());
        assert!(parse_int(Some(&json!(1.5)), "x").is_err());
    }

    #[test]
    fn test_parse_positive_and_index() {
        assert_eq!(parse_positive(Some(&json!("4")), "Rarity"), Ok(4));
        assert!(parse_positive(Some(&json!("0")), "Rarity").is_err());
        assert!(parse_positive(Some(&json!("-2")), "Rarity").is_err());

        assert_eq!(parse_index(Some(&json!("0")), "gainItem"), Ok(0));
        assert!(parse_index(Some(&json!("-1")), "gainItem").is_err());
    }

    #[test]
    fn test_parse_text() {
        assert_eq!(parse_text(Some(&json!("pack")), "boosterImage"), Ok("pack".into()));
        assert!(parse_text(Some(&json!("")), "boosterImage").is_err());
        assert!(parse_text(None, "boosterImage").is_err());
    }

    #[test]
    fn test_card_source_prefers_battle_list() {
        let params = PluginParameters::new().with_cards("[]");
        assert_eq!(params.card_source(), Some(("[]", false)));

        let params = params.with_battle_cards("[\"x\"]");
        assert_eq!(params.card_source(), Some(("[\"x\"]", true)));

        assert_eq!(PluginParameters::new().card_source(), None);
    }

    #[test]
    fn test_from_map() {
        let mut map = FxHashMap::default();
        map.insert(PACK_CONFIG_PARAM.to_string(), "[]".to_string());
        map.insert(SCENE_CONFIG_PARAM.to_string(), "{}".to_string());

        let params = PluginParameters::from_map(&map);
        assert_eq!(params.booster_packs.as_deref(), Some("[]"));
        assert_eq!(params.scene.as_deref(), Some("{}"));
        assert!(params.cards.is_none());
        assert!(params.battle_cards.is_none());
    }
}
