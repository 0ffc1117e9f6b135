//! Shared fixtures: encoded plugin parameters and tracing setup.

#![allow(dead_code)]

use serde_json::{json, Value};

use booster_packs::PluginParameters;

/// Install a test subscriber once; later calls are no-ops.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

/// Encode records the way the host stores list parameters.
pub fn encode_list(items: &[Value]) -> String {
    let encoded: Vec<String> = items.iter().map(Value::to_string).collect();
    json!(encoded).to_string()
}

/// One pack type entry.
pub fn pack(cards: &[u32], image: &str) -> Value {
    let cards: Vec<String> = cards.iter().map(u32::to_string).collect();
    json!({ "cards": json!(cards).to_string(), "boosterImage": image })
}

/// One standalone card entry.
pub fn card(rarity: u32, item: u32) -> Value {
    json!({ "Rarity": rarity.to_string(), "gainItem": item.to_string() })
}

/// Scene with one slot per `(x, y)`.
pub fn scene(slots: &[(i32, i32)]) -> String {
    let positions: Vec<Value> = slots
        .iter()
        .map(|(x, y)| json!({ "xPos": x.to_string(), "yPos": y.to_string() }))
        .collect();
    json!({
        "BackImage": "booster_bg",
        "BackCard": "card_back",
        "card positions": encode_list(&positions),
    })
    .to_string()
}

/// Cards 0..=7 where card `n` grants item `100 + n`; card 5 has rarity 1,
/// card 7 rarity 3, everything else rarity 2. Pack 0 is `[5, 7]`, pack 1 is
/// `[0, 1, 2]`.
pub fn standard_params() -> PluginParameters {
    let cards: Vec<Value> = (0..8)
        .map(|n| {
            let rarity = match n {
                5 => 1,
                7 => 3,
                _ => 2,
            };
            card(rarity, 100 + n)
        })
        .collect();

    PluginParameters::new()
        .with_cards(encode_list(&cards))
        .with_booster_packs(encode_list(&[pack(&[5, 7], "starter"), pack(&[0, 1, 2], "blue")]))
        .with_scene(scene(&[(-200, 100), (0, 100), (200, 100)]))
}
