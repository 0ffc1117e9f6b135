//! Weighted draw tests.
//!
//! These tests verify pool construction and draw behavior:
//! - Pool multiset equals rarity-expanded membership
//! - Draws only return pool members
//! - Draw frequencies converge to rarity / pool size
//! - Draws apply the right side effects

mod common;

use std::num::NonZeroU32;
use std::sync::Arc;

use proptest::prelude::*;

use booster_packs::{
    BoosterConfig, BoosterInventory, CardDefinition, CardIndex, CardRegistry, DrawRng, ItemId,
    PackDrawEngine, PackType, PackTypeId, RecordingHost, WeightedPool,
};

fn loaded_engine() -> PackDrawEngine {
    common::init_tracing();
    let (config, report) = BoosterConfig::load(&common::standard_params());
    assert!(report.is_clean(), "{report}");
    PackDrawEngine::new(Arc::new(config))
}

/// Test the [5, 7] pool from the configuration.
#[test]
fn test_pool_from_configuration() {
    let engine = loaded_engine();

    let pool = engine.pool(PackTypeId::new(0)).expect("pack 0 should have a pool");
    let mut entries: Vec<u32> = pool.entries().iter().map(|c| c.raw()).collect();
    entries.sort();

    assert_eq!(entries, vec![5, 7, 7, 7]);
    assert_eq!(engine.pool(PackTypeId::new(1)).unwrap().len(), 6);
}

/// Test opening a (0, 2) pack: two cards from {5, 7} plus the starter image.
#[test]
fn test_open_starter_pack() {
    let engine = loaded_engine();
    let mut inventory = BoosterInventory::new();
    let mut rng = DrawRng::new(2024);
    let mut host = RecordingHost::new();

    inventory.add_pack(0, 2).unwrap();
    let opening = engine
        .open_pack(&mut inventory, &mut rng, &mut host)
        .expect("pack should open");

    assert_eq!(opening.len(), 2);
    assert_eq!(opening.booster_image, "starter");
    assert!(opening
        .cards
        .iter()
        .all(|c| *c == CardIndex::new(5) || *c == CardIndex::new(7)));

    // One item per drawn card, each the card's own item.
    assert_eq!(host.total_items(), 2);
    for card in &opening.cards {
        assert!(host.item_count(ItemId::new(100 + card.raw())) >= 1);
    }
}

/// Test that draw frequencies converge to rarity / pool size.
#[test]
fn test_draw_frequencies_converge() {
    let engine = loaded_engine();
    let mut rng = DrawRng::new(99);
    let trials = 20_000;

    let cards = engine.draw(PackTypeId::new(0), trials, &mut rng).unwrap();
    let sevens = cards.iter().filter(|&&c| c == CardIndex::new(7)).count();
    let ratio = sevens as f64 / trials as f64;

    assert!((ratio - 0.75).abs() < 0.02, "P(7) was {ratio}");
}

/// Test that every card in a larger pool shows up at its weight.
#[test]
fn test_frequencies_per_card() {
    let engine = loaded_engine();
    let mut rng = DrawRng::new(5);
    let trials = 30_000;

    let cards = engine.draw(PackTypeId::new(1), trials, &mut rng).unwrap();
    for member in 0..3 {
        let count = cards.iter().filter(|c| c.raw() == member).count();
        let ratio = count as f64 / trials as f64;
        assert!((ratio - 1.0 / 3.0).abs() < 0.02, "card {member} drawn at {ratio}");
    }
}

/// Test that draws are independent: duplicates happen.
#[test]
fn test_draws_are_with_replacement() {
    let engine = loaded_engine();
    let mut rng = DrawRng::new(1);

    // 3 distinct cards, 10 draws: duplicates are certain.
    let cards = engine.draw(PackTypeId::new(1), 10, &mut rng).unwrap();
    let mut unique = cards.to_vec();
    unique.sort();
    unique.dedup();
    assert!(unique.len() < cards.len());
}

/// Test battle integration: cards go to the battle list, no items.
#[test]
fn test_battle_integration_registers_cards() {
    common::init_tracing();
    let battle = common::encode_list(&[
        serde_json::json!({ "Rarity": "1", "Image_Player_1": "a" }),
        serde_json::json!({ "Rarity": "2", "Image_Player_1": "b" }),
    ]);
    let params = common::standard_params().with_battle_cards(battle);
    let (config, _) = BoosterConfig::load(&params);
    assert!(config.battle_integration());

    let engine = PackDrawEngine::new(Arc::new(config));
    let mut inventory = BoosterInventory::new();
    let mut rng = DrawRng::new(3);
    let mut host = RecordingHost::new();

    // Pack 1 lists [0, 1, 2]; card 2 is not in the battle list.
    inventory.add_pack(1, 5).unwrap();
    let opening = engine.open_pack(&mut inventory, &mut rng, &mut host).unwrap();

    assert_eq!(host.battle_cards.as_slice(), opening.cards.as_slice());
    assert!(opening.cards.iter().all(|c| c.raw() < 2));
    assert!(host.items.is_empty());
}

/// Test that earlier battle registrations are kept and duplicates allowed.
#[test]
fn test_battle_list_appends() {
    let cards: CardRegistry = std::iter::once(CardDefinition::new(
        CardIndex::new(0),
        NonZeroU32::new(1).unwrap(),
    ))
    .collect();
    let config = BoosterConfig::new(cards)
        .with_pack_type(PackType::new(PackTypeId::new(0), "solo").with_card(CardIndex::new(0)))
        .with_battle_integration();
    let engine = PackDrawEngine::new(Arc::new(config));

    let mut inventory = BoosterInventory::new();
    let mut rng = DrawRng::new(3);
    let mut host = RecordingHost::new();
    host.battle_cards.push(CardIndex::new(9));

    inventory.add_pack(0, 3).unwrap();
    engine.open_pack(&mut inventory, &mut rng, &mut host).unwrap();

    assert_eq!(
        host.battle_cards,
        vec![CardIndex::new(9), CardIndex::new(0), CardIndex::new(0), CardIndex::new(0)]
    );
}

fn registry_from(rarities: &[u32]) -> CardRegistry {
    rarities
        .iter()
        .enumerate()
        .map(|(i, &r)| CardDefinition::new(CardIndex::new(i as u32), NonZeroU32::new(r).unwrap()))
        .collect()
}

proptest! {
    /// Pool length is the rarity sum and each card appears rarity times.
    #[test]
    fn prop_pool_matches_rarities(rarities in prop::collection::vec(1u32..20, 1..12)) {
        let cards = registry_from(&rarities);
        let pack = PackType::new(PackTypeId::new(0), "p")
            .with_cards((0..rarities.len() as u32).map(CardIndex::new));

        let pool = WeightedPool::build(&pack, &cards).unwrap();

        prop_assert_eq!(pool.len(), rarities.iter().sum::<u32>() as usize);
        for (i, &r) in rarities.iter().enumerate() {
            prop_assert_eq!(pool.count_of(CardIndex::new(i as u32)), r as usize);
        }
    }

    /// An open of N cards returns exactly N pool members.
    #[test]
    fn prop_open_returns_pool_members(
        rarities in prop::collection::vec(1u32..10, 1..8),
        count in 2u32..30,
        seed in any::<u64>(),
    ) {
        let cards = registry_from(&rarities);
        let config = BoosterConfig::new(cards).with_pack_type(
            PackType::new(PackTypeId::new(3), "p")
                .with_cards((0..rarities.len() as u32).map(CardIndex::new)),
        );
        let engine = PackDrawEngine::new(Arc::new(config));
        let mut inventory = BoosterInventory::new();
        let mut rng = DrawRng::new(seed);
        let mut host = RecordingHost::new();

        inventory.add_pack(3, i64::from(count)).unwrap();
        let opening = engine.open_pack(&mut inventory, &mut rng, &mut host).unwrap();

        let pool = engine.pool(PackTypeId::new(3)).unwrap();
        prop_assert_eq!(opening.len(), count as usize);
        prop_assert!(opening.cards.iter().all(|&c| pool.contains(c)));
    }
}
