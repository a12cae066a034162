//! Randomized checks over generated catalogs and sort states.

use std::collections::HashMap;

use dinerank_core::sorting::ComparisonCache;
use dinerank_core::{
    Criterion, InMemoryCatalog, ItemRepository, LEVEL_COUNT, LevelSort, RankingEngine, SortState,
    rank,
};
use dinerank_model::{Entry, Hours, ItemAttributes, ItemId, MarkerKind};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

const ROUNDS: usize = 200;

fn random_hours(rng: &mut StdRng) -> Hours {
    match rng.random_range(0..3) {
        0 => Hours::open_for(rng.random_range(1..1500)),
        1 => Hours::opens_in(rng.random_range(1..600)),
        _ => Hours::closed_for_day(),
    }
}

fn random_catalog(rng: &mut StdRng) -> InMemoryCatalog {
    let len = rng.random_range(0..30);
    InMemoryCatalog::from_items((0..len).map(|i| {
        let mut attrs = ItemAttributes::named(format!("item-{}", rng.random_range(0..10)));
        attrs.favorite = rng.random_bool(0.3);
        attrs.hours = random_hours(rng);
        attrs.on_campus = rng.random_bool(0.8);
        attrs.on_card = rng.random_bool(0.8);
        (ItemId::new(i as i64 + 1).unwrap(), attrs)
    }))
    .unwrap()
}

fn random_level(rng: &mut StdRng) -> LevelSort {
    LevelSort::from_nibble(rng.random_range(0..16)).unwrap()
}

fn used(state: &SortState) -> Vec<LevelSort> {
    state
        .levels()
        .iter()
        .copied()
        .filter(|slot| !slot.is_unused())
        .collect()
}

#[test]
fn every_visible_item_appears_once_and_markers_at_most_once() {
    let mut rng = StdRng::seed_from_u64(0x5eed_0001);
    for _ in 0..ROUNDS {
        let repo = random_catalog(&mut rng);
        let state = SortState::from_bits(rng.random());
        let expected: Vec<ItemId> = (0..repo.len())
            .filter(|&ordinal| {
                let attrs = repo.attributes_at(ordinal);
                (!state.flags.hide_off_campus || attrs.on_campus)
                    && (!state.flags.hide_off_card || attrs.on_card)
            })
            .map(|ordinal| repo.id_at(ordinal))
            .collect();

        let engine = RankingEngine::with_state(repo, state);

        let mut seen: HashMap<ItemId, usize> = HashMap::new();
        let mut markers: HashMap<MarkerKind, usize> = HashMap::new();
        for entry in engine.order() {
            match entry {
                Entry::Item(id) => *seen.entry(*id).or_default() += 1,
                Entry::Marker(kind) => *markers.entry(*kind).or_default() += 1,
            }
        }

        assert_eq!(seen.len(), expected.len(), "state {:#x}", state.to_bits());
        for id in &expected {
            assert_eq!(seen.get(id), Some(&1), "item {id} in state {:#x}", state.to_bits());
        }
        assert!(markers.values().all(|&count| count == 1));
        if !state.flags.show_favorite_partition {
            assert!(!markers.contains_key(&MarkerKind::Favorite));
            assert!(!markers.contains_key(&MarkerKind::Other));
        }
        if !state.flags.show_open_partition {
            assert!(!markers.contains_key(&MarkerKind::Closed));
        }
    }
}

#[test]
fn higher_level_ties_keep_the_lower_level_order() {
    let mut rng = StdRng::seed_from_u64(0x5eed_0002);
    for _ in 0..ROUNDS {
        let repo = random_catalog(&mut rng);
        let mut base_state = SortState::new();
        base_state.alphabetical = rng.random_bool(0.5);
        base_state.set_level(0, random_level(&mut rng)).unwrap();

        let mut state = base_state;
        let top = if rng.random_bool(0.5) {
            LevelSort::ascending(Criterion::Favorite)
        } else {
            LevelSort::descending(Criterion::Favorite)
        };
        state.set_level(1, top).unwrap();

        let base = rank(&repo, &base_state, &mut ComparisonCache::new(), None);
        let layered = rank(&repo, &state, &mut ComparisonCache::new(), None);

        for favorite in [true, false] {
            let pick = |order: &[usize]| -> Vec<usize> {
                order
                    .iter()
                    .copied()
                    .filter(|&ordinal| repo.attributes_at(ordinal).favorite == favorite)
                    .collect()
            };
            assert_eq!(pick(&layered), pick(&base));
        }
    }
}

#[test]
fn compaction_preserves_relative_priority() {
    let mut rng = StdRng::seed_from_u64(0x5eed_0003);
    for _ in 0..ROUNDS {
        let mut state = SortState::new();
        for level in 0..LEVEL_COUNT {
            if rng.random_bool(0.5) {
                state.set_level(level, random_level(&mut rng)).unwrap();
            }
        }
        let before = used(&state);
        let original = state;
        let changed = state.compact_levels();

        assert_eq!(used(&state), before);
        assert_eq!(changed, state != original);
    }
}

#[test]
fn failed_inserts_change_nothing() {
    let mut rng = StdRng::seed_from_u64(0x5eed_0004);
    for _ in 0..ROUNDS {
        let mut state = SortState::from_bits(rng.random());
        let level = rng.random_range(0..LEVEL_COUNT);
        let sort = LevelSort::ascending(Criterion::from_code(rng.random_range(1..6)));
        let original = state;
        let used_before = used(&original).len();

        if state.insert(level, sort).unwrap() {
            assert_eq!(state.level(level).unwrap(), sort);
            assert_eq!(used(&state).len(), used_before + 1);
            assert_eq!(state.flags, original.flags);
        } else {
            assert_eq!(state, original);
        }
    }
}

#[test]
fn every_level_round_trips_every_code() {
    let mut state = SortState::new();
    for level in 0..LEVEL_COUNT {
        for code in 0..16u8 {
            state.set_level_code(level, code).unwrap();
            assert_eq!(state.level(level).unwrap().to_nibble(), code);
            assert_eq!(SortState::from_bits(state.to_bits()), state);
        }
    }
}
