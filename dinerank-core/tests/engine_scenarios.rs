//! End-to-end ranking scenarios driven through the engine facade.

use dinerank_core::{
    Criterion, FixedPosition, InMemoryCatalog, ItemRepository, LevelSort, RankingEngine, SortState,
};
use dinerank_model::{Entry, GeoPoint, Hours, ItemAttributes, ItemId, MarkerKind, MicroCoordinates};

fn id(raw: i64) -> ItemId {
    ItemId::new(raw).unwrap()
}

fn item(name: &str, favorite: bool, hours: Hours) -> ItemAttributes {
    let mut attrs = ItemAttributes::named(name);
    attrs.favorite = favorite;
    attrs.hours = hours;
    attrs
}

fn catalog(items: Vec<ItemAttributes>) -> InMemoryCatalog {
    InMemoryCatalog::from_items(
        items
            .into_iter()
            .enumerate()
            .map(|(i, attrs)| (id(i as i64 + 1), attrs)),
    )
    .unwrap()
}

fn labels(engine: &RankingEngine<InMemoryCatalog>) -> Vec<String> {
    engine
        .order()
        .iter()
        .map(|entry| match entry {
            Entry::Item(id) => engine.repository().attributes(*id).unwrap().name.clone(),
            Entry::Marker(kind) => format!("[{}]", kind.label()),
        })
        .collect()
}

fn favorites_and_hours() -> InMemoryCatalog {
    // Deliberately shuffled so the alphabetical pass matters.
    catalog(vec![
        item("E", false, Hours::closed_for_day()),
        item("B", true, Hours::opens_in(30)),
        item("C", false, Hours::open_for(90)),
        item("A", true, Hours::open_for(20)),
        item("D", false, Hours::opens_in(5)),
    ])
}

#[test]
fn favorites_and_open_partitions() {
    let mut state = SortState::new();
    state.alphabetical = true;
    state.flags.show_favorite_partition = true;
    state.flags.show_open_partition = true;
    state.set_level(0, Criterion::OpenClosed.into()).unwrap();
    state.set_level(1, Criterion::Favorite.into()).unwrap();

    let engine = RankingEngine::with_state(favorites_and_hours(), state);
    assert_eq!(
        labels(&engine),
        vec!["[Favorites]", "A", "B", "[Open]", "C", "[Closed]", "D", "E"]
    );
    assert_eq!(
        engine.order().iter().filter(|entry| entry.is_selectable()).count(),
        5
    );
}

#[test]
fn favorites_partition_alone_uses_other() {
    let mut state = SortState::new();
    state.alphabetical = true;
    state.flags.show_favorite_partition = true;
    state.set_level(0, Criterion::Favorite.into()).unwrap();

    let engine = RankingEngine::with_state(favorites_and_hours(), state);
    assert_eq!(
        labels(&engine),
        vec!["[Favorites]", "A", "B", "[Other]", "C", "D", "E"]
    );
}

#[test]
fn same_state_twice_is_a_no_op() {
    let mut engine = RankingEngine::new(favorites_and_hours());
    let mut state = SortState::new();
    state.set_level(0, Criterion::Favorite.into()).unwrap();

    assert!(engine.set_sort(state));
    let generation = engine.generation();
    let order = engine.order().to_vec();

    assert!(!engine.set_sort_bits(state.to_bits()));
    assert_eq!(engine.generation(), generation);
    assert_eq!(engine.order(), order.as_slice());
}

#[test]
fn near_far_without_distances_keeps_the_previous_order() {
    let mut state = SortState::new();
    state.alphabetical = true;
    state.set_level(0, Criterion::OpenClosed.into()).unwrap();
    let mut engine = RankingEngine::with_state(favorites_and_hours(), state);
    let before = labels(&engine);

    state.set_level(1, Criterion::NearFar.into()).unwrap();
    assert!(engine.set_sort(state));
    assert_eq!(labels(&engine), before);
}

#[test]
fn near_far_orders_once_distances_exist() {
    let places = [("Far", 36_160_000), ("Here", 36_143_299), ("Near", 36_145_000)];
    let repo = catalog(
        places
            .iter()
            .map(|(name, lat)| {
                let mut attrs = ItemAttributes::named(*name);
                attrs.coordinates = MicroCoordinates::new(*lat, -86_802_464);
                attrs
            })
            .collect(),
    );
    let mut state = SortState::new();
    state.set_level(0, Criterion::NearFar.into()).unwrap();
    let mut engine = RankingEngine::with_state(repo, state);
    assert_eq!(labels(&engine), vec!["Far", "Here", "Near"]);

    assert!(engine.refresh_distances(&FixedPosition(GeoPoint::new(36.143299, -86.802464))));
    engine.resort();
    assert_eq!(labels(&engine), vec!["Here", "Near", "Far"]);

    state.set_level(0, LevelSort::descending(Criterion::NearFar)).unwrap();
    engine.set_sort(state);
    assert_eq!(labels(&engine), vec!["Far", "Near", "Here"]);
}

#[test]
fn never_opening_item_sorts_last_ascending_and_first_descending() {
    let repo = catalog(vec![
        item("in-30", false, Hours::opens_in(30)),
        item("never", false, Hours::closed_for_day()),
        item("in-10", false, Hours::opens_in(10)),
    ]);
    let mut state = SortState::new();
    state.set_level(0, Criterion::TimeToOpen.into()).unwrap();
    let mut engine = RankingEngine::with_state(repo, state);
    assert_eq!(labels(&engine), vec!["in-10", "in-30", "never"]);

    state.set_level(0, LevelSort::descending(Criterion::TimeToOpen)).unwrap();
    engine.set_sort(state);
    assert_eq!(labels(&engine), vec!["never", "in-30", "in-10"]);
}

#[test]
fn time_to_close_leaves_closed_items_alone() {
    let repo = catalog(vec![
        item("shut-z", false, Hours::closed_for_day()),
        item("long", false, Hours::open_for(240)),
        item("shut-a", false, Hours::opens_in(15)),
        item("short", false, Hours::open_for(10)),
    ]);
    let mut state = SortState::new();
    state.set_level(0, Criterion::OpenClosed.into()).unwrap();
    state.set_level(1, Criterion::TimeToClose.into()).unwrap();
    let engine = RankingEngine::with_state(repo, state);
    assert_eq!(labels(&engine), vec!["short", "long", "shut-z", "shut-a"]);
}

#[test]
fn filters_hide_items_and_headers_follow() {
    let mut remote = item("Remote", true, Hours::open_for(30));
    remote.on_campus = false;
    let mut cash = item("Cash", false, Hours::closed_for_day());
    cash.on_card = false;
    let repo = catalog(vec![remote, cash, item("Local", false, Hours::open_for(30))]);

    let mut state = SortState::new();
    state.flags.show_favorite_partition = true;
    state.flags.show_open_partition = true;
    state.flags.hide_off_campus = true;
    state.flags.hide_off_card = true;
    let engine = RankingEngine::with_state(repo, state);
    // No favorite survives the filters, so the list starts at the open run.
    assert_eq!(labels(&engine), vec!["[Open]", "Local"]);
}

#[test]
fn fully_filtered_list_keeps_its_leading_header() {
    let mut remote = item("Remote", false, Hours::closed_for_day());
    remote.on_campus = false;

    let mut state = SortState::new();
    state.flags.show_open_partition = true;
    state.flags.hide_off_campus = true;
    let engine = RankingEngine::with_state(catalog(vec![remote]), state);
    assert_eq!(labels(&engine), vec!["[Open]"]);
}

#[test]
fn level_stack_operations_through_the_engine() {
    let mut engine = RankingEngine::new(favorites_and_hours());
    assert_eq!(engine.next_unused_level(), Some(0));

    engine.set_sort_at_level(0, Criterion::Favorite.into()).unwrap();
    engine.set_sort_at_level(3, Criterion::OpenClosed.into()).unwrap();
    assert_eq!(engine.next_unused_level(), Some(4));
    assert_eq!(engine.index_of(Criterion::OpenClosed), Some(3));
    assert_eq!(engine.index_of(LevelSort::descending(Criterion::OpenClosed)), None);

    assert!(engine.insert(0, Criterion::NearFar.into()).unwrap());
    assert_eq!(engine.sort_at_level(0).unwrap().criterion, Criterion::NearFar);
    assert_eq!(engine.sort_at_level(1).unwrap().criterion, Criterion::Favorite);
    assert_eq!(engine.sort_at_level(3).unwrap().criterion, Criterion::OpenClosed);

    // Pending until applied.
    assert_eq!(engine.applied_state(), Some(&SortState::default()));
    // Open-closed dominates, then favorites: A is the only open favorite.
    assert!(engine.apply_pending());
    assert_eq!(engine.entry(0), Some(Entry::Item(id(4))));
}

#[test]
fn full_stack_reports_no_free_level() {
    let mut engine = RankingEngine::new(favorites_and_hours());
    for level in 0..6 {
        engine.set_sort_code_at_level(level, level as u8 + 1).unwrap();
    }
    let before = engine.sort_type();
    assert_eq!(engine.next_unused_level(), None);
    assert!(!engine.insert(2, Criterion::Favorite.into()).unwrap());
    assert_eq!(engine.sort_type(), before);
}

#[test]
fn supplied_orders_are_kept_verbatim() {
    let order = vec![
        Entry::Marker(MarkerKind::Other),
        Entry::Item(id(3)),
        Entry::Item(id(1)),
    ];
    let engine = RankingEngine::with_order(favorites_and_hours(), order.clone());
    assert_eq!(engine.order(), order.as_slice());
    assert!(!engine.is_selectable(0));
    assert!(engine.is_selectable(1));
}
