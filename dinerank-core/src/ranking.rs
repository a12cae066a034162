//! Ranking pass
//!
//! Produces the display order of item ordinals for a [`SortState`]:
//!
//! 1. start from the full universe in repository order,
//! 2. drop off-campus and off-card items when those filters are on,
//! 3. optionally establish an alphabetical base order,
//! 4. apply each level from 0 upward with a stable merge sort, so the highest
//!    level decides first and lower levels only break its ties.

use crate::distance::DistanceTable;
use crate::repository::ItemRepository;
use crate::sorting::{
    AlphabeticalSort, ComparisonCache, LevelComparator, LevelStrategy, NameComparator,
    SortCost, SortScope, SortState, SortStrategy,
};
use tracing::trace;

/// Rank every item in `repo` under `state`, returning ordinals.
pub fn rank<R>(
    repo: &R,
    state: &SortState,
    cache: &mut ComparisonCache,
    distances: Option<&DistanceTable>,
) -> Vec<usize>
where
    R: ItemRepository + ?Sized,
{
    let mut order: Vec<usize> = (0..repo.len()).collect();

    if state.flags.hide_off_campus {
        order.retain(|&ordinal| repo.attributes_at(ordinal).on_campus);
    }
    if state.flags.hide_off_card {
        order.retain(|&ordinal| repo.attributes_at(ordinal).on_card);
    }

    if state.alphabetical {
        let names = NameComparator::new(
            (0..repo.len()).map(|ordinal| repo.attributes_at(ordinal).name.as_str()),
        );
        AlphabeticalSort::new(&names).sort(&mut order);
    }

    // A distance table built for a different universe is ignored.
    let distances = distances.filter(|table| table.len() == repo.len());

    for (level, sort) in state.levels().iter().enumerate() {
        let scope = SortScope::for_criterion(sort.criterion);
        if scope == SortScope::Skip {
            continue;
        }
        let range = scope.range(order.len(), first_closed(repo, &order, 0));
        let table = cache.table_for(sort.criterion, repo);
        let strategy = LevelStrategy::new(LevelComparator::new(*sort, table, distances), range);
        if strategy.cost_estimate() == SortCost::Trivial {
            continue;
        }
        strategy.sort(&mut order);
        trace!(
            level,
            criterion = %sort.criterion,
            descending = sort.is_descending(),
            "applied sort level"
        );
    }

    order
}

/// Index of the first closed item at or after `start`.
pub fn first_closed<R>(repo: &R, order: &[usize], start: usize) -> Option<usize>
where
    R: ItemRepository + ?Sized,
{
    order
        .iter()
        .skip(start)
        .position(|&ordinal| !repo.attributes_at(ordinal).is_open())
        .map(|offset| start + offset)
}

/// Index of the first non-favorite item.
pub fn first_non_favorite<R>(repo: &R, order: &[usize]) -> Option<usize>
where
    R: ItemRepository + ?Sized,
{
    order
        .iter()
        .position(|&ordinal| !repo.attributes_at(ordinal).favorite)
}
