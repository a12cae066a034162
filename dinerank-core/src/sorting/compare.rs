//! `less_or_equal` predicates for each criterion
//!
//! All comparators work on item ordinals and read precomputed values, never
//! the repository, so one sort pass costs a single cache build.

use super::cache::CacheTable;
use super::criterion::{Criterion, LevelSort};
use crate::distance::DistanceTable;

/// Comparator for one level of the priority stack.
#[derive(Debug, Clone, Copy)]
pub struct LevelComparator<'a> {
    sort: LevelSort,
    table: &'a CacheTable,
    distances: Option<&'a DistanceTable>,
}

impl<'a> LevelComparator<'a> {
    pub fn new(
        sort: LevelSort,
        table: &'a CacheTable,
        distances: Option<&'a DistanceTable>,
    ) -> Self {
        Self {
            sort,
            table,
            distances,
        }
    }

    pub fn less_or_equal(&self, first: usize, second: usize) -> bool {
        let descending = self.sort.is_descending();
        match (self.sort.criterion, self.table) {
            (Criterion::Favorite | Criterion::OpenClosed, CacheTable::Flags(flags)) => {
                flag_first(flags[first], flags[second], descending)
            }
            (Criterion::TimeToClose, CacheTable::Minutes(minutes)) => {
                let (a, b) = (minutes[first], minutes[second]);
                if descending { a >= b } else { a <= b }
            }
            (Criterion::TimeToOpen, CacheTable::Minutes(minutes)) => {
                time_to_open(minutes[first], minutes[second], descending)
            }
            (Criterion::NearFar, _) => match self.distances {
                Some(distances) => {
                    let (a, b) = (distances.key_at(first), distances.key_at(second));
                    if descending { a >= b } else { a <= b }
                }
                None => true,
            },
            _ => true,
        }
    }
}

/// `true` sorts before `false` ascending; ties hold in both directions.
fn flag_first(first: bool, second: bool, descending: bool) -> bool {
    if descending {
        second || !first
    } else {
        first || !second
    }
}

// A `-1` ("no upcoming opening") is always less-or-equal on the side the
// direction checks first. The relation is not transitive on mixed inputs and
// is kept that way on purpose.
fn time_to_open(first: i32, second: i32, descending: bool) -> bool {
    if descending {
        first == -1 || (first >= second && second != -1)
    } else {
        second == -1 || (first <= second && first != -1)
    }
}

/// Case-insensitive name comparator for the alphabetical base pass.
#[derive(Debug, Clone)]
pub struct NameComparator {
    folded: Vec<String>,
}

impl NameComparator {
    pub fn new<'n>(names: impl IntoIterator<Item = &'n str>) -> Self {
        Self {
            folded: names.into_iter().map(str::to_lowercase).collect(),
        }
    }

    pub fn less_or_equal(&self, first: usize, second: usize) -> bool {
        self.folded[first] <= self.folded[second]
    }
}
