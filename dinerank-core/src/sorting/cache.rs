//! Comparison cache
//!
//! Attribute lookups such as minutes-until-close can be expensive on real
//! repositories, and a merge sort touches each item O(log n) times. The cache
//! holds one precomputed value per item ordinal for the single criterion
//! currently being ranked, and is rebuilt in one pass whenever that criterion
//! changes.

use super::criterion::Criterion;
use crate::repository::ItemRepository;
use tracing::trace;

/// Per-ordinal values for one criterion.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum CacheTable {
    /// Nothing to precompute (alphabetical, near-far, unused slots)
    #[default]
    Empty,
    /// Favorite or open-now flags
    Flags(Vec<bool>),
    /// Minutes until close or until open, `-1` sentinel preserved
    Minutes(Vec<i32>),
}

impl CacheTable {
    pub fn len(&self) -> usize {
        match self {
            CacheTable::Empty => 0,
            CacheTable::Flags(values) => values.len(),
            CacheTable::Minutes(values) => values.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn build<R>(criterion: Criterion, repo: &R) -> Self
    where
        R: ItemRepository + ?Sized,
    {
        let ordinals = 0..repo.len();
        match criterion {
            Criterion::Favorite => CacheTable::Flags(
                ordinals.map(|i| repo.attributes_at(i).favorite).collect(),
            ),
            Criterion::OpenClosed => CacheTable::Flags(
                ordinals.map(|i| repo.attributes_at(i).is_open()).collect(),
            ),
            Criterion::TimeToClose => CacheTable::Minutes(
                ordinals
                    .map(|i| repo.attributes_at(i).hours.minutes_to_close)
                    .collect(),
            ),
            Criterion::TimeToOpen => CacheTable::Minutes(
                ordinals
                    .map(|i| repo.attributes_at(i).hours.minutes_to_open)
                    .collect(),
            ),
            Criterion::NearFar | Criterion::Unsorted | Criterion::Reserved(_) => {
                CacheTable::Empty
            }
        }
    }
}

/// Lazily rebuilt table for the most recently compared criterion.
#[derive(Debug, Clone, Default)]
pub struct ComparisonCache {
    criterion: Option<Criterion>,
    table: CacheTable,
    rebuilds: u64,
}

impl ComparisonCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Table for `criterion`, rebuilt over the full universe on a miss.
    pub fn table_for<R>(&mut self, criterion: Criterion, repo: &R) -> &CacheTable
    where
        R: ItemRepository + ?Sized,
    {
        if self.criterion != Some(criterion) {
            self.table = CacheTable::build(criterion, repo);
            self.criterion = Some(criterion);
            self.rebuilds += 1;
            trace!(
                criterion = %criterion,
                entries = self.table.len(),
                "rebuilt comparison cache"
            );
        }
        &self.table
    }

    pub fn cached_criterion(&self) -> Option<Criterion> {
        self.criterion
    }

    /// Number of full rebuilds since construction.
    pub fn rebuild_count(&self) -> u64 {
        self.rebuilds
    }

    pub fn invalidate(&mut self) {
        self.criterion = None;
        self.table = CacheTable::Empty;
    }
}
