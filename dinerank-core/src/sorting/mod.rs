//! Sorting module for the multi-level ranking stack
//!
//! This module provides:
//! - Criterion and direction descriptors for each priority level
//! - The sort state codec (flags, six-slot stack, compaction, insertion)
//! - A per-criterion comparison cache keyed by item ordinal
//! - A stable merge sort and the comparators it is driven by
//! - Strategy types for the alphabetical base pass and each level pass

pub mod cache;
pub mod compare;
pub mod criterion;
pub mod merge;
pub mod state;
pub mod strategy;

pub use cache::{CacheTable, ComparisonCache};
pub use compare::{LevelComparator, NameComparator};
pub use criterion::{Criterion, LevelSort, SortDirection};
pub use merge::merge_sort_by;
pub use state::{DisplayFlags, LEVEL_COUNT, SortState};
pub use strategy::{AlphabeticalSort, LevelStrategy, SortCost, SortScope, SortStrategy};
