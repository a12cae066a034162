//! Strategy pattern for one ranking pass
//!
//! Each pass of the ranking engine is a strategy over a slice of item
//! ordinals. Level strategies also decide which part of the sequence they
//! are allowed to reorder: time-based criteria only make sense for the open
//! prefix or the closed suffix.

use super::compare::{LevelComparator, NameComparator};
use super::criterion::Criterion;
use super::merge::merge_sort_by;
use std::ops::Range;

/// A sorting pass that can be applied to item ordinals.
pub trait SortStrategy<T> {
    /// Apply this sorting strategy to the given items
    fn sort(&self, items: &mut [T]);

    /// Estimate the computational cost of this sorting strategy
    fn cost_estimate(&self) -> SortCost;
}

/// Estimated cost of a sorting operation
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum SortCost {
    /// O(1) - already sorted or no-op
    Trivial,
    /// O(n log n) - standard sorting algorithm
    Moderate,
}

/// Portion of the current sequence a level may reorder.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortScope {
    Whole,
    /// Up to, not including, the first closed item
    OpenPrefix,
    /// From the first closed item onward
    ClosedSuffix,
    /// Nothing to sort
    Skip,
}

impl SortScope {
    pub fn for_criterion(criterion: Criterion) -> Self {
        match criterion {
            Criterion::Favorite | Criterion::OpenClosed | Criterion::NearFar => {
                SortScope::Whole
            }
            Criterion::TimeToClose => SortScope::OpenPrefix,
            Criterion::TimeToOpen => SortScope::ClosedSuffix,
            Criterion::Unsorted | Criterion::Reserved(_) => SortScope::Skip,
        }
    }

    /// Concrete range given the index of the first closed item. With no
    /// closed items the open prefix is everything and the suffix is empty.
    pub fn range(&self, len: usize, first_closed: Option<usize>) -> Range<usize> {
        let boundary = first_closed.unwrap_or(len);
        match self {
            SortScope::Whole => 0..len,
            SortScope::OpenPrefix => 0..boundary,
            SortScope::ClosedSuffix => boundary..len,
            SortScope::Skip => 0..0,
        }
    }
}

/// Stable case-insensitive name ordering for the alphabetical base pass.
#[derive(Debug)]
pub struct AlphabeticalSort<'a> {
    names: &'a NameComparator,
}

impl<'a> AlphabeticalSort<'a> {
    pub fn new(names: &'a NameComparator) -> Self {
        Self { names }
    }
}

impl SortStrategy<usize> for AlphabeticalSort<'_> {
    fn sort(&self, items: &mut [usize]) {
        merge_sort_by(items, |a, b| self.names.less_or_equal(*a, *b));
    }

    fn cost_estimate(&self) -> SortCost {
        SortCost::Moderate
    }
}

/// One level of the priority stack restricted to its scope.
#[derive(Debug)]
pub struct LevelStrategy<'a> {
    comparator: LevelComparator<'a>,
    range: Range<usize>,
}

impl<'a> LevelStrategy<'a> {
    pub fn new(comparator: LevelComparator<'a>, range: Range<usize>) -> Self {
        Self { comparator, range }
    }
}

impl SortStrategy<usize> for LevelStrategy<'_> {
    fn sort(&self, items: &mut [usize]) {
        let end = self.range.end.min(items.len());
        let start = self.range.start.min(end);
        merge_sort_by(&mut items[start..end], |a, b| {
            self.comparator.less_or_equal(*a, *b)
        });
    }

    fn cost_estimate(&self) -> SortCost {
        if self.range.len() <= 1 {
            SortCost::Trivial
        } else {
            SortCost::Moderate
        }
    }
}
