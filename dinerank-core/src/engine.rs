//! Ranking engine facade
//!
//! [`RankingEngine`] owns one item repository together with everything derived
//! from it: the requested [`SortState`], the last state actually ranked, the
//! resulting entry order, the comparison cache and the distance table.
//!
//! The engine is single-threaded. Every mutating call runs to completion on
//! the caller's thread; wrap it in a mutex or confine it to one owner when it
//! must be shared.

use crate::display::{self, DisplaySettings};
use crate::distance::{self, DistanceTable};
use crate::error::Result;
use crate::partition::insert_partitions;
use crate::ranking::rank;
use crate::repository::{ItemRepository, PositionProvider};
use crate::sorting::{ComparisonCache, Criterion, LevelSort, SortState};
use dinerank_model::{Entry, ItemId};
use tracing::{debug, warn};

/// Boolean criterion selection, as offered by a simple settings screen.
///
/// Criteria are stacked in a fixed order so later ones dominate: near-far,
/// open-closed, time-to-close then time-to-open, favorite.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct CriteriaToggles {
    pub favorite: bool,
    pub open: bool,
    /// Adds both time-to-close and time-to-open.
    pub time_until: bool,
    pub near_far: bool,
    /// The user has touched any setting; `false` resets every flag.
    pub settings_modified: bool,
    /// The user has touched sort-dependent settings; `false` resets those.
    pub sort_settings_modified: bool,
}

impl CriteriaToggles {
    fn criteria(&self) -> Vec<Criterion> {
        let mut criteria = Vec::with_capacity(5);
        if self.near_far {
            criteria.push(Criterion::NearFar);
        }
        if self.open {
            criteria.push(Criterion::OpenClosed);
        }
        if self.time_until {
            criteria.push(Criterion::TimeToClose);
            criteria.push(Criterion::TimeToOpen);
        }
        if self.favorite {
            criteria.push(Criterion::Favorite);
        }
        criteria
    }
}

/// Stateful ranking facade over an [`ItemRepository`].
#[derive(Debug)]
pub struct RankingEngine<R> {
    repo: R,
    state: SortState,
    applied: Option<SortState>,
    order: Vec<Entry>,
    cache: ComparisonCache,
    distances: Option<DistanceTable>,
    display: DisplaySettings,
    generation: u64,
}

impl<R: ItemRepository> RankingEngine<R> {
    /// Engine ranked under the default (unsorted, unfiltered) state.
    pub fn new(repo: R) -> Self {
        Self::with_state(repo, SortState::default())
    }

    pub fn with_state(repo: R, state: SortState) -> Self {
        let mut engine = Self::unranked(repo, state);
        engine.set_sort(state);
        engine
    }

    /// Engine showing a caller-supplied order. Nothing is ranked until the
    /// state changes or [`RankingEngine::resort`] is called.
    pub fn with_order(repo: R, order: Vec<Entry>) -> Self {
        let state = SortState::default();
        let mut engine = Self::unranked(repo, state);
        engine.order = order;
        engine.applied = Some(state);
        engine
    }

    pub fn from_criteria(repo: R, toggles: CriteriaToggles) -> Self {
        let mut engine = Self::unranked(repo, SortState::default());
        engine.set_sort_criteria(toggles);
        engine
    }

    fn unranked(repo: R, state: SortState) -> Self {
        RankingEngine {
            repo,
            state,
            applied: None,
            order: Vec::new(),
            cache: ComparisonCache::new(),
            distances: None,
            display: DisplaySettings::default(),
            generation: 0,
        }
    }

    /// Adopt `state` as the pending state and rank under it unless it is
    /// exactly what was last applied. Returns whether a ranking pass ran.
    pub fn set_sort(&mut self, state: SortState) -> bool {
        self.state = state;
        if self.applied == Some(state) {
            return false;
        }
        self.apply();
        true
    }

    pub fn set_sort_bits(&mut self, bits: u32) -> bool {
        self.set_sort(SortState::from_bits(bits))
    }

    /// Rebuild the level stack from toggles, reset flags per the toggles'
    /// modification markers, then rank. Flags outside the stack are kept.
    pub fn set_sort_criteria(&mut self, toggles: CriteriaToggles) {
        self.state.clear_levels();
        for criterion in toggles.criteria() {
            self.place(criterion);
        }

        if !toggles.settings_modified {
            self.set_all_flags_to_default();
        } else if !toggles.sort_settings_modified {
            self.set_sort_flags_to_default();
        } else {
            self.set_non_setting_flags_to_default();
        }
        self.apply();
    }

    fn place(&mut self, criterion: Criterion) {
        let Some(level) = self.state.next_unused_level() else {
            warn!(%criterion, "no free sort level; dropping criterion");
            return;
        };
        if let Err(error) = self.state.set_level(level, criterion.into()) {
            warn!(%criterion, %error, "failed to place criterion");
        }
    }

    /// Rank the pending state if it differs from the applied one.
    pub fn apply_pending(&mut self) -> bool {
        self.set_sort(self.state)
    }

    /// Re-rank under the current state with fresh cache values. Time-based
    /// values go stale as the clock moves, so this also drops the cache.
    pub fn resort(&mut self) {
        self.cache.invalidate();
        self.apply();
    }

    fn apply(&mut self) {
        let ranked = rank(
            &self.repo,
            &self.state,
            &mut self.cache,
            self.distances.as_ref(),
        );
        self.order = insert_partitions(&self.repo, &ranked, self.state.flags);
        self.applied = Some(self.state);
        self.generation += 1;
        debug!(
            state = self.state.to_bits(),
            items = ranked.len(),
            markers = self.order.len() - ranked.len(),
            generation = self.generation,
            "ranked items"
        );
    }

    /// Packed form of the pending state.
    pub fn sort_type(&self) -> u32 {
        self.state.to_bits()
    }

    pub fn state(&self) -> &SortState {
        &self.state
    }

    /// State the current order was ranked under, if any.
    pub fn applied_state(&self) -> Option<&SortState> {
        self.applied.as_ref()
    }

    pub fn sort_at_level(&self, level: usize) -> Result<LevelSort> {
        self.state.level(level)
    }

    /// Change one slot of the pending state. Takes effect on the next ranking
    /// pass.
    pub fn set_sort_at_level(&mut self, level: usize, sort: LevelSort) -> Result<()> {
        self.state.set_level(level, sort)
    }

    /// Packed-nibble variant of [`RankingEngine::set_sort_at_level`].
    pub fn set_sort_code_at_level(&mut self, level: usize, nibble: u8) -> Result<()> {
        self.state.set_level_code(level, nibble)
    }

    pub fn next_unused_level(&mut self) -> Option<usize> {
        self.state.next_unused_level()
    }

    pub fn index_of(&self, sort: impl Into<LevelSort>) -> Option<usize> {
        self.state.index_of(sort)
    }

    pub fn insert(&mut self, level: usize, sort: LevelSort) -> Result<bool> {
        self.state.insert(level, sort)
    }

    pub fn order(&self) -> &[Entry] {
        &self.order
    }

    /// Replace the displayed order without ranking.
    pub fn set_order(&mut self, order: Vec<Entry>) {
        self.order = order;
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    pub fn entry(&self, index: usize) -> Option<Entry> {
        self.order.get(index).copied()
    }

    /// Markers and out-of-range rows are not selectable.
    pub fn is_selectable(&self, index: usize) -> bool {
        self.order.get(index).is_some_and(Entry::is_selectable)
    }

    pub fn display_settings(&self) -> &DisplaySettings {
        &self.display
    }

    pub fn set_display_settings(&mut self, settings: DisplaySettings) {
        self.display = settings;
    }

    pub fn show_favorite_icon(&self) -> bool {
        self.display.show_favorite_icon
    }

    pub fn set_show_favorite_icon(&mut self, show: bool) {
        self.display.show_favorite_icon = show;
    }

    pub fn gray_closed(&self) -> bool {
        self.display.gray_closed
    }

    pub fn set_gray_closed(&mut self, gray: bool) {
        self.display.gray_closed = gray;
    }

    pub fn show_item_type(&self) -> bool {
        self.display.show_item_type
    }

    pub fn set_show_item_type(&mut self, show: bool) {
        self.display.show_item_type = show;
    }

    pub fn show_distances(&self) -> bool {
        self.display.show_distances
    }

    pub fn set_show_distances(&mut self, show: bool) {
        self.display.show_distances = show;
    }

    pub fn hide_off_campus(&self) -> bool {
        self.state.flags.hide_off_campus
    }

    /// Changes the pending state only.
    pub fn set_hide_off_campus(&mut self, hide: bool) {
        self.state.flags.hide_off_campus = hide;
    }

    pub fn hide_off_card(&self) -> bool {
        self.state.flags.hide_off_card
    }

    /// Changes the pending state only.
    pub fn set_hide_off_card(&mut self, hide: bool) {
        self.state.flags.hide_off_card = hide;
    }

    pub fn alphabetical(&self) -> bool {
        self.state.alphabetical
    }

    /// Changes the pending state only.
    pub fn set_alphabetical(&mut self, alphabetical: bool) {
        self.state.alphabetical = alphabetical;
    }

    /// Alphabetical base order on; each partition shown exactly when its
    /// criterion is in the stack.
    pub fn set_non_setting_flags_to_default(&mut self) {
        let favorite = self.state.find_criterion(Criterion::Favorite).is_some();
        let open = self.state.find_criterion(Criterion::OpenClosed).is_some();
        self.state.alphabetical = true;
        self.state.flags.show_favorite_partition = favorite;
        self.state.flags.show_open_partition = open;
    }

    /// Non-setting defaults, plus gray closed rows and a favorite icon only
    /// when favorites are not already grouped.
    pub fn set_sort_flags_to_default(&mut self) {
        self.set_non_setting_flags_to_default();
        self.display.gray_closed = true;
        self.display.show_favorite_icon = self.state.find_criterion(Criterion::Favorite).is_none();
    }

    /// Sort defaults, plus every optional column and filter off.
    pub fn set_all_flags_to_default(&mut self) {
        self.set_sort_flags_to_default();
        self.display.show_distances = false;
        self.display.show_item_type = false;
        self.state.flags.hide_off_campus = false;
        self.state.flags.hide_off_card = false;
    }

    /// Recompute distances from the provider. Without a fix the previous
    /// table, if any, is kept and `false` is returned. Does not re-rank.
    pub fn refresh_distances<P>(&mut self, provider: &P) -> bool
    where
        P: PositionProvider + ?Sized,
    {
        match distance::refresh_distances(&self.repo, provider) {
            Some(table) => {
                self.distances = Some(table);
                true
            }
            None => false,
        }
    }

    pub fn distances(&self) -> Option<&DistanceTable> {
        self.distances.as_ref()
    }

    /// Distance to `id` in feet, when known.
    pub fn distance_to(&self, id: ItemId) -> Option<f64> {
        let ordinal = self.repo.ordinal_of(id)?;
        self.distances.as_ref()?.feet_at(ordinal)
    }

    pub fn hours_text(&self, id: ItemId) -> Option<String> {
        self.repo
            .attributes(id)
            .map(|attributes| display::hours_text(&attributes.hours))
    }

    pub fn special_text(&self, id: ItemId) -> Option<String> {
        self.repo
            .attributes(id)
            .map(|attributes| display::special_text(attributes, &self.display))
    }

    pub fn special_right_text(&self, id: ItemId) -> Option<String> {
        self.repo.ordinal_of(id)?;
        Some(display::special_right_text(
            self.distance_to(id),
            &self.display,
        ))
    }

    /// Drop cached comparison values; the next pass rebuilds them.
    pub fn invalidate_cache(&mut self) {
        self.cache.invalidate();
    }

    pub fn repository(&self) -> &R {
        &self.repo
    }

    /// Mutable repository access. Cached comparison values are dropped since
    /// attributes may change underneath them.
    pub fn repository_mut(&mut self) -> &mut R {
        self.cache.invalidate();
        &mut self.repo
    }

    /// Number of completed ranking passes.
    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn cache_rebuilds(&self) -> u64 {
        self.cache.rebuild_count()
    }
}
