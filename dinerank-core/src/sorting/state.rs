//! Sort state: display flags plus a six-slot priority stack
//!
//! Level 0 is the lowest priority. Higher levels are applied later by the
//! ranking pass and therefore dominate ties. Slots are kept left-packed by
//! [`SortState::next_unused_level`], which compacts holes left behind by
//! disabled criteria before giving up.
//!
//! The state still travels as one `u32` where callers need a single value
//! (persisted preferences, cheap comparisons). The packed layout is:
//!
//! | bits   | meaning                         |
//! |--------|---------------------------------|
//! | 0      | show favorites partition        |
//! | 1      | show open/closed partition      |
//! | 2      | hide off-campus items           |
//! | 3      | hide items off the meal card    |
//! | 4      | alphabetical base ordering      |
//! | 5..8   | reserved, dropped on decode     |
//! | 8+4L.. | level `L` nibble (`L` in 0..6)  |

use super::criterion::{Criterion, LevelSort};
use crate::error::{RankError, Result};

/// Number of priority slots in the stack.
pub const LEVEL_COUNT: usize = 6;

const FLAG_BITS: u32 = 8;
const SHOW_FAVORITE_PARTITION: u32 = 0x1;
const SHOW_OPEN_PARTITION: u32 = 0x2;
const HIDE_OFF_CAMPUS: u32 = 0x4;
const HIDE_OFF_CARD: u32 = 0x8;
const ALPHABETICAL: u32 = 0x10;

/// Display filters packed beside the level stack.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct DisplayFlags {
    pub show_favorite_partition: bool,
    pub show_open_partition: bool,
    pub hide_off_campus: bool,
    pub hide_off_card: bool,
}

impl DisplayFlags {
    fn to_bits(self) -> u32 {
        let mut bits = 0;
        if self.show_favorite_partition {
            bits |= SHOW_FAVORITE_PARTITION;
        }
        if self.show_open_partition {
            bits |= SHOW_OPEN_PARTITION;
        }
        if self.hide_off_campus {
            bits |= HIDE_OFF_CAMPUS;
        }
        if self.hide_off_card {
            bits |= HIDE_OFF_CARD;
        }
        bits
    }

    fn from_bits(bits: u32) -> Self {
        DisplayFlags {
            show_favorite_partition: bits & SHOW_FAVORITE_PARTITION != 0,
            show_open_partition: bits & SHOW_OPEN_PARTITION != 0,
            hide_off_campus: bits & HIDE_OFF_CAMPUS != 0,
            hide_off_card: bits & HIDE_OFF_CARD != 0,
        }
    }
}

/// Complete sort configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct SortState {
    pub flags: DisplayFlags,
    /// Stable name ordering applied before any level. Independent of the stack.
    pub alphabetical: bool,
    levels: [LevelSort; LEVEL_COUNT],
}

impl SortState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_bits(bits: u32) -> Self {
        let mut levels = [LevelSort::UNUSED; LEVEL_COUNT];
        for (level, slot) in levels.iter_mut().enumerate() {
            let nibble = (bits >> level_shift(level)) & 0xF;
            *slot = LevelSort::from_nibble_truncated(nibble as u8);
        }
        SortState {
            flags: DisplayFlags::from_bits(bits),
            alphabetical: bits & ALPHABETICAL != 0,
            levels,
        }
    }

    pub fn to_bits(&self) -> u32 {
        let mut bits = self.flags.to_bits();
        if self.alphabetical {
            bits |= ALPHABETICAL;
        }
        for (level, slot) in self.levels.iter().enumerate() {
            bits |= u32::from(slot.to_nibble()) << level_shift(level);
        }
        bits
    }

    pub fn levels(&self) -> &[LevelSort; LEVEL_COUNT] {
        &self.levels
    }

    pub fn level(&self, level: usize) -> Result<LevelSort> {
        self.levels
            .get(level)
            .copied()
            .ok_or(RankError::InvalidLevel(level))
    }

    /// Overwrite one slot, leaving flags and other levels untouched.
    pub fn set_level(&mut self, level: usize, sort: LevelSort) -> Result<()> {
        let slot = self
            .levels
            .get_mut(level)
            .ok_or(RankError::InvalidLevel(level))?;
        *slot = sort;
        Ok(())
    }

    /// Same as [`SortState::set_level`] but takes the packed nibble form.
    pub fn set_level_code(&mut self, level: usize, nibble: u8) -> Result<()> {
        let sort = LevelSort::from_nibble(nibble)?;
        self.set_level(level, sort)
    }

    pub fn clear_levels(&mut self) {
        self.levels = [LevelSort::UNUSED; LEVEL_COUNT];
    }

    pub fn highest_used_level(&self) -> Option<usize> {
        self.levels.iter().rposition(|slot| !slot.is_unused())
    }

    /// Slot directly above the topmost used level. When the top slot is taken
    /// a free level 0 is reported as is, otherwise the stack is compacted.
    /// `None` once every slot holds a criterion.
    pub fn next_unused_level(&mut self) -> Option<usize> {
        match self.highest_used_level() {
            None => Some(0),
            Some(top) if top + 1 < LEVEL_COUNT => Some(top + 1),
            Some(_) if self.levels[0].is_unused() => Some(0),
            Some(_) => {
                if self.compact_levels() {
                    self.next_unused_level()
                } else {
                    None
                }
            }
        }
    }

    /// Close holes in the stack by shifting higher slots down one level at a
    /// time. Survivors keep their relative order. At most `LEVEL_COUNT - 1`
    /// shifts are spent, and each visited level also consumes one.
    pub fn compact_levels(&mut self) -> bool {
        let mut changed = false;
        let mut shifts_remaining = LEVEL_COUNT as i32 - 1;
        for level in 0..LEVEL_COUNT - 1 {
            while self.levels[level].is_unused() {
                let allowed = shifts_remaining > 0;
                shifts_remaining -= 1;
                if !allowed {
                    break;
                }
                if self.levels[level..].iter().all(LevelSort::is_unused) {
                    return changed;
                }
                // The slot at `level` is empty, so rotating it to the top is
                // the same as shifting everything above it down by one.
                self.levels[level..].rotate_left(1);
                changed = true;
            }
            shifts_remaining -= 1;
        }
        changed
    }

    /// Lowest level holding exactly this criterion and direction.
    pub fn index_of(&self, sort: impl Into<LevelSort>) -> Option<usize> {
        let sort = sort.into();
        self.levels.iter().position(|slot| *slot == sort)
    }

    /// Lowest level holding this criterion in either direction.
    pub fn find_criterion(&self, criterion: Criterion) -> Option<usize> {
        self.levels
            .iter()
            .position(|slot| slot.criterion == criterion && !slot.is_unused())
    }

    /// Stack with `sort` placed at `level` and every occupant from there up to
    /// the first free slot pushed one level higher. `None` when the cascade
    /// runs off the top.
    pub fn with_inserted(
        &self,
        level: usize,
        sort: LevelSort,
    ) -> Result<Option<[LevelSort; LEVEL_COUNT]>> {
        if level >= LEVEL_COUNT {
            return Err(RankError::InvalidLevel(level));
        }
        let Some(free) = self.levels[level..]
            .iter()
            .position(LevelSort::is_unused)
            .map(|offset| level + offset)
        else {
            return Ok(None);
        };

        let mut levels = self.levels;
        levels[level..=free].rotate_right(1);
        levels[level] = sort;
        Ok(Some(levels))
    }

    /// Push `sort` to priority `level`, bumping occupants upward. Leaves the
    /// state untouched and returns `false` when there is no room.
    pub fn insert(&mut self, level: usize, sort: LevelSort) -> Result<bool> {
        match self.with_inserted(level, sort)? {
            Some(levels) => {
                self.levels = levels;
                Ok(true)
            }
            None => Ok(false),
        }
    }
}

impl From<u32> for SortState {
    fn from(bits: u32) -> Self {
        SortState::from_bits(bits)
    }
}

impl From<SortState> for u32 {
    fn from(state: SortState) -> Self {
        state.to_bits()
    }
}

fn level_shift(level: usize) -> u32 {
    FLAG_BITS + 4 * level as u32
}
