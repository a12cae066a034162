//! Ranking criteria and the per-level sort descriptor
//!
//! A level holds one criterion plus its direction. The packed form is a
//! 4-bit nibble: the low three bits carry the criterion code and the high bit
//! requests descending order.

use crate::error::{RankError, Result};
use std::fmt;

const CODE_MASK: u8 = 0x7;
const DESCENDING_BIT: u8 = 0x8;

/// One ranking rule that can occupy a priority level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Criterion {
    /// Empty slot
    Unsorted,
    /// Sooner closing first; only ranks the open prefix
    TimeToClose,
    /// Sooner opening first; only ranks the closed suffix
    TimeToOpen,
    /// Favorites before everything else
    Favorite,
    /// Open before closed
    OpenClosed,
    /// Nearest first, once distances are known
    NearFar,
    /// Codes 6 and 7. Kept so packed states round-trip, ranked as a no-op.
    Reserved(u8),
}

impl Criterion {
    pub fn code(&self) -> u8 {
        match self {
            Criterion::Unsorted => 0,
            Criterion::TimeToClose => 1,
            Criterion::TimeToOpen => 2,
            Criterion::Favorite => 3,
            Criterion::OpenClosed => 4,
            Criterion::NearFar => 5,
            Criterion::Reserved(code) => *code & CODE_MASK,
        }
    }

    pub fn from_code(code: u8) -> Self {
        match code & CODE_MASK {
            0 => Criterion::Unsorted,
            1 => Criterion::TimeToClose,
            2 => Criterion::TimeToOpen,
            3 => Criterion::Favorite,
            4 => Criterion::OpenClosed,
            5 => Criterion::NearFar,
            other => Criterion::Reserved(other),
        }
    }

    pub fn id(&self) -> &'static str {
        match self {
            Criterion::Unsorted => "unsorted",
            Criterion::TimeToClose => "time_to_close",
            Criterion::TimeToOpen => "time_to_open",
            Criterion::Favorite => "favorite",
            Criterion::OpenClosed => "open_closed",
            Criterion::NearFar => "near_far",
            Criterion::Reserved(_) => "reserved",
        }
    }
}

impl fmt::Display for Criterion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.id())
    }
}

/// Sort direction for a level. Ascending is the default.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum SortDirection {
    #[default]
    Ascending,
    Descending,
}

impl SortDirection {
    pub fn is_descending(&self) -> bool {
        matches!(self, SortDirection::Descending)
    }
}

/// Criterion plus direction for one priority level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct LevelSort {
    pub criterion: Criterion,
    pub direction: SortDirection,
}

impl Default for LevelSort {
    fn default() -> Self {
        LevelSort::UNUSED
    }
}

impl LevelSort {
    /// The all-zero nibble. Only this value counts as a free slot; an
    /// `Unsorted` level flagged descending still occupies its level.
    pub const UNUSED: LevelSort = LevelSort {
        criterion: Criterion::Unsorted,
        direction: SortDirection::Ascending,
    };

    pub fn ascending(criterion: Criterion) -> Self {
        LevelSort {
            criterion,
            direction: SortDirection::Ascending,
        }
    }

    pub fn descending(criterion: Criterion) -> Self {
        LevelSort {
            criterion,
            direction: SortDirection::Descending,
        }
    }

    pub fn is_unused(&self) -> bool {
        *self == LevelSort::UNUSED
    }

    pub fn is_descending(&self) -> bool {
        self.direction.is_descending()
    }

    pub fn to_nibble(&self) -> u8 {
        let direction = if self.is_descending() {
            DESCENDING_BIT
        } else {
            0
        };
        self.criterion.code() | direction
    }

    /// Decode a 4-bit level value, rejecting anything wider.
    pub fn from_nibble(nibble: u8) -> Result<Self> {
        if nibble > 0xF {
            return Err(RankError::InvalidCriterionCode(nibble));
        }
        Ok(Self::from_nibble_truncated(nibble))
    }

    pub(crate) fn from_nibble_truncated(nibble: u8) -> Self {
        let direction = if nibble & DESCENDING_BIT != 0 {
            SortDirection::Descending
        } else {
            SortDirection::Ascending
        };
        LevelSort {
            criterion: Criterion::from_code(nibble),
            direction,
        }
    }
}

impl From<Criterion> for LevelSort {
    fn from(criterion: Criterion) -> Self {
        LevelSort::ascending(criterion)
    }
}
