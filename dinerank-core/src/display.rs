//! Row presentation helpers
//!
//! Settings here only change how rows are rendered, never the order, so they
//! live outside the packed [`SortState`](crate::sorting::SortState).

use crate::distance::format_distance;
use dinerank_model::{Hours, ItemAttributes};

/// Minutes at or above which an open item is simply "open".
const ALL_DAY_MINUTES: i32 = 1440;
/// Countdowns at or below this many minutes are shown as minutes.
const COUNTDOWN_MINUTES: i32 = 60;

/// Presentation toggles for list rows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DisplaySettings {
    pub show_favorite_icon: bool,
    pub gray_closed: bool,
    /// Show the item type instead of the hours line.
    pub show_item_type: bool,
    pub show_distances: bool,
}

// Starts out with the columns `set_all_flags_to_default` picks for a stack
// without the favorite criterion, not with everything off.
impl Default for DisplaySettings {
    fn default() -> Self {
        DisplaySettings {
            show_favorite_icon: true,
            gray_closed: true,
            show_item_type: false,
            show_distances: false,
        }
    }
}

/// Short human description of an item's hours.
pub fn hours_text(hours: &Hours) -> String {
    if hours.is_open() {
        let minutes = hours.minutes_to_close;
        if minutes >= ALL_DAY_MINUTES {
            "open".to_string()
        } else if minutes <= COUNTDOWN_MINUTES {
            format!("open for {minutes} minutes")
        } else {
            match hours.next_close {
                Some(at) => format!("open until {}", at.format("%H:%M")),
                None => "open".to_string(),
            }
        }
    } else if hours.minutes_to_open > 0 {
        let minutes = hours.minutes_to_open;
        if minutes <= COUNTDOWN_MINUTES {
            format!("closed, opens in {minutes} minutes")
        } else {
            match hours.next_open {
                Some(at) => format!("closed until {}", at.format("%H:%M")),
                None => "closed".to_string(),
            }
        }
    } else {
        "closed".to_string()
    }
}

/// Middle column: the item type when enabled, otherwise the hours line.
pub fn special_text(attributes: &ItemAttributes, settings: &DisplaySettings) -> String {
    if settings.show_item_type {
        attributes.kind.clone()
    } else {
        hours_text(&attributes.hours)
    }
}

/// Right column: formatted distance, or empty when hidden or unknown.
pub fn special_right_text(feet: Option<f64>, settings: &DisplaySettings) -> String {
    match feet {
        Some(feet) if settings.show_distances => format_distance(feet),
        _ => String::new(),
    }
}
