use dinerank_core::{CriteriaToggles, FixedPosition, ItemRepository, RankingEngine};
use dinerank_model::GeoPoint;
use serde::{Deserialize, Serialize};

/// Which criteria to rank by.
///
/// The toggles mirror the settings screen. `packed` replaces them with a raw
/// state value when present, which is handy for reproducing a saved layout.
#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct SortConfig {
    pub favorite: bool,
    pub open: bool,
    /// Time-to-close for open items, time-to-open for closed ones.
    pub time_until: bool,
    pub near_far: bool,
    /// Leave `false` to reset every display flag to its default.
    pub settings_modified: bool,
    /// Leave `false` to reset the sort-dependent display flags.
    pub sort_settings_modified: bool,
    /// Overrides the alphabetical base pass chosen by the defaults.
    pub alphabetical: Option<bool>,
    /// Packed sort state. Wins over the toggles above.
    pub packed: Option<u32>,
}

impl SortConfig {
    pub fn toggles(&self) -> CriteriaToggles {
        CriteriaToggles {
            favorite: self.favorite,
            open: self.open,
            time_until: self.time_until,
            near_far: self.near_far,
            settings_modified: self.settings_modified,
            sort_settings_modified: self.sort_settings_modified,
        }
    }
}

/// Optional overrides applied after the sort defaults. Unset fields keep
/// whatever the sort settings chose.
#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct DisplayConfig {
    pub show_favorite_icon: Option<bool>,
    pub gray_closed: Option<bool>,
    pub show_item_type: Option<bool>,
    pub show_distances: Option<bool>,
    pub hide_off_campus: Option<bool>,
    pub hide_off_card: Option<bool>,
}

impl DisplayConfig {
    /// Write the set overrides into `engine`. Filter changes stay pending until
    /// the next ranking pass.
    pub fn apply_to<R: ItemRepository>(&self, engine: &mut RankingEngine<R>) {
        if let Some(show) = self.show_favorite_icon {
            engine.set_show_favorite_icon(show);
        }
        if let Some(gray) = self.gray_closed {
            engine.set_gray_closed(gray);
        }
        if let Some(show) = self.show_item_type {
            engine.set_show_item_type(show);
        }
        if let Some(show) = self.show_distances {
            engine.set_show_distances(show);
        }
        if let Some(hide) = self.hide_off_campus {
            engine.set_hide_off_campus(hide);
        }
        if let Some(hide) = self.hide_off_card {
            engine.set_hide_off_card(hide);
        }
    }
}

/// Fixed observer location in decimal degrees.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize, Serialize)]
pub struct PositionConfig {
    pub lat: f64,
    pub lon: f64,
}

impl PositionConfig {
    pub fn provider(&self) -> FixedPosition {
        FixedPosition(GeoPoint::new(self.lat, self.lon))
    }
}
