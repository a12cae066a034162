use chrono::NaiveTime;

/// Snapshot of an item's opening hours relative to "now".
///
/// `minutes_to_close` is `-1` while closed. `minutes_to_open` is `-1` when the
/// item is open now or will not open again within the current horizon.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct Hours {
    pub open_now: bool,
    pub minutes_to_close: i32,
    pub minutes_to_open: i32,
    pub next_open: Option<NaiveTime>,
    pub next_close: Option<NaiveTime>,
}

impl Default for Hours {
    fn default() -> Self {
        Hours::closed_for_day()
    }
}

impl Hours {
    pub fn open_for(minutes_to_close: i32) -> Self {
        Hours {
            open_now: true,
            minutes_to_close,
            minutes_to_open: -1,
            next_open: None,
            next_close: None,
        }
    }

    pub fn opens_in(minutes_to_open: i32) -> Self {
        Hours {
            open_now: false,
            minutes_to_close: -1,
            minutes_to_open,
            next_open: None,
            next_close: None,
        }
    }

    pub fn closed_for_day() -> Self {
        Hours {
            open_now: false,
            minutes_to_close: -1,
            minutes_to_open: -1,
            next_open: None,
            next_close: None,
        }
    }

    pub fn with_next_open(mut self, at: NaiveTime) -> Self {
        self.next_open = Some(at);
        self
    }

    pub fn with_next_close(mut self, at: NaiveTime) -> Self {
        self.next_close = Some(at);
        self
    }

    pub fn is_open(&self) -> bool {
        self.open_now
    }
}
