//! Entries of a display order: real items interleaved with section headers.

use crate::error::{ModelError, Result};
use crate::ids::ItemId;
use std::fmt;

/// Section header kinds injected between runs of ranked items.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum MarkerKind {
    Favorite,
    Open,
    Closed,
    Other,
}

impl MarkerKind {
    pub fn all() -> &'static [MarkerKind] {
        use MarkerKind::*;
        &[Favorite, Open, Closed, Other]
    }

    /// Legacy signed id used by consumers that share one id space with items.
    pub fn legacy_id(&self) -> i64 {
        match self {
            MarkerKind::Favorite => -1,
            MarkerKind::Open => -2,
            MarkerKind::Closed => -3,
            MarkerKind::Other => -4,
        }
    }

    pub fn from_legacy_id(raw: i64) -> Option<Self> {
        MarkerKind::all()
            .iter()
            .copied()
            .find(|kind| kind.legacy_id() == raw)
    }

    pub fn label(&self) -> &'static str {
        match self {
            MarkerKind::Favorite => "Favorites",
            MarkerKind::Open => "Open",
            MarkerKind::Closed => "Closed",
            MarkerKind::Other => "Other",
        }
    }
}

impl fmt::Display for MarkerKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// One row of the final display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Entry {
    Item(ItemId),
    Marker(MarkerKind),
}

impl Entry {
    pub fn item_id(&self) -> Option<ItemId> {
        match self {
            Entry::Item(id) => Some(*id),
            Entry::Marker(_) => None,
        }
    }

    pub fn marker(&self) -> Option<MarkerKind> {
        match self {
            Entry::Item(_) => None,
            Entry::Marker(kind) => Some(*kind),
        }
    }

    /// Markers are headers and never selectable.
    pub fn is_selectable(&self) -> bool {
        matches!(self, Entry::Item(_))
    }

    pub fn to_raw(&self) -> i64 {
        match self {
            Entry::Item(id) => id.value(),
            Entry::Marker(kind) => kind.legacy_id(),
        }
    }

    pub fn from_raw(raw: i64) -> Result<Self> {
        if raw > 0 {
            return ItemId::new(raw).map(Entry::Item);
        }
        MarkerKind::from_legacy_id(raw)
            .map(Entry::Marker)
            .ok_or(ModelError::InvalidEntry(raw))
    }
}

impl From<ItemId> for Entry {
    fn from(id: ItemId) -> Self {
        Entry::Item(id)
    }
}

impl From<MarkerKind> for Entry {
    fn from(kind: MarkerKind) -> Self {
        Entry::Marker(kind)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn legacy_ids_match_marker_constants() {
        assert_eq!(Entry::from_raw(-1), Ok(Entry::Marker(MarkerKind::Favorite)));
        assert_eq!(Entry::from_raw(-2), Ok(Entry::Marker(MarkerKind::Open)));
        assert_eq!(Entry::from_raw(-3), Ok(Entry::Marker(MarkerKind::Closed)));
        assert_eq!(Entry::from_raw(-4), Ok(Entry::Marker(MarkerKind::Other)));
        assert_eq!(Entry::Marker(MarkerKind::Closed).to_raw(), -3);
    }

    #[test]
    fn raw_zero_and_unknown_negatives_are_rejected() {
        assert_eq!(Entry::from_raw(0), Err(ModelError::InvalidEntry(0)));
        assert_eq!(Entry::from_raw(-5), Err(ModelError::InvalidEntry(-5)));
    }

    #[test]
    fn only_items_are_selectable() {
        let item = Entry::from_raw(7).unwrap();
        assert!(item.is_selectable());
        assert_eq!(item.to_raw(), 7);
        for kind in MarkerKind::all() {
            assert!(!Entry::Marker(*kind).is_selectable());
        }
    }
}
