use crate::hours::Hours;
use crate::ids::ItemId;

const MICRO_DEGREES: f64 = 1.0e-6;

/// Geographic position in decimal degrees.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GeoPoint {
    pub lat: f64,
    pub lon: f64,
}

impl GeoPoint {
    pub fn new(lat: f64, lon: f64) -> Self {
        GeoPoint { lat, lon }
    }
}

/// Stored coordinates in integer micro-degrees.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MicroCoordinates {
    pub lat_e6: i32,
    pub lon_e6: i32,
}

impl MicroCoordinates {
    pub fn new(lat_e6: i32, lon_e6: i32) -> Self {
        MicroCoordinates { lat_e6, lon_e6 }
    }

    pub fn to_point(&self) -> GeoPoint {
        GeoPoint::new(
            f64::from(self.lat_e6) * MICRO_DEGREES,
            f64::from(self.lon_e6) * MICRO_DEGREES,
        )
    }
}

/// Everything the ranking engine consults about one item.
/// Missing fields fall back to [`ItemAttributes::default`], which counts an
/// item as on campus and on the meal card.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct ItemAttributes {
    pub name: String,
    pub favorite: bool,
    pub hours: Hours,
    /// Free-form category shown in place of the hours text when requested.
    pub kind: String,
    pub on_campus: bool,
    /// Whether the item accepts the campus meal card.
    pub on_card: bool,
    pub coordinates: MicroCoordinates,
}

impl Default for ItemAttributes {
    fn default() -> Self {
        ItemAttributes {
            name: String::new(),
            favorite: false,
            hours: Hours::default(),
            kind: String::new(),
            on_campus: true,
            on_card: true,
            coordinates: MicroCoordinates::default(),
        }
    }
}

impl ItemAttributes {
    pub fn named(name: impl Into<String>) -> Self {
        ItemAttributes {
            name: name.into(),
            ..Default::default()
        }
    }

    pub fn is_open(&self) -> bool {
        self.hours.is_open()
    }
}

/// Serialized form of one catalog row.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CatalogItem {
    pub id: ItemId,
    #[cfg_attr(feature = "serde", serde(flatten))]
    pub attributes: ItemAttributes,
}
