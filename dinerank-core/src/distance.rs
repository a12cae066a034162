//! Distance annotation
//!
//! Distances are great-circle distances from the observer to each item,
//! stored in feet and aligned with repository ordinals.

use crate::repository::{ItemRepository, PositionProvider};
use dinerank_model::GeoPoint;
use ordered_float::OrderedFloat;
use tracing::debug;

const EARTH_RADIUS_METERS: f64 = 6_371_008.8;
const FEET_PER_METER: f64 = 3.280_839_9;
const FEET_PER_MILE: f64 = 5280.0;

/// Per-ordinal distances in feet.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct DistanceTable {
    feet: Vec<OrderedFloat<f64>>,
}

impl DistanceTable {
    pub fn from_feet(feet: impl IntoIterator<Item = f64>) -> Self {
        Self {
            feet: feet.into_iter().map(OrderedFloat).collect(),
        }
    }

    /// Distances from `here` to every item in `repo`.
    pub fn compute<R>(repo: &R, here: GeoPoint) -> Self
    where
        R: ItemRepository + ?Sized,
    {
        Self::from_feet((0..repo.len()).map(|ordinal| {
            let there = repo.attributes_at(ordinal).coordinates.to_point();
            great_circle_meters(here, there) * FEET_PER_METER
        }))
    }

    pub fn len(&self) -> usize {
        self.feet.len()
    }

    pub fn is_empty(&self) -> bool {
        self.feet.is_empty()
    }

    pub fn feet_at(&self, ordinal: usize) -> Option<f64> {
        self.feet.get(ordinal).map(|feet| feet.0)
    }

    pub(crate) fn key_at(&self, ordinal: usize) -> OrderedFloat<f64> {
        self.feet[ordinal]
    }
}

/// Fresh table from the provider's current position, or `None` without a fix.
pub fn refresh_distances<R, P>(repo: &R, provider: &P) -> Option<DistanceTable>
where
    R: ItemRepository + ?Sized,
    P: PositionProvider + ?Sized,
{
    let Some(here) = provider.current_position() else {
        debug!("no position fix; keeping previous distances");
        return None;
    };
    let table = DistanceTable::compute(repo, here);
    debug!(
        lat = here.lat,
        lon = here.lon,
        items = table.len(),
        "refreshed distances"
    );
    Some(table)
}

/// Haversine distance on a spherical earth.
pub fn great_circle_meters(from: GeoPoint, to: GeoPoint) -> f64 {
    let (lat1, lat2) = (from.lat.to_radians(), to.lat.to_radians());
    let d_lat = lat2 - lat1;
    let d_lon = (to.lon - from.lon).to_radians();

    let a = (d_lat / 2.0).sin().powi(2)
        + lat1.cos() * lat2.cos() * (d_lon / 2.0).sin().powi(2);
    let c = 2.0 * a.sqrt().atan2((1.0 - a).sqrt());
    EARTH_RADIUS_METERS * c
}

/// Short display form: nearest 10 ft under 1000 ft, else nearest 0.1 mi.
pub fn format_distance(feet: f64) -> String {
    if feet < 1000.0 {
        let rounded = (feet / 10.0 + 0.5).floor() as i64 * 10;
        format!("{rounded} ft")
    } else {
        let tenths = (feet / FEET_PER_MILE * 10.0 + 0.5).floor();
        format!("{:.1} mi", tenths / 10.0)
    }
}
