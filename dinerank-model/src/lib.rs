//! Core data model definitions shared across dinerank crates.
#![allow(missing_docs)]

pub use ::chrono;

pub mod entry;
pub mod error;
pub mod hours;
pub mod ids;
pub mod item;

pub use entry::{Entry, MarkerKind};
pub use error::{ModelError, Result as ModelResult};
pub use hours::Hours;
pub use ids::ItemId;
pub use item::{CatalogItem, GeoPoint, ItemAttributes, MicroCoordinates};
