//! Configuration for dinerank.
//!
//! Loads engine settings from TOML or JSON (file, environment or defaults),
//! reads JSON catalogs into an in-memory repository, and backs the `dinerank`
//! command line.

pub mod catalog;
pub mod models;

pub use catalog::{load_catalog, parse_catalog};
pub use models::settings::{DisplayConfig, PositionConfig, SortConfig};
pub use models::{CONFIG_JSON_VAR, CONFIG_PATH_VAR, ConfigSource, EngineConfig};
