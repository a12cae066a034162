//! # Dinerank Core
//!
//! Multi-key ranking for a small catalog of dining locations, with section
//! headers and distance annotation.
//!
//! ## Overview
//!
//! - **Sort state**: a six-slot priority stack of criteria plus display
//!   filters, convertible to and from one packed `u32`
//! - **Ranking**: filters, an optional alphabetical base pass, then one stable
//!   merge sort per level so higher levels dominate
//! - **Partitions**: `Favorites`, `Open`, `Closed` and `Other` headers spliced
//!   into the ranked order
//! - **Distances**: great-circle distances from the observer, in feet
//! - **Engine**: [`RankingEngine`] ties these together and skips recomputation
//!   when the state has not changed
//!
//! ## Examples
//!
//! ```
//! use dinerank_core::{CriteriaToggles, InMemoryCatalog, RankingEngine};
//! use dinerank_model::{Entry, Hours, ItemAttributes, ItemId, MarkerKind};
//!
//! let mut cafe = ItemAttributes::named("Cafe");
//! cafe.favorite = true;
//! cafe.hours = Hours::open_for(30);
//! let grill = ItemAttributes::named("Grill");
//!
//! let catalog = InMemoryCatalog::from_items(vec![
//!     (ItemId::new(1)?, grill),
//!     (ItemId::new(2)?, cafe),
//! ])?;
//! let toggles = CriteriaToggles { favorite: true, ..Default::default() };
//! let engine = RankingEngine::from_criteria(catalog, toggles);
//!
//! assert_eq!(engine.entry(0), Some(Entry::Marker(MarkerKind::Favorite)));
//! assert_eq!(engine.entry(1), Some(Entry::Item(ItemId::new(2)?)));
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

#![cfg_attr(docsrs, feature(doc_cfg))]
#![allow(missing_docs)]

pub mod display;
pub mod distance;
pub mod engine;
pub mod error;
pub mod partition;
pub mod ranking;
pub mod repository;
pub mod sorting;

pub use display::DisplaySettings;
pub use distance::{DistanceTable, format_distance, great_circle_meters};
pub use engine::{CriteriaToggles, RankingEngine};
pub use error::{RankError, Result};
pub use partition::{PartitionPlan, insert_partitions};
pub use ranking::rank;
pub use repository::{FixedPosition, InMemoryCatalog, ItemRepository, NoPosition, PositionProvider};
pub use sorting::{Criterion, LEVEL_COUNT, LevelSort, SortDirection, SortState};
