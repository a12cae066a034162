//! JSON catalog files
//!
//! A catalog is a JSON array of rows, each an `id` plus the item attributes:
//!
//! ```json
//! [
//!   {"id": 1, "name": "Commons", "favorite": true, "on_campus": true,
//!    "on_card": true, "hours": {"open_now": true, "minutes_to_close": 45}}
//! ]
//! ```

use anyhow::{Context, anyhow};
use dinerank_core::{InMemoryCatalog, ItemRepository};
use dinerank_model::CatalogItem;
use std::{fs, path::Path};
use tracing::debug;

pub fn load_catalog(path: &Path) -> anyhow::Result<InMemoryCatalog> {
    let contents = fs::read_to_string(path)
        .with_context(|| format!("failed to read catalog from {}", path.display()))?;
    let catalog = parse_catalog(&contents)
        .with_context(|| format!("invalid catalog {}", path.display()))?;
    debug!(path = %path.display(), items = catalog.len(), "loaded catalog");
    Ok(catalog)
}

pub fn parse_catalog(raw: &str) -> anyhow::Result<InMemoryCatalog> {
    let rows: Vec<CatalogItem> =
        serde_json::from_str(raw).map_err(|err| anyhow!("invalid catalog json: {err}"))?;
    Ok(InMemoryCatalog::from_catalog_items(rows)?)
}
