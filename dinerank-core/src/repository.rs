//! Collaborator interfaces consumed by the engine, plus an in-memory catalog.

use crate::error::{RankError, Result};
use dinerank_model::{CatalogItem, GeoPoint, ItemAttributes, ItemId};
use std::collections::HashMap;

/// Source of the item universe.
///
/// Items are addressed by a dense ordinal in `0..len()` so that caches and
/// distance tables can be plain vectors aligned with the repository.
pub trait ItemRepository {
    fn len(&self) -> usize;

    fn id_at(&self, ordinal: usize) -> ItemId;

    fn attributes_at(&self, ordinal: usize) -> &ItemAttributes;

    fn ordinal_of(&self, id: ItemId) -> Option<usize>;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn item_ids(&self) -> Vec<ItemId> {
        (0..self.len()).map(|ordinal| self.id_at(ordinal)).collect()
    }

    fn attributes(&self, id: ItemId) -> Option<&ItemAttributes> {
        self.ordinal_of(id).map(|ordinal| self.attributes_at(ordinal))
    }
}

/// Where the observer currently is, if known.
pub trait PositionProvider {
    fn current_position(&self) -> Option<GeoPoint>;
}

impl<P: PositionProvider + ?Sized> PositionProvider for &P {
    fn current_position(&self) -> Option<GeoPoint> {
        (**self).current_position()
    }
}

/// Provider that never has a fix.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoPosition;

impl PositionProvider for NoPosition {
    fn current_position(&self) -> Option<GeoPoint> {
        None
    }
}

/// Provider pinned to one configured location.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FixedPosition(pub GeoPoint);

impl PositionProvider for FixedPosition {
    fn current_position(&self) -> Option<GeoPoint> {
        Some(self.0)
    }
}

/// Vector-backed repository preserving insertion order as ordinal order.
#[derive(Debug, Clone, Default)]
pub struct InMemoryCatalog {
    ids: Vec<ItemId>,
    attributes: Vec<ItemAttributes>,
    ordinals: HashMap<ItemId, usize>,
}

impl InMemoryCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_items(
        items: impl IntoIterator<Item = (ItemId, ItemAttributes)>,
    ) -> Result<Self> {
        let mut catalog = Self::new();
        for (id, attributes) in items {
            catalog.push(id, attributes)?;
        }
        Ok(catalog)
    }

    pub fn from_catalog_items(items: impl IntoIterator<Item = CatalogItem>) -> Result<Self> {
        Self::from_items(items.into_iter().map(|item| (item.id, item.attributes)))
    }

    pub fn push(&mut self, id: ItemId, attributes: ItemAttributes) -> Result<usize> {
        if self.ordinals.contains_key(&id) {
            return Err(RankError::DuplicateItem(id));
        }
        let ordinal = self.ids.len();
        self.ids.push(id);
        self.attributes.push(attributes);
        self.ordinals.insert(id, ordinal);
        Ok(ordinal)
    }

    /// Mutable access for attribute changes such as toggling a favorite.
    /// Callers must invalidate any engine cache afterwards.
    pub fn attributes_mut(&mut self, id: ItemId) -> Result<&mut ItemAttributes> {
        let ordinal = self
            .ordinals
            .get(&id)
            .copied()
            .ok_or(RankError::UnknownItem(id))?;
        Ok(&mut self.attributes[ordinal])
    }
}

impl ItemRepository for InMemoryCatalog {
    fn len(&self) -> usize {
        self.ids.len()
    }

    fn id_at(&self, ordinal: usize) -> ItemId {
        self.ids[ordinal]
    }

    fn attributes_at(&self, ordinal: usize) -> &ItemAttributes {
        &self.attributes[ordinal]
    }

    fn ordinal_of(&self, id: ItemId) -> Option<usize> {
        self.ordinals.get(&id).copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn id(raw: i64) -> ItemId {
        ItemId::new(raw).unwrap()
    }

    #[test]
    fn ordinals_follow_insertion_order() {
        let catalog = InMemoryCatalog::from_items(vec![
            (id(30), ItemAttributes::named("c")),
            (id(10), ItemAttributes::named("a")),
        ])
        .unwrap();

        assert_eq!(catalog.item_ids(), vec![id(30), id(10)]);
        assert_eq!(catalog.ordinal_of(id(10)), Some(1));
        assert_eq!(catalog.attributes(id(30)).map(|a| a.name.as_str()), Some("c"));
        assert_eq!(catalog.attributes(id(99)), None);
    }

    #[test]
    fn duplicate_ids_are_rejected() {
        let result = InMemoryCatalog::from_items(vec![
            (id(1), ItemAttributes::named("a")),
            (id(1), ItemAttributes::named("b")),
        ]);
        assert_eq!(result.unwrap_err(), RankError::DuplicateItem(id(1)));
    }

    #[test]
    fn attributes_mut_reports_unknown_items() {
        let mut catalog = InMemoryCatalog::new();
        catalog.push(id(1), ItemAttributes::named("a")).unwrap();
        catalog.attributes_mut(id(1)).unwrap().favorite = true;
        assert!(catalog.attributes(id(1)).unwrap().favorite);
        assert_eq!(
            catalog.attributes_mut(id(2)).unwrap_err(),
            RankError::UnknownItem(id(2))
        );
    }
}
