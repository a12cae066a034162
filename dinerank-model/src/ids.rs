use crate::error::{ModelError, Result};

/// Identifier of a real, selectable item. Always strictly positive so it can
/// share the legacy signed id space with partition markers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "i64", into = "i64"))]
pub struct ItemId(i64);

impl ItemId {
    pub fn new(raw: i64) -> Result<Self> {
        if raw > 0 {
            Ok(ItemId(raw))
        } else {
            Err(ModelError::InvalidId(raw))
        }
    }

    pub fn value(&self) -> i64 {
        self.0
    }
}

impl TryFrom<i64> for ItemId {
    type Error = ModelError;

    fn try_from(raw: i64) -> Result<Self> {
        ItemId::new(raw)
    }
}

impl From<ItemId> for i64 {
    fn from(id: ItemId) -> Self {
        id.0
    }
}

impl std::fmt::Display for ItemId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_non_positive_ids() {
        assert_eq!(ItemId::new(0), Err(ModelError::InvalidId(0)));
        assert_eq!(ItemId::new(-3), Err(ModelError::InvalidId(-3)));
        assert_eq!(ItemId::new(42).map(|id| id.value()), Ok(42));
    }
}
