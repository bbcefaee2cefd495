use serde::{Deserialize, Serialize};

/// Unique identifier for a stored item.
///
/// Wraps the row id assigned by the database to provide type safety
/// and prevent mixing up item ids with other integer values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ItemId(i64);

impl ItemId {
    /// Creates an item ID from a raw row id.
    pub fn new(id: i64) -> Self {
        Self(id)
    }

    /// Returns the underlying row id.
    pub fn as_i64(&self) -> i64 {
        self.0
    }
}

impl std::fmt::Display for ItemId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<i64> for ItemId {
    fn from(id: i64) -> Self {
        Self(id)
    }
}

impl From<ItemId> for i64 {
    fn from(id: ItemId) -> Self {
        id.0
    }
}

/// The sole persisted entity: an auto-identified named record.
///
/// Items are created once and never updated or deleted; listings
/// return them newest first.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    pub id: ItemId,
    pub name: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn item_id_from_i64_preserves_value() {
        let id = ItemId::from(42);
        assert_eq!(id.as_i64(), 42);
    }

    #[test]
    fn item_id_orders_by_row_id() {
        assert!(ItemId::new(2) > ItemId::new(1));
    }

    #[test]
    fn item_id_serializes_as_bare_integer() {
        let json = serde_json::to_string(&ItemId::new(7)).unwrap();
        assert_eq!(json, "7");
    }

    #[test]
    fn item_serialization_roundtrip() {
        let item = Item {
            id: ItemId::new(1),
            name: "Widget".to_string(),
        };
        let json = serde_json::to_string(&item).unwrap();
        let deserialized: Item = serde_json::from_str(&json).unwrap();
        assert_eq!(item, deserialized);
    }
}
