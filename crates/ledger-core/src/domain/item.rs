//! Item Entity
//!
//! One unit of debt owed by a customer.

use serde::{Deserialize, Serialize};
use super::entity::Entity;

/// An owed item. `cost` is the amount still outstanding and is always positive
/// while the item exists.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Item {
    /// Unique identifier
    pub id: String,
    /// What was taken on credit
    pub name: String,
    /// Outstanding amount
    pub cost: f64,
    /// Date the debt was incurred (`YYYY-MM-DD`)
    pub date: String,
}

impl Item {
    pub fn new(id: String, name: String, cost: f64, date: String) -> Self {
        Self { id, name, cost, date }
    }

    /// Case-insensitive match against the item name
    pub fn name_contains(&self, needle_lower: &str) -> bool {
        self.name.to_lowercase().contains(needle_lower)
    }
}

impl Entity for Item {
    fn id(&self) -> &str {
        &self.id
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_item_creation() {
        let item = Item::new("1".into(), "Rice 5kg".into(), 320.0, "2024-03-01".into());
        assert_eq!(item.id(), "1");
        assert_eq!(item.cost, 320.0);
    }

    #[test]
    fn test_item_wire_format() {
        let item = Item::new("7".into(), "Milk".into(), 12.5, "2024-03-01".into());
        let json = serde_json::to_string(&item).unwrap();
        assert_eq!(json, r#"{"id":"7","name":"Milk","cost":12.5,"date":"2024-03-01"}"#);
    }

    #[test]
    fn test_item_accepts_integer_cost() {
        let item: Item =
            serde_json::from_str(r#"{"id":"1","name":"Oil","cost":100,"date":"2024-01-01"}"#).unwrap();
        assert_eq!(item.cost, 100.0);
    }
}
