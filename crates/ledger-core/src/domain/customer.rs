//! Customer Entity

use serde::{Deserialize, Serialize};
use super::entity::Entity;
use super::item::Item;

/// A customer and the items they currently owe, oldest first.
///
/// Names are not unique; identity is the `id`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Customer {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub items: Vec<Item>,
}

impl Customer {
    pub fn new(id: String, name: String) -> Self {
        Self { id, name, items: Vec::new() }
    }

    /// Sum of the outstanding cost of every item
    pub fn outstanding(&self) -> f64 {
        self.items.iter().map(|item| item.cost).sum()
    }

    pub fn has_debt(&self) -> bool {
        !self.items.is_empty()
    }
}

impl Entity for Customer {
    fn id(&self) -> &str {
        &self.id
    }
}
