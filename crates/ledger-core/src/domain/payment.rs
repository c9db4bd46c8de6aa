//! Payment Record Entity

use serde::{Deserialize, Serialize};
use super::entity::Entity;

/// Immutable receipt of one payment event.
///
/// `customer_id` is a back-reference; the customer owns nothing here.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaymentRecord {
    pub id: String,
    pub customer_id: String,
    /// Full requested amount, including any part that exceeded the debt
    pub amount: f64,
    /// RFC 3339 timestamp
    pub date: String,
}

impl PaymentRecord {
    pub fn new(id: String, customer_id: String, amount: f64, date: String) -> Self {
        Self { id, customer_id, amount, date }
    }
}

impl Entity for PaymentRecord {
    fn id(&self) -> &str {
        &self.id
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_customer_id_uses_camel_case() {
        let record = PaymentRecord::new("9".into(), "1".into(), 50.0, "2024-01-01T00:00:00.000Z".into());
        let json = serde_json::to_value(&record).unwrap();
        assert_eq!(json["customerId"], "1");
        assert!(json.get("customer_id").is_none());
    }
}
