//! Storage keys

/// Keys the ledger is mirrored under
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LedgerConfig {
    pub customers_key: String,
    pub payments_key: String,
    pub schema_key: String,
}

impl Default for LedgerConfig {
    fn default() -> Self {
        Self {
            customers_key: "creditkeeper-customers".to_string(),
            payments_key: "creditkeeper-payments".to_string(),
            schema_key: "creditkeeper-schema-version".to_string(),
        }
    }
}
