//! Storage Layer
//!
//! Key-value store abstraction and the ledger mirror built on it.

mod traits;
mod memory;
mod config;
mod mirror;

pub use traits::KeyValueStore;
pub use memory::MemoryStore;
pub use config::LedgerConfig;
pub use mirror::{
    load_ledger, recover_ledger, save_customers, save_payments, stored_schema_version, Collection, Recovered,
    SCHEMA_VERSION,
};
