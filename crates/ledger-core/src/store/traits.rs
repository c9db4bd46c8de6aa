//! Storage Layer - Core Traits
//!
//! A flat string key-value store. Browser local storage in the app,
//! a hash map in tests.

use crate::error::LedgerResult;

pub trait KeyValueStore {
    /// Read a value; `None` when the key was never written
    fn get(&self, key: &str) -> LedgerResult<Option<String>>;

    /// Overwrite a value
    fn set(&mut self, key: &str, value: &str) -> LedgerResult<()>;

    /// Delete a value; removing a missing key is not an error
    fn remove(&mut self, key: &str) -> LedgerResult<()>;
}
