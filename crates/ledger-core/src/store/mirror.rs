//! Ledger Mirror
//!
//! Reads and writes the two ledger blobs. Each collection is stored whole as a
//! JSON array and overwritten whole on save.

use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::{info, warn};

use super::config::LedgerConfig;
use super::traits::KeyValueStore;
use crate::domain::{Customer, PaymentRecord};
use crate::error::{LedgerError, LedgerResult};
use crate::ledger::Ledger;

/// Layout version written alongside the blobs. A store without a version
/// entry holds the version 1 layout.
pub const SCHEMA_VERSION: u32 = 1;

/// Load the ledger. Missing blobs are empty collections; malformed ones are
/// reported as [`LedgerError::Corrupt`].
pub fn load_ledger<S: KeyValueStore + ?Sized>(store: &S, config: &LedgerConfig) -> LedgerResult<Ledger> {
    let version = stored_schema_version(store, config)?;
    if version > SCHEMA_VERSION {
        return Err(LedgerError::UnsupportedSchema { found: version, supported: SCHEMA_VERSION });
    }

    let customers: Vec<Customer> = read_collection(store, &config.customers_key)?;
    let payments: Vec<PaymentRecord> = read_collection(store, &config.payments_key)?;
    info!(customers = customers.len(), payments = payments.len(), version, "ledger loaded");
    Ok(Ledger::from_parts(customers, payments))
}

/// One of the two stored collections
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Collection {
    Customers,
    Payments,
}

impl Collection {
    pub const ALL: [Collection; 2] = [Collection::Customers, Collection::Payments];

    pub fn key<'a>(&self, config: &'a LedgerConfig) -> &'a str {
        match self {
            Collection::Customers => &config.customers_key,
            Collection::Payments => &config.payments_key,
        }
    }
}

/// Ledger assembled from whichever collections could be read
#[derive(Debug)]
pub struct Recovered {
    pub ledger: Ledger,
    /// Collections whose stored blob failed to load
    pub unreadable: Vec<Collection>,
    pub errors: Vec<LedgerError>,
}

/// Load each collection on its own, keeping the readable ones. A bad schema
/// version makes both collections unreadable.
pub fn recover_ledger<S: KeyValueStore + ?Sized>(store: &S, config: &LedgerConfig) -> Recovered {
    let schema_error = match stored_schema_version(store, config) {
        Ok(version) if version <= SCHEMA_VERSION => None,
        Ok(found) => Some(LedgerError::UnsupportedSchema { found, supported: SCHEMA_VERSION }),
        Err(e) => Some(e),
    };
    if let Some(e) = schema_error {
        warn!(error = %e, "schema unreadable; nothing loaded");
        return Recovered {
            ledger: Ledger::new(),
            unreadable: Collection::ALL.to_vec(),
            errors: vec![e],
        };
    }

    let mut unreadable = Vec::new();
    let mut errors = Vec::new();
    let customers: Vec<Customer> = read_or_skip(store, config, Collection::Customers, &mut unreadable, &mut errors);
    let payments: Vec<PaymentRecord> = read_or_skip(store, config, Collection::Payments, &mut unreadable, &mut errors);
    info!(customers = customers.len(), payments = payments.len(), unreadable = unreadable.len(), "ledger recovered");
    Recovered { ledger: Ledger::from_parts(customers, payments), unreadable, errors }
}

fn read_or_skip<T: DeserializeOwned, S: KeyValueStore + ?Sized>(
    store: &S,
    config: &LedgerConfig,
    collection: Collection,
    unreadable: &mut Vec<Collection>,
    errors: &mut Vec<LedgerError>,
) -> Vec<T> {
    match read_collection(store, collection.key(config)) {
        Ok(values) => values,
        Err(e) => {
            warn!(key = collection.key(config), error = %e, "collection unreadable");
            unreadable.push(collection);
            errors.push(e);
            Vec::new()
        }
    }
}

pub fn save_customers<S: KeyValueStore + ?Sized>(
    store: &mut S,
    config: &LedgerConfig,
    customers: &[Customer],
) -> LedgerResult<()> {
    write_collection(store, &config.customers_key, customers)?;
    write_schema_version(store, config)
}

pub fn save_payments<S: KeyValueStore + ?Sized>(
    store: &mut S,
    config: &LedgerConfig,
    payments: &[PaymentRecord],
) -> LedgerResult<()> {
    write_collection(store, &config.payments_key, payments)?;
    write_schema_version(store, config)
}

pub fn stored_schema_version<S: KeyValueStore + ?Sized>(store: &S, config: &LedgerConfig) -> LedgerResult<u32> {
    match store.get(&config.schema_key)? {
        None => Ok(1),
        Some(raw) => serde_json::from_str(&raw).map_err(|source| LedgerError::Corrupt {
            key: config.schema_key.clone(),
            source,
        }),
    }
}

fn write_schema_version<S: KeyValueStore + ?Sized>(store: &mut S, config: &LedgerConfig) -> LedgerResult<()> {
    store.set(&config.schema_key, &SCHEMA_VERSION.to_string())
}

fn read_collection<T: DeserializeOwned, S: KeyValueStore + ?Sized>(store: &S, key: &str) -> LedgerResult<Vec<T>> {
    match store.get(key)? {
        None => Ok(Vec::new()),
        Some(raw) => serde_json::from_str(&raw).map_err(|source| LedgerError::Corrupt {
            key: key.to_string(),
            source,
        }),
    }
}

fn write_collection<T: Serialize, S: KeyValueStore + ?Sized>(store: &mut S, key: &str, values: &[T]) -> LedgerResult<()> {
    let json = serde_json::to_string(values)?;
    store.set(key, &json)
}
