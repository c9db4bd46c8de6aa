//! Ledger Session
//!
//! Owns the store and the in-memory ledger. Opening reads the store once;
//! every successful mutation writes the blob it changed straight back.
//!
//! A session opened with [`LedgerSession::recover`] may hold collections whose
//! stored blob could not be read. Those blobs are never overwritten: any
//! mutation that would write one fails with [`LedgerError::Unreadable`] until
//! the blob is explicitly discarded.

use tracing::{info, warn};

use crate::allocator::Allocation;
use crate::clock::Clock;
use crate::domain::{Customer, DomainResult, Item, PaymentRecord};
use crate::error::{LedgerError, LedgerResult};
use crate::ledger::Ledger;
use crate::store::{
    load_ledger, recover_ledger, save_customers, save_payments, Collection, KeyValueStore, LedgerConfig,
};

#[derive(Debug, Clone)]
pub struct LedgerSession<S> {
    store: S,
    config: LedgerConfig,
    ledger: Ledger,
    unreadable: Vec<Collection>,
}

impl<S: KeyValueStore> LedgerSession<S> {
    /// Load the ledger from `store`, failing on any unreadable blob
    pub fn open(store: S, config: LedgerConfig) -> LedgerResult<Self> {
        let ledger = load_ledger(&store, &config)?;
        Ok(Self { store, config, ledger, unreadable: Vec::new() })
    }

    /// Load whatever is readable. Returns the load errors alongside the
    /// session; the collections they cover stay write-protected.
    pub fn recover(store: S, config: LedgerConfig) -> (Self, Vec<LedgerError>) {
        let recovered = recover_ledger(&store, &config);
        let session = Self {
            store,
            config,
            ledger: recovered.ledger,
            unreadable: recovered.unreadable,
        };
        (session, recovered.errors)
    }

    pub fn ledger(&self) -> &Ledger {
        &self.ledger
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Collections whose stored blob failed to load
    pub fn unreadable(&self) -> &[Collection] {
        &self.unreadable
    }

    /// Storage keys of the unreadable collections
    pub fn unreadable_keys(&self) -> Vec<String> {
        self.unreadable.iter().map(|c| c.key(&self.config).to_string()).collect()
    }

    pub fn add_customer(&mut self, name: &str, clock: &impl Clock) -> LedgerResult<Customer> {
        self.apply(&[Collection::Customers], |ledger| ledger.add_customer(name, clock))
    }

    pub fn add_item(
        &mut self,
        customer_id: &str,
        name: &str,
        cost: f64,
        date: &str,
        clock: &impl Clock,
    ) -> LedgerResult<Item> {
        self.apply(&[Collection::Customers], |ledger| {
            ledger.add_item(customer_id, name, cost, date, clock)
        })
    }

    pub fn delete_item(&mut self, customer_id: &str, item_id: &str) -> LedgerResult<Item> {
        self.apply(&[Collection::Customers], |ledger| ledger.delete_item(customer_id, item_id))
    }

    pub fn record_payment(
        &mut self,
        customer_id: &str,
        amount: f64,
        clock: &impl Clock,
    ) -> LedgerResult<(PaymentRecord, Allocation)> {
        self.apply(&Collection::ALL, |ledger| ledger.record_payment(customer_id, amount, clock))
    }

    /// Write both collections
    pub fn flush(&mut self) -> LedgerResult<()> {
        for collection in Collection::ALL {
            self.write(collection)?;
        }
        info!("ledger flushed");
        Ok(())
    }

    /// Delete the unreadable blobs and the schema marker, accepting the loss
    /// of whatever they held. The session becomes fully writable.
    pub fn discard_unreadable(&mut self) -> LedgerResult<()> {
        for collection in self.unreadable.clone() {
            self.store.remove(collection.key(&self.config))?;
            self.unreadable.retain(|c| *c != collection);
            warn!(key = collection.key(&self.config), "unreadable data discarded");
        }
        self.store.remove(&self.config.schema_key)
    }

    pub fn into_parts(self) -> (S, Ledger) {
        (self.store, self.ledger)
    }

    /// Run a ledger mutation and write the touched collections. On a write
    /// failure the ledger and any blob already written are put back.
    fn apply<T>(
        &mut self,
        touched: &[Collection],
        op: impl FnOnce(&mut Ledger) -> DomainResult<T>,
    ) -> LedgerResult<T> {
        if let Some(blocked) = touched.iter().find(|c| self.unreadable.contains(c)) {
            return Err(self.unreadable_error(*blocked));
        }

        let before = self.ledger.clone();
        let value = op(&mut self.ledger)?;
        for (index, collection) in touched.iter().enumerate() {
            if let Err(e) = self.write(*collection) {
                self.ledger = before;
                for written in &touched[..index] {
                    if let Err(restore) = self.write(*written) {
                        warn!(key = written.key(&self.config), error = %restore, "failed to restore blob");
                    }
                }
                return Err(e);
            }
        }
        Ok(value)
    }

    fn write(&mut self, collection: Collection) -> LedgerResult<()> {
        if self.unreadable.contains(&collection) {
            return Err(self.unreadable_error(collection));
        }
        match collection {
            Collection::Customers => save_customers(&mut self.store, &self.config, self.ledger.customers()),
            Collection::Payments => save_payments(&mut self.store, &self.config, self.ledger.payments()),
        }
    }

    fn unreadable_error(&self, collection: Collection) -> LedgerError {
        LedgerError::Unreadable { key: collection.key(&self.config).to_string() }
    }
}
