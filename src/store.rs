//! Global Application State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity. The ledger
//! session lives here; every change goes through the helpers below so it is
//! written back to local storage.

use leptos::prelude::*;
use reactive_stores::Store;

use ledger_core::{
    Allocation, CustomerFilter, Customer, Item, LedgerResult, LedgerSession, PaymentRecord, SystemClock,
};

use crate::commands::BrowserStorage;

/// Global application state with field-level reactivity
#[derive(Clone, Debug, Store)]
pub struct AppState {
    /// Ledger and its storage mirror
    pub session: LedgerSession<BrowserStorage>,
    /// Dashboard search text
    pub search: String,
    /// Dashboard debt filter
    pub filter: CustomerFilter,
}

impl AppState {
    pub fn new(session: LedgerSession<BrowserStorage>) -> Self {
        Self {
            session,
            search: String::new(),
            filter: CustomerFilter::All,
        }
    }
}

/// Type alias for the store
pub type AppStore = Store<AppState>;

/// Get the app store from context
pub fn use_app_store() -> AppStore {
    expect_context::<AppStore>()
}

// ========================
// Store Helper Functions
// ========================

/// Run a session mutation. Rejected input is a silent no-op; storage
/// failures are logged.
fn mutate<T>(
    store: &AppStore,
    action: &str,
    op: impl FnOnce(&mut LedgerSession<BrowserStorage>) -> LedgerResult<T>,
) -> Option<T> {
    let result = {
        let field = store.session();
        let mut session = field.write();
        op(&mut *session)
    };
    match result {
        Ok(value) => Some(value),
        Err(e) if e.is_invalid_input() => {
            tracing::debug!(action, error = %e, "input rejected");
            None
        }
        Err(e) => {
            rolling_logger::error(&format!("{} failed: {}", action, e));
            None
        }
    }
}

pub fn store_add_customer(store: &AppStore, name: &str) -> Option<Customer> {
    mutate(store, "add customer", |session| session.add_customer(name, &SystemClock))
}

pub fn store_add_item(store: &AppStore, customer_id: &str, name: &str, cost: f64, date: &str) -> Option<Item> {
    mutate(store, "add item", |session| session.add_item(customer_id, name, cost, date, &SystemClock))
}

pub fn store_delete_item(store: &AppStore, customer_id: &str, item_id: &str) -> Option<Item> {
    mutate(store, "delete item", |session| session.delete_item(customer_id, item_id))
}

pub fn store_record_payment(store: &AppStore, customer_id: &str, amount: f64) -> Option<(PaymentRecord, Allocation)> {
    mutate(store, "record payment", |session| session.record_payment(customer_id, amount, &SystemClock))
}

/// Drop stored blobs that failed to load so the ledger can be saved again
pub fn store_discard_unreadable(store: &AppStore) -> Option<()> {
    mutate(store, "discard unreadable data", |session| session.discard_unreadable())
}
