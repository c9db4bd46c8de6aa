//! CreditKeeper Ledger Core
//!
//! Layered like the front end expects it:
//! - domain: customers, items and payment records
//! - ledger: the owned ledger and its mutations
//! - allocator / aggregate: payment allocation and totals
//! - store: key-value persistence mirror
//! - session: ledger + store with write-through on every mutation
//! - export: JSON backup and CSV report

pub mod domain;
pub mod clock;
pub mod allocator;
pub mod aggregate;
pub mod ledger;
pub mod search;
pub mod store;
pub mod session;
pub mod export;
mod error;


pub use domain::{Customer, DomainError, DomainResult, Entity, Item, PaymentRecord};
pub use clock::{Clock, FixedClock, SystemClock};
pub use allocator::{allocate_payment, Allocation};
pub use aggregate::LedgerSummary;
pub use ledger::{parse_amount, Ledger};
pub use search::{search_customers, CustomerFilter};
pub use store::{Collection, KeyValueStore, LedgerConfig, MemoryStore};
pub use session::LedgerSession;
pub use error::{LedgerError, LedgerResult};
