//! Domain Layer
//!
//! Ledger entities and the core entity abstraction.
//! This layer depends on serde only.

mod entity;
mod item;
mod customer;
mod payment;

pub use entity::{Entity, DomainError, DomainResult, find_by_id, find_by_id_mut};
pub use item::Item;
pub use customer::Customer;
pub use payment::PaymentRecord;
