//! Payment Allocation
//!
//! Applies one payment across a customer's items, oldest first. Items the
//! payment covers are removed; the first item it cannot cover is reduced and
//! everything after it is left alone.

use crate::domain::Item;

/// Outcome of allocating a payment over an item list
#[derive(Debug, Clone, PartialEq)]
pub struct Allocation {
    /// Items still owed, in their original order
    pub items: Vec<Item>,
    /// Portion of the payment that reduced debt
    pub applied: f64,
    /// Portion left over after every item was settled. Discarded, never credited.
    pub excess: f64,
    /// Ids of items paid off in full
    pub settled: Vec<String>,
}

impl Allocation {
    fn unchanged(items: &[Item]) -> Self {
        Self {
            items: items.to_vec(),
            applied: 0.0,
            excess: 0.0,
            settled: Vec::new(),
        }
    }
}

/// Allocate `amount` over `items` in order.
///
/// Non-positive or non-finite amounts leave the list untouched.
pub fn allocate_payment(items: &[Item], amount: f64) -> Allocation {
    if !(amount.is_finite() && amount > 0.0) {
        return Allocation::unchanged(items);
    }

    let mut remaining = amount;
    let mut kept = Vec::with_capacity(items.len());
    let mut settled = Vec::new();
    let mut rest = items.iter();

    for item in rest.by_ref() {
        if item.cost <= remaining {
            remaining -= item.cost;
            settled.push(item.id.clone());
        } else {
            // cost > remaining, so the reduced cost stays positive
            let mut partial = item.clone();
            partial.cost -= remaining;
            remaining = 0.0;
            kept.push(partial);
            break;
        }
    }
    kept.extend(rest.cloned());

    Allocation {
        items: kept,
        applied: amount - remaining,
        excess: remaining,
        settled,
    }
}
