//! Ledger
//!
//! The owned collection of customers and payment history, plus the mutations
//! the UI performs on it. Every mutation validates its input first and leaves
//! the ledger untouched when validation fails.

use tracing::{debug, warn};

use crate::aggregate::{self, LedgerSummary};
use crate::allocator::{allocate_payment, Allocation};
use crate::clock::{iso_date, iso_timestamp, Clock};
use crate::domain::{
    find_by_id, find_by_id_mut, Customer, DomainError, DomainResult, Item, PaymentRecord,
};

/// Largest loaded id that seeds the id counter. Millisecond timestamps stay far
/// below it; anything larger was not generated here and is ignored.
const MAX_SEED_ID: u64 = 9_007_199_254_740_991;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Ledger {
    customers: Vec<Customer>,
    payments: Vec<PaymentRecord>,
    /// Last id handed out; ids never go backwards within a session
    last_id: u64,
}

impl Ledger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a ledger from loaded collections.
    pub fn from_parts(customers: Vec<Customer>, payments: Vec<PaymentRecord>) -> Self {
        let record_ids = customers
            .iter()
            .flat_map(|c| std::iter::once(c.id.as_str()).chain(c.items.iter().map(|i| i.id.as_str())));
        let last_id = record_ids
            .chain(payments.iter().map(|p| p.id.as_str()))
            .filter_map(|id| id.parse::<u64>().ok())
            .filter(|id| *id <= MAX_SEED_ID)
            .max()
            .unwrap_or(0);

        Self { customers, payments, last_id }
    }

    pub fn customers(&self) -> &[Customer] {
        &self.customers
    }

    pub fn payments(&self) -> &[PaymentRecord] {
        &self.payments
    }

    pub fn customer(&self, id: &str) -> Option<&Customer> {
        find_by_id(&self.customers, id)
    }

    /// Payments made by one customer, oldest first
    pub fn payments_for<'a>(&'a self, customer_id: &'a str) -> impl Iterator<Item = &'a PaymentRecord> + 'a {
        self.payments.iter().filter(move |p| p.customer_id == customer_id)
    }

    pub fn total_outstanding(&self) -> f64 {
        aggregate::total_outstanding(&self.customers)
    }

    pub fn total_collected(&self) -> f64 {
        aggregate::total_collected(&self.payments)
    }

    /// Everything one customer has paid, overpayments included
    pub fn collected_from(&self, customer_id: &str) -> f64 {
        aggregate::collected_from(&self.payments, customer_id)
    }

    pub fn summary(&self) -> LedgerSummary {
        LedgerSummary::of(self)
    }

    /// Millisecond timestamp id, bumped past the previous one if the clock stalls
    fn next_id(&mut self, clock: &impl Clock) -> String {
        let now = u64::try_from(clock.now().timestamp_millis()).unwrap_or(0);
        self.last_id = if now > self.last_id { now } else { self.last_id.saturating_add(1) };
        self.last_id.to_string()
    }

    // ========================
    // Mutations
    // ========================

    pub fn add_customer(&mut self, name: &str, clock: &impl Clock) -> DomainResult<Customer> {
        let name = required_name(name, "customer name")?;
        let customer = Customer::new(self.next_id(clock), name);
        debug!(id = %customer.id, "customer added");
        self.customers.push(customer.clone());
        Ok(customer)
    }

    /// Append an item to a customer's debt. An empty `date` means today.
    pub fn add_item(
        &mut self,
        customer_id: &str,
        name: &str,
        cost: f64,
        date: &str,
        clock: &impl Clock,
    ) -> DomainResult<Item> {
        let name = required_name(name, "item name")?;
        let cost = positive_amount(cost, "cost")?;
        if self.customer(customer_id).is_none() {
            return Err(DomainError::NotFound(format!("customer {}", customer_id)));
        }

        let date = match date.trim() {
            "" => iso_date(clock.today()),
            given => given.to_string(),
        };
        let item = Item::new(self.next_id(clock), name, cost, date);
        let customer = find_by_id_mut(&mut self.customers, customer_id)
            .ok_or_else(|| DomainError::NotFound(format!("customer {}", customer_id)))?;
        debug!(customer = %customer_id, item = %item.id, cost, "item added");
        customer.items.push(item.clone());
        Ok(item)
    }

    pub fn delete_item(&mut self, customer_id: &str, item_id: &str) -> DomainResult<Item> {
        let customer = find_by_id_mut(&mut self.customers, customer_id)
            .ok_or_else(|| DomainError::NotFound(format!("customer {}", customer_id)))?;
        let index = customer
            .items
            .iter()
            .position(|item| item.id == item_id)
            .ok_or_else(|| DomainError::NotFound(format!("item {}", item_id)))?;
        debug!(customer = %customer_id, item = %item_id, "item deleted");
        Ok(customer.items.remove(index))
    }

    /// Apply a payment to the customer's items, oldest first, and record it.
    ///
    /// The record always carries the full requested amount, even when part of
    /// it exceeded the customer's debt and was discarded.
    pub fn record_payment(
        &mut self,
        customer_id: &str,
        amount: f64,
        clock: &impl Clock,
    ) -> DomainResult<(PaymentRecord, Allocation)> {
        let amount = positive_amount(amount, "payment")?;
        let customer = find_by_id_mut(&mut self.customers, customer_id)
            .ok_or_else(|| DomainError::NotFound(format!("customer {}", customer_id)))?;

        let allocation = allocate_payment(&customer.items, amount);
        customer.items = allocation.items.clone();
        if allocation.excess > 0.0 {
            warn!(
                customer = %customer_id,
                excess = allocation.excess,
                "payment exceeded outstanding debt; excess discarded"
            );
        }

        let record = PaymentRecord::new(
            self.next_id(clock),
            customer_id.to_string(),
            amount,
            iso_timestamp(clock.now()),
        );
        debug!(customer = %customer_id, payment = %record.id, amount, applied = allocation.applied, "payment recorded");
        self.payments.push(record.clone());
        Ok((record, allocation))
    }
}

/// Parse user-entered money. Accepts only finite numbers above zero.
pub fn parse_amount(input: &str) -> DomainResult<f64> {
    let value: f64 = input
        .trim()
        .parse()
        .map_err(|_| DomainError::InvalidInput(format!("not a number: {:?}", input)))?;
    positive_amount(value, "amount")
}

fn positive_amount(value: f64, what: &str) -> DomainResult<f64> {
    if value.is_finite() && value > 0.0 {
        Ok(value)
    } else {
        Err(DomainError::InvalidInput(format!("{} must be a positive number", what)))
    }
}

fn required_name(input: &str, what: &str) -> DomainResult<String> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        Err(DomainError::InvalidInput(format!("{} is empty", what)))
    } else {
        Ok(trimmed.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clock::FixedClock;

    const T0: i64 = 1_709_285_400_000;

    fn ledger_with_customer() -> (Ledger, String, FixedClock) {
        let clock = FixedClock::at_millis(T0);
        let mut ledger = Ledger::new();
        let customer = ledger.add_customer("  Asha  ", &clock).unwrap();
        (ledger, customer.id, clock)
    }

    #[test]
    fn test_add_customer_trims_and_rejects_blank() {
        let (mut ledger, id, clock) = ledger_with_customer();
        assert_eq!(ledger.customer(&id).unwrap().name, "Asha");
        assert!(matches!(ledger.add_customer("   ", &clock), Err(DomainError::InvalidInput(_))));
        assert_eq!(ledger.customers().len(), 1);
    }

    #[test]
    fn test_ids_stay_unique_when_clock_stalls() {
        let (mut ledger, first, clock) = ledger_with_customer();
        let second = ledger.add_customer("Ravi", &clock).unwrap().id;
        let item = ledger.add_item(&first, "Tea", 10.0, "", &clock).unwrap().id;
        assert_eq!(first, T0.to_string());
        assert_eq!(second, (T0 + 1).to_string());
        assert_eq!(item, (T0 + 2).to_string());
    }

    #[test]
    fn test_from_parts_continues_after_loaded_ids() {
        let mut customer = Customer::new("500".into(), "Asha".into());
        customer.items.push(Item::new("900".into(), "Tea".into(), 5.0, "2024-01-01".into()));
        let mut ledger = Ledger::from_parts(vec![customer], vec![]);
        let next = ledger.add_customer("Ravi", &FixedClock::at_millis(100)).unwrap();
        assert_eq!(next.id, "901");
    }

    #[test]
    fn test_oversized_loaded_ids_do_not_seed_counter() {
        let customer = Customer::new(u64::MAX.to_string(), "Asha".into());
        let mut ledger = Ledger::from_parts(vec![customer], vec![]);
        let clock = FixedClock::at_millis(T0);
        assert_eq!(ledger.add_customer("Ravi", &clock).unwrap().id, T0.to_string());
        assert_eq!(ledger.add_customer("Meena", &clock).unwrap().id, (T0 + 1).to_string());
    }

    #[test]
    fn test_counter_continues_from_largest_seedable_id() {
        let customer = Customer::new(MAX_SEED_ID.to_string(), "Asha".into());
        let mut ledger = Ledger::from_parts(vec![customer], vec![]);
        let next = ledger.add_customer("Ravi", &FixedClock::at_millis(T0)).unwrap();
        assert_eq!(next.id, (MAX_SEED_ID + 1).to_string());
    }

    #[test]
    fn test_add_item_validates_input() {
        let (mut ledger, id, clock) = ledger_with_customer();
        assert!(matches!(ledger.add_item(&id, "", 10.0, "", &clock), Err(DomainError::InvalidInput(_))));
        assert!(matches!(ledger.add_item(&id, "Tea", 0.0, "", &clock), Err(DomainError::InvalidInput(_))));
        assert!(matches!(ledger.add_item(&id, "Tea", -3.0, "", &clock), Err(DomainError::InvalidInput(_))));
        assert!(matches!(ledger.add_item(&id, "Tea", f64::NAN, "", &clock), Err(DomainError::InvalidInput(_))));
        assert!(matches!(ledger.add_item("nobody", "Tea", 3.0, "", &clock), Err(DomainError::NotFound(_))));
        assert!(ledger.customer(&id).unwrap().items.is_empty());
    }

    #[test]
    fn test_add_item_defaults_date_to_today() {
        let (mut ledger, id, clock) = ledger_with_customer();
        let today = ledger.add_item(&id, "Tea", 10.0, " ", &clock).unwrap();
        let given = ledger.add_item(&id, "Rice", 20.0, "2023-12-31", &clock).unwrap();
        assert_eq!(today.date, "2024-03-01");
        assert_eq!(given.date, "2023-12-31");
        assert_eq!(ledger.total_outstanding(), 30.0);
    }

    #[test]
    fn test_delete_item() {
        let (mut ledger, id, clock) = ledger_with_customer();
        let item = ledger.add_item(&id, "Tea", 10.0, "", &clock).unwrap();
        assert!(matches!(ledger.delete_item(&id, "missing"), Err(DomainError::NotFound(_))));
        assert_eq!(ledger.delete_item(&id, &item.id).unwrap(), item);
        assert!(ledger.customer(&id).unwrap().items.is_empty());
    }

    #[test]
    fn test_record_payment_allocates_and_records() {
        let (mut ledger, id, clock) = ledger_with_customer();
        ledger.add_item(&id, "Rice", 100.0, "", &clock).unwrap();
        ledger.add_item(&id, "Oil", 50.0, "", &clock).unwrap();

        let (record, allocation) = ledger.record_payment(&id, 120.0, &clock).unwrap();
        assert_eq!(record.amount, 120.0);
        assert_eq!(record.customer_id, id);
        assert_eq!(record.date, "2024-03-01T09:30:00.000Z");
        assert_eq!(allocation.settled.len(), 1);

        let items = &ledger.customer(&id).unwrap().items;
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].name, "Oil");
        assert_eq!(items[0].cost, 30.0);
        assert_eq!(ledger.payments().len(), 1);
    }

    // Overpayment is recorded at the full amount even though only the debt was
    // applied, so total collected overstates what settled debt.
    #[test]
    fn test_overpayment_records_full_amount() {
        let (mut ledger, id, clock) = ledger_with_customer();
        ledger.add_item(&id, "Rice", 50.0, "", &clock).unwrap();

        let (record, allocation) = ledger.record_payment(&id, 200.0, &clock).unwrap();
        assert_eq!(record.amount, 200.0);
        assert_eq!(allocation.excess, 150.0);
        assert_eq!(ledger.total_outstanding(), 0.0);
        assert_eq!(ledger.total_collected(), 200.0);
    }

    #[test]
    fn test_payment_with_no_items_still_records() {
        let (mut ledger, id, clock) = ledger_with_customer();
        let (_, allocation) = ledger.record_payment(&id, 30.0, &clock).unwrap();
        assert!(allocation.items.is_empty());
        assert_eq!(ledger.payments().len(), 1);
        assert_eq!(ledger.payments_for(&id).count(), 1);
        assert_eq!(ledger.collected_from(&id), 30.0);
    }

    #[test]
    fn test_invalid_payment_is_rejected_without_side_effects() {
        let (mut ledger, id, clock) = ledger_with_customer();
        ledger.add_item(&id, "Rice", 50.0, "", &clock).unwrap();
        let before = ledger.clone();
        assert!(ledger.record_payment(&id, 0.0, &clock).is_err());
        assert!(ledger.record_payment(&id, -1.0, &clock).is_err());
        assert!(ledger.record_payment("nobody", 10.0, &clock).is_err());
        assert_eq!(ledger, before);
    }

    #[test]
    fn test_parse_amount() {
        assert_eq!(parse_amount(" 12.5 "), Ok(12.5));
        assert!(parse_amount("abc").is_err());
        assert!(parse_amount("").is_err());
        assert!(parse_amount("0").is_err());
        assert!(parse_amount("-4").is_err());
        assert!(parse_amount("inf").is_err());
    }
}
