//! Ledger Totals
//!
//! Pure sums over the ledger. Nothing is cached; callers recompute on every read.

use serde::Serialize;

use crate::domain::{Customer, PaymentRecord};
use crate::ledger::Ledger;

pub fn customer_outstanding(customer: &Customer) -> f64 {
    customer.outstanding()
}

pub fn total_outstanding(customers: &[Customer]) -> f64 {
    customers.iter().map(customer_outstanding).sum()
}

pub fn total_collected(payments: &[PaymentRecord]) -> f64 {
    payments.iter().map(|payment| payment.amount).sum()
}

/// Everything a customer has paid, overpayments included
pub fn collected_from(payments: &[PaymentRecord], customer_id: &str) -> f64 {
    payments
        .iter()
        .filter(|payment| payment.customer_id == customer_id)
        .map(|payment| payment.amount)
        .sum()
}

/// Headline figures for the dashboard and export page
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LedgerSummary {
    pub total_customers: usize,
    pub customers_with_debt: usize,
    pub total_outstanding: f64,
    pub total_collected: f64,
}

impl LedgerSummary {
    pub fn of(ledger: &Ledger) -> Self {
        let customers = ledger.customers();
        Self {
            total_customers: customers.len(),
            customers_with_debt: customers.iter().filter(|c| c.has_debt()).count(),
            total_outstanding: total_outstanding(customers),
            total_collected: total_collected(ledger.payments()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Item;

    fn customer(id: &str, costs: &[f64]) -> Customer {
        let mut customer = Customer::new(id.into(), format!("customer {}", id));
        for (i, cost) in costs.iter().enumerate() {
            customer
                .items
                .push(Item::new(format!("{}-{}", id, i), "thing".into(), *cost, "2024-01-01".into()));
        }
        customer
    }

    #[test]
    fn test_total_outstanding_matches_per_customer_sum() {
        let compositions: [Vec<Customer>; 4] = [
            vec![],
            vec![customer("a", &[])],
            vec![customer("a", &[10.0, 20.0]), customer("b", &[]), customer("c", &[5.5])],
            vec![customer("a", &[1.0]), customer("b", &[2.0]), customer("c", &[3.0, 4.0, 5.0])],
        ];
        for customers in compositions {
            let per_customer: f64 = customers.iter().map(customer_outstanding).sum();
            assert_eq!(total_outstanding(&customers), per_customer);
        }
    }

    #[test]
    fn test_collected_sums_all_and_per_customer() {
        let payments = vec![
            PaymentRecord::new("1".into(), "a".into(), 100.0, "t".into()),
            PaymentRecord::new("2".into(), "b".into(), 25.0, "t".into()),
            PaymentRecord::new("3".into(), "a".into(), 10.0, "t".into()),
        ];
        assert_eq!(total_collected(&payments), 135.0);
        assert_eq!(collected_from(&payments, "a"), 110.0);
        assert_eq!(collected_from(&payments, "missing"), 0.0);
    }

    #[test]
    fn test_summary_counts_customers_with_debt() {
        let ledger = Ledger::from_parts(
            vec![customer("1", &[10.0]), customer("2", &[]), customer("3", &[1.0, 2.0])],
            vec![PaymentRecord::new("4".into(), "2".into(), 40.0, "t".into())],
        );
        let summary = LedgerSummary::of(&ledger);
        assert_eq!(summary.total_customers, 3);
        assert_eq!(summary.customers_with_debt, 2);
        assert_eq!(summary.total_outstanding, 13.0);
        assert_eq!(summary.total_collected, 40.0);
    }
}
