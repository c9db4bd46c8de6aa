//! Customer Search
//!
//! Free-text search over customer and item names combined with a debt filter.

use crate::domain::Customer;

/// Which customers to show
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CustomerFilter {
    #[default]
    All,
    /// Customers with at least one outstanding item
    WithDebt,
    /// Customers who owe nothing
    Settled,
}

impl CustomerFilter {
    pub const ALL: [CustomerFilter; 3] = [CustomerFilter::All, CustomerFilter::WithDebt, CustomerFilter::Settled];

    pub fn label(&self) -> &'static str {
        match self {
            CustomerFilter::All => "All",
            CustomerFilter::WithDebt => "With debt",
            CustomerFilter::Settled => "Settled",
        }
    }

    pub fn accepts(&self, customer: &Customer) -> bool {
        match self {
            CustomerFilter::All => true,
            CustomerFilter::WithDebt => customer.has_debt(),
            CustomerFilter::Settled => !customer.has_debt(),
        }
    }
}

/// Customers matching `query` (case-insensitive, customer or item name) and
/// `filter`, in ledger order. A blank query matches everyone.
pub fn search_customers<'a>(customers: &'a [Customer], query: &str, filter: CustomerFilter) -> Vec<&'a Customer> {
    let needle = query.trim().to_lowercase();
    customers
        .iter()
        .filter(|customer| filter.accepts(customer))
        .filter(|customer| {
            needle.is_empty()
                || customer.name.to_lowercase().contains(&needle)
                || customer.items.iter().any(|item| item.name_contains(&needle))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Item;

    fn sample() -> Vec<Customer> {
        let mut asha = Customer::new("1".into(), "Asha Rao".into());
        asha.items.push(Item::new("2".into(), "Basmati Rice".into(), 300.0, "2024-01-01".into()));
        let ravi = Customer::new("3".into(), "Ravi".into());
        let mut meena = Customer::new("4".into(), "Meena".into());
        meena.items.push(Item::new("5".into(), "Soap".into(), 40.0, "2024-01-02".into()));
        vec![asha, ravi, meena]
    }

    fn ids(found: Vec<&Customer>) -> Vec<&str> {
        found.into_iter().map(|c| c.id.as_str()).collect()
    }

    #[test]
    fn test_blank_query_returns_everyone_in_order() {
        let customers = sample();
        assert_eq!(ids(search_customers(&customers, "  ", CustomerFilter::All)), vec!["1", "3", "4"]);
    }

    #[test]
    fn test_matches_customer_and_item_names_case_insensitively() {
        let customers = sample();
        assert_eq!(ids(search_customers(&customers, "ASHA", CustomerFilter::All)), vec!["1"]);
        assert_eq!(ids(search_customers(&customers, "rice", CustomerFilter::All)), vec!["1"]);
        assert!(search_customers(&customers, "flour", CustomerFilter::All).is_empty());
    }

    #[test]
    fn test_filters_by_debt() {
        let customers = sample();
        assert_eq!(ids(search_customers(&customers, "", CustomerFilter::WithDebt)), vec!["1", "4"]);
        assert_eq!(ids(search_customers(&customers, "", CustomerFilter::Settled)), vec!["3"]);
        assert!(search_customers(&customers, "ravi", CustomerFilter::WithDebt).is_empty());
    }
}
