//! UI Components
//!
//! Reusable Leptos components.

mod header;
mod summary_cards;
mod filter_selector;
mod dashboard;
mod customer_card;
mod new_item_form;
mod payment_form;
mod payment_history;
mod delete_item_button;
mod storage_warning;
mod activity_log;
mod add_customer_page;
mod export_page;

pub use header::Header;
pub use summary_cards::SummaryCards;
pub use filter_selector::FilterSelector;
pub use dashboard::Dashboard;
pub use customer_card::CustomerCard;
pub use new_item_form::NewItemForm;
pub use payment_form::PaymentForm;
pub use payment_history::PaymentHistory;
pub use delete_item_button::DeleteItemButton;
pub use storage_warning::StorageWarning;
pub use activity_log::ActivityLog;
pub use add_customer_page::AddCustomerPage;
pub use export_page::ExportPage;

/// Amounts are shown in rupees with two decimals
pub fn money(amount: f64) -> String {
    format!("₹{:.2}", amount)
}
