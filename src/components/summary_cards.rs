//! Summary Cards Component
//!
//! Headline ledger totals, recomputed whenever the ledger changes.

use leptos::prelude::*;

use super::money;
use crate::store::{use_app_store, AppStateStoreFields};

#[component]
pub fn SummaryCards() -> impl IntoView {
    let store = use_app_store();
    let summary = Memo::new(move |_| store.session().read().ledger().summary());

    view! {
        <div class="summary-grid">
            <div class="summary-card">
                <span class="summary-label">"Customers"</span>
                <span class="summary-value">{move || summary.get().total_customers}</span>
            </div>
            <div class="summary-card">
                <span class="summary-label">"With Debt"</span>
                <span class="summary-value">{move || summary.get().customers_with_debt}</span>
            </div>
            <div class="summary-card owing">
                <span class="summary-label">"Outstanding"</span>
                <span class="summary-value">{move || money(summary.get().total_outstanding)}</span>
            </div>
            <div class="summary-card collected">
                <span class="summary-label">"Collected"</span>
                <span class="summary-value">{move || money(summary.get().total_collected)}</span>
            </div>
        </div>
    }
}
