//! Export Page
//!
//! JSON backup and CSV report downloads.

use leptos::prelude::*;
use ledger_core::{export, Clock, SystemClock};

use super::{money, ActivityLog};
use crate::commands::{self, CSV_MIME, JSON_MIME};
use crate::context::{use_app_context, Page};
use crate::store::{use_app_store, AppStateStoreFields};

#[component]
pub fn ExportPage() -> impl IntoView {
    let ctx = use_app_context();
    let store = use_app_store();
    let summary = Memo::new(move |_| store.session().read().ledger().summary());
    let no_customers = move || summary.get().total_customers == 0;

    let download_json = move |_| {
        let now = SystemClock.now();
        let result = export::export_json(store.session().read_untracked().ledger(), now)
            .map_err(|e| e.to_string())
            .and_then(|json| commands::download_file(&export::json_file_name(now.date_naive()), JSON_MIME, &json));
        if let Err(e) = result {
            rolling_logger::error(&format!("JSON export failed: {}", e));
        }
    };

    let download_csv = move |_| {
        let now = SystemClock.now();
        let result = export::export_csv(store.session().read_untracked().ledger())
            .map_err(|e| e.to_string())
            .and_then(|csv| commands::download_file(&export::csv_file_name(now.date_naive()), CSV_MIME, &csv));
        if let Err(e) = result {
            rolling_logger::error(&format!("CSV export failed: {}", e));
        }
    };

    view! {
        <div class="page export-page">
            <button class="back-btn" on:click=move |_| ctx.navigate(Page::Dashboard)>"← Back"</button>
            <h2>"Export Data"</h2>
            <p class="page-subtitle">"Download your customer data and payment history for backup or analysis."</p>

            <div class="summary-grid">
                <div class="summary-card">
                    <span class="summary-label">"Total Customers"</span>
                    <span class="summary-value">{move || summary.get().total_customers}</span>
                </div>
                <div class="summary-card owing">
                    <span class="summary-label">"Total Outstanding"</span>
                    <span class="summary-value">{move || money(summary.get().total_outstanding)}</span>
                </div>
                <div class="summary-card collected">
                    <span class="summary-label">"Total Payments"</span>
                    <span class="summary-value">{move || money(summary.get().total_collected)}</span>
                </div>
            </div>

            <div class="export-grid">
                <div class="card export-card">
                    <h3>"Complete Data Export (JSON)"</h3>
                    <p>"Customers, items with dates, payment history and summary statistics. Suitable for backup."</p>
                    <button on:click=download_json>"Download JSON"</button>
                </div>
                <div class="card export-card">
                    <h3>"Customer Report (CSV)"</h3>
                    <p>"One row per outstanding item, ready for any spreadsheet application."</p>
                    <button class="secondary" on:click=download_csv disabled=no_customers>"Download CSV"</button>
                </div>
            </div>

            <ActivityLog />

            <Show when=no_customers>
                <div class="card empty-state">
                    <p>"You haven't added any customers yet. Start by adding your first customer to begin tracking credit."</p>
                    <button on:click=move |_| ctx.navigate(Page::AddCustomer)>"Add Customer"</button>
                </div>
            </Show>
        </div>
    }
}
