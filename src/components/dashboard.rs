//! Dashboard Component
//!
//! Totals, search and the customer list.

use leptos::prelude::*;
use ledger_core::search_customers;

use super::{CustomerCard, FilterSelector, StorageWarning, SummaryCards};
use crate::context::{use_app_context, Page};
use crate::store::{use_app_store, AppStateStoreFields};

#[component]
pub fn Dashboard() -> impl IntoView {
    let ctx = use_app_context();
    let store = use_app_store();

    let visible_ids = Memo::new(move |_| {
        let query = store.search().get();
        let filter = store.filter().get();
        let session = store.session().read();
        let ids: Vec<String> = search_customers(session.ledger().customers(), &query, filter)
            .into_iter()
            .map(|customer| customer.id.clone())
            .collect();
        ids
    });
    let has_customers = move || !store.session().read().ledger().customers().is_empty();

    view! {
        <div class="dashboard">
            <StorageWarning />
            <SummaryCards />

            <div class="dashboard-toolbar">
                <input
                    type="search"
                    class="search-input"
                    placeholder="Search customers or items..."
                    prop:value=move || store.search().get()
                    on:input=move |ev| store.search().set(event_target_value(&ev))
                />
                <FilterSelector />
            </div>

            <Show
                when=has_customers
                fallback=move || view! {
                    <div class="empty-state">
                        <p>"No customers yet. Add your first customer to start tracking credit."</p>
                        <button on:click=move |_| ctx.navigate(Page::AddCustomer)>"Add Customer"</button>
                    </div>
                }
            >
                <div class="customer-list">
                    <For
                        each=move || visible_ids.get()
                        key=|id| id.clone()
                        children=move |id| view! { <CustomerCard customer_id=id /> }
                    />
                </div>
                <Show when=move || visible_ids.with(|ids| ids.is_empty())>
                    <p class="no-results">"No customers match your search."</p>
                </Show>
            </Show>
        </div>
    }
}
