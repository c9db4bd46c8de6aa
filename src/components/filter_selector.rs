//! Filter Selector Component
//!
//! Buttons choosing which customers the dashboard lists.

use leptos::prelude::*;
use ledger_core::CustomerFilter;

use crate::store::{use_app_store, AppStateStoreFields};

#[component]
pub fn FilterSelector() -> impl IntoView {
    let store = use_app_store();

    view! {
        <div class="filter-selector">
            {CustomerFilter::ALL.iter().map(|filter| {
                let filter = *filter;
                let is_selected = move || store.filter().get() == filter;
                view! {
                    <button
                        class=move || if is_selected() { "filter-btn active" } else { "filter-btn" }
                        on:click=move |_| store.filter().set(filter)
                    >
                        {filter.label()}
                    </button>
                }
            }).collect_view()}
        </div>
    }
}
