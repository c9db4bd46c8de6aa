//! New Item Form Component
//!
//! Form for adding an owed item to a customer.

use leptos::prelude::*;
use ledger_core::parse_amount;

use crate::store::{store_add_item, use_app_store};

/// Form for adding an item to one customer's debt
#[component]
pub fn NewItemForm(customer_id: String) -> impl IntoView {
    let store = use_app_store();
    let customer_id = StoredValue::new(customer_id);

    let (name, set_name) = signal(String::new());
    let (cost, set_cost) = signal(String::new());
    let (date, set_date) = signal(String::new());

    let add_item = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let amount = match parse_amount(&cost.get()) {
            Ok(amount) => amount,
            Err(e) => {
                tracing::debug!(error = %e, "item cost rejected");
                return;
            }
        };
        let added = customer_id.with_value(|id| store_add_item(&store, id, &name.get(), amount, &date.get()));
        if added.is_some() {
            set_name.set(String::new());
            set_cost.set(String::new());
            set_date.set(String::new());
        }
    };

    view! {
        <form class="new-item-form" on:submit=add_item>
            <input
                type="text"
                placeholder="Item name"
                prop:value=move || name.get()
                on:input=move |ev| set_name.set(event_target_value(&ev))
            />
            <input
                type="number"
                min="0"
                step="0.01"
                placeholder="Cost"
                prop:value=move || cost.get()
                on:input=move |ev| set_cost.set(event_target_value(&ev))
            />
            <input
                type="date"
                title="Date (defaults to today)"
                prop:value=move || date.get()
                on:input=move |ev| set_date.set(event_target_value(&ev))
            />
            <button type="submit">"Add Item"</button>
        </form>
    }
}
