//! Customer Card Component
//!
//! One customer with their owed items. Expands to the item and payment forms.

use leptos::prelude::*;

use super::{money, DeleteItemButton, NewItemForm, PaymentForm, PaymentHistory};
use crate::store::{store_delete_item, use_app_store, AppStateStoreFields};

#[component]
pub fn CustomerCard(customer_id: String) -> impl IntoView {
    let store = use_app_store();
    let customer_id = StoredValue::new(customer_id);
    let (expanded, set_expanded) = signal(false);

    let customer = Memo::new(move |_| {
        customer_id.with_value(|id| store.session().read().ledger().customer(id).cloned())
    });

    let delete_item = move |item_id: String| {
        Callback::new(move |_: ()| {
            customer_id.with_value(|id| {
                store_delete_item(&store, id, &item_id);
            });
        })
    };

    view! {
        <div class="customer-card">
            {move || customer.get().map(|c| {
                let outstanding = c.outstanding();
                let balance_class = if outstanding > 0.0 { "customer-balance owing" } else { "customer-balance settled" };
                let item_count = c.items.len();
                view! {
                    <div class="customer-header" on:click=move |_| set_expanded.update(|open| *open = !*open)>
                        <div>
                            <h3 class="customer-name">{c.name.clone()}</h3>
                            <span class="customer-meta">
                                {if item_count == 0 { "No debt".to_string() } else { format!("{} item(s)", item_count) }}
                            </span>
                        </div>
                        <span class=balance_class>{money(outstanding)}</span>
                    </div>
                    <ul class="item-list">
                        {c.items.into_iter().map(|item| view! {
                            <li class="item-row">
                                <span class="item-name">{item.name.clone()}</span>
                                <span class="item-date">{item.date.clone()}</span>
                                <span class="item-cost">{money(item.cost)}</span>
                                <DeleteItemButton item_name=item.name.clone() cost=item.cost on_confirm=delete_item(item.id.clone()) />
                            </li>
                        }).collect_view()}
                    </ul>
                }
            })}

            <Show when=move || expanded.get()>
                <div class="customer-actions">
                    <NewItemForm customer_id=customer_id.get_value() />
                    <PaymentForm customer_id=customer_id.get_value() />
                    <PaymentHistory customer_id=customer_id.get_value() />
                </div>
            </Show>

            <button class="expand-btn" on:click=move |_| set_expanded.update(|open| *open = !*open)>
                {move || if expanded.get() { "Close" } else { "Add Item / Record Payment" }}
            </button>
        </div>
    }
}
