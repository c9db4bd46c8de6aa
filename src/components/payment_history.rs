//! Payment History Component

use leptos::prelude::*;
use ledger_core::PaymentRecord;

use super::money;
use crate::store::{use_app_store, AppStateStoreFields};

/// RFC 3339 timestamp shown in local time
fn display_timestamp(raw: &str) -> String {
    chrono::DateTime::parse_from_rfc3339(raw)
        .map(|at| at.with_timezone(&chrono::Local).format("%d %b %Y, %H:%M").to_string())
        .unwrap_or_else(|_| raw.to_string())
}

/// Payments made by one customer, newest first
#[component]
pub fn PaymentHistory(customer_id: String) -> impl IntoView {
    let store = use_app_store();
    let customer_id = StoredValue::new(customer_id);

    let history = Memo::new(move |_| {
        customer_id.with_value(|id| {
            let mut payments: Vec<PaymentRecord> =
                store.session().read().ledger().payments_for(id).cloned().collect();
            payments.reverse();
            payments
        })
    });
    let total_paid = move || customer_id.with_value(|id| store.session().read().ledger().collected_from(id));

    view! {
        <Show when=move || history.with(|payments| !payments.is_empty())>
            <div class="payment-history">
                <h4>"Payment History" <span class="payment-total">{move || money(total_paid())}</span></h4>
                <ul>
                    <For
                        each=move || history.get()
                        key=|payment| payment.id.clone()
                        children=move |payment| view! {
                            <li class="payment-row">
                                <span class="payment-date">{display_timestamp(&payment.date)}</span>
                                <span class="payment-amount">{money(payment.amount)}</span>
                            </li>
                        }
                    />
                </ul>
            </div>
        </Show>
    }
}
