//! Payment Form Component
//!
//! Records a payment; the amount settles the oldest items first.

use leptos::prelude::*;
use ledger_core::parse_amount;

use super::money;
use crate::store::{store_record_payment, use_app_store};

#[component]
pub fn PaymentForm(customer_id: String) -> impl IntoView {
    let store = use_app_store();
    let customer_id = StoredValue::new(customer_id);

    let (amount, set_amount) = signal(String::new());
    let (receipt, set_receipt) = signal::<Option<String>>(None);

    let record = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let value = match parse_amount(&amount.get()) {
            Ok(value) => value,
            Err(e) => {
                tracing::debug!(error = %e, "payment amount rejected");
                return;
            }
        };
        if let Some((payment, allocation)) = customer_id.with_value(|id| store_record_payment(&store, id, value)) {
            let settled = allocation.settled.len();
            set_receipt.set(Some(format!(
                "Received {}, {} item(s) settled",
                money(payment.amount),
                settled
            )));
            set_amount.set(String::new());
        }
    };

    view! {
        <form class="payment-form" on:submit=record>
            <input
                type="number"
                min="0"
                step="0.01"
                placeholder="Payment amount"
                prop:value=move || amount.get()
                on:input=move |ev| set_amount.set(event_target_value(&ev))
            />
            <button type="submit" class="pay-btn">"Record Payment"</button>
            {move || receipt.get().map(|text| view! { <span class="payment-receipt">{text}</span> })}
        </form>
    }
}
