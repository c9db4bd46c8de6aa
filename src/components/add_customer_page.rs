//! Add Customer Page

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::context::{use_app_context, Page};
use crate::store::{store_add_customer, use_app_store};

/// Pause before returning to the dashboard so the loading state is visible
const ADD_DELAY_MS: u32 = 500;

#[component]
pub fn AddCustomerPage() -> impl IntoView {
    let ctx = use_app_context();
    let store = use_app_store();

    let (name, set_name) = signal(String::new());
    let (loading, set_loading) = signal(false);

    let add_customer = move || {
        if loading.get_untracked() || name.get_untracked().trim().is_empty() {
            return;
        }
        set_loading.set(true);
        // saved immediately; the delay only drives the indicator
        let added = store_add_customer(&store, &name.get_untracked());
        spawn_local(async move {
            TimeoutFuture::new(ADD_DELAY_MS).await;
            set_loading.set(false);
            if added.is_some() {
                set_name.set(String::new());
                ctx.navigate(Page::Dashboard);
            }
        });
    };

    view! {
        <div class="page add-customer-page">
            <button class="back-btn" on:click=move |_| ctx.navigate(Page::Dashboard)>"← Back"</button>
            <h2>"Add New Customer"</h2>
            <p class="page-subtitle">"Start tracking credit for a new customer by adding their details below."</p>

            <form
                class="card add-customer-form"
                on:submit=move |ev: web_sys::SubmitEvent| {
                    ev.prevent_default();
                    add_customer();
                }
            >
                <label for="customer-name">"Customer Name *"</label>
                <input
                    id="customer-name"
                    type="text"
                    placeholder="Enter customer name"
                    prop:value=move || name.get()
                    on:input=move |ev| set_name.set(event_target_value(&ev))
                    disabled=move || loading.get()
                />
                <div class="form-actions">
                    <button type="submit" disabled=move || loading.get() || name.get().trim().is_empty()>
                        {move || if loading.get() { "Adding Customer..." } else { "Add Customer" }}
                    </button>
                    <button type="button" class="secondary" on:click=move |_| ctx.navigate(Page::Dashboard)>
                        "Cancel"
                    </button>
                </div>
            </form>

            <p class="tip">
                "After adding a customer you can record their purchases and payments from the dashboard."
            </p>
        </div>
    }
}
