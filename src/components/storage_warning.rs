//! Storage Warning Component
//!
//! Shown when part of the saved ledger could not be read. Affected changes
//! are blocked until the user discards the unreadable data.

use leptos::prelude::*;

use crate::store::{store_discard_unreadable, use_app_store, AppStateStoreFields};

#[component]
pub fn StorageWarning() -> impl IntoView {
    let store = use_app_store();
    let unreadable = Memo::new(move |_| store.session().read().unreadable_keys());

    view! {
        <Show when=move || unreadable.with(|keys| !keys.is_empty())>
            <div class="card storage-warning">
                <p>
                    "Some saved data could not be read: "
                    <code>{move || unreadable.get().join(", ")}</code>
                    ". Changes that would overwrite it are blocked. Export what is readable before discarding it."
                </p>
                <button
                    class="secondary"
                    on:click=move |_| {
                        store_discard_unreadable(&store);
                    }
                >
                    "Discard unreadable data"
                </button>
            </div>
        </Show>
    }
}
