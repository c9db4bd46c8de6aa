//! Delete Item Button Component
//!
//! Removes an owed item after the user confirms which item and amount is
//! being written off.

use leptos::prelude::*;

use super::money;

fn confirm_prompt(item_name: &str, cost: f64) -> String {
    format!("Remove {} ({})?", item_name, money(cost))
}

#[component]
pub fn DeleteItemButton(
    item_name: String,
    cost: f64,
    #[prop(into)] on_confirm: Callback<()>,
) -> impl IntoView {
    let (confirming, set_confirming) = signal(false);
    let prompt = confirm_prompt(&item_name, cost);
    let title = format!("Remove {}", item_name);

    view! {
        {move || {
            if confirming.get() {
                view! {
                    <span class="delete-confirm">
                        <span class="delete-confirm-text">{prompt.clone()}</span>
                        <button
                            class="confirm-btn"
                            on:click=move |ev| {
                                ev.stop_propagation();
                                set_confirming.set(false);
                                on_confirm.run(());
                            }
                        >
                            "Remove"
                        </button>
                        <button
                            class="cancel-btn secondary"
                            on:click=move |ev| {
                                ev.stop_propagation();
                                set_confirming.set(false);
                            }
                        >
                            "Keep"
                        </button>
                    </span>
                }
                .into_any()
            } else {
                view! {
                    <button
                        class="delete-btn"
                        title=title.clone()
                        on:click=move |ev| {
                            ev.stop_propagation();
                            set_confirming.set(true);
                        }
                    >
                        "×"
                    </button>
                }
                .into_any()
            }
        }}
    }
}
