//! CreditKeeper App
//!
//! Header plus the active page.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::commands;
use crate::components::{AddCustomerPage, Dashboard, ExportPage, Header};
use crate::context::{AppContext, Page};
use crate::store::AppState;

#[component]
pub fn App() -> impl IntoView {
    let theme = commands::load_theme();
    commands::apply_theme(theme);

    let (page, set_page) = signal(Page::Dashboard);
    let theme = signal(theme);

    // Provide context to all children
    provide_context(AppContext::new((page, set_page), theme));
    provide_context(Store::new(AppState::new(commands::open_session())));

    view! {
        <div class="app-layout">
            <Header />
            <main class="main-content">
                {move || match page.get() {
                    Page::Dashboard => view! { <Dashboard /> }.into_any(),
                    Page::AddCustomer => view! { <AddCustomerPage /> }.into_any(),
                    Page::Export => view! { <ExportPage /> }.into_any(),
                }}
            </main>
        </div>
    }
}
