//! Header Component
//!
//! Brand, page navigation and the theme toggle.

use leptos::prelude::*;

use crate::commands::Theme;
use crate::context::{use_app_context, Page};

const NAV_ITEMS: &[(Page, &str)] = &[
    (Page::Dashboard, "Dashboard"),
    (Page::AddCustomer, "Add Customer"),
    (Page::Export, "Export Data"),
];

#[component]
pub fn Header() -> impl IntoView {
    let ctx = use_app_context();

    let nav_class = move |page: Page| {
        if ctx.page.get() == page { "nav-btn active" } else { "nav-btn" }
    };

    view! {
        <header class="app-header">
            <div class="brand" on:click=move |_| ctx.navigate(Page::Dashboard)>
                <h1 class="brand-title">"CreditKeeper"</h1>
                <p class="brand-subtitle">"Smart Credit Management"</p>
            </div>

            <nav class="app-nav">
                {NAV_ITEMS.iter().map(|(page, label)| {
                    let page = *page;
                    view! {
                        <button class=move || nav_class(page) on:click=move |_| ctx.navigate(page)>
                            {*label}
                        </button>
                    }
                }).collect_view()}
                <button
                    class="theme-toggle"
                    title=move || if ctx.theme.get() == Theme::Dark { "Switch to light mode" } else { "Switch to dark mode" }
                    on:click=move |_| ctx.toggle_theme()
                >
                    {move || if ctx.theme.get() == Theme::Dark { "☀" } else { "☾" }}
                </button>
            </nav>
        </header>
    }
}
