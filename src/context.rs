//! Application Context
//!
//! Navigation and theme signals provided via Leptos Context API.

use leptos::prelude::*;

use crate::commands::{self, Theme};

/// Top-level pages
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Page {
    Dashboard,
    AddCustomer,
    Export,
}

/// App-wide signals provided via context
#[derive(Clone, Copy)]
pub struct AppContext {
    /// Page currently shown - read
    pub page: ReadSignal<Page>,
    /// Page currently shown - write
    set_page: WriteSignal<Page>,
    /// Active colour theme - read
    pub theme: ReadSignal<Theme>,
    /// Active colour theme - write
    set_theme: WriteSignal<Theme>,
}

impl AppContext {
    pub fn new(
        page: (ReadSignal<Page>, WriteSignal<Page>),
        theme: (ReadSignal<Theme>, WriteSignal<Theme>),
    ) -> Self {
        Self {
            page: page.0,
            set_page: page.1,
            theme: theme.0,
            set_theme: theme.1,
        }
    }

    pub fn navigate(&self, page: Page) {
        self.set_page.set(page);
    }

    /// Flip the theme, apply it to the document and remember it
    pub fn toggle_theme(&self) {
        let next = self.theme.get_untracked().toggled();
        self.set_theme.set(next);
        commands::apply_theme(next);
        commands::save_theme(next);
    }
}

pub fn use_app_context() -> AppContext {
    expect_context::<AppContext>()
}
