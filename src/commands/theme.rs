//! Theme Preference
//!
//! Light/dark preference stored under `theme`, falling back to the system
//! colour scheme.

use ledger_core::KeyValueStore;

use super::storage::BrowserStorage;

pub const THEME_KEY: &str = "theme";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Theme {
    Light,
    Dark,
}

impl Theme {
    pub fn as_str(&self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "light" => Some(Theme::Light),
            "dark" => Some(Theme::Dark),
            _ => None,
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }
}

/// Saved preference, else the system colour scheme
pub fn load_theme() -> Theme {
    BrowserStorage
        .get(THEME_KEY)
        .ok()
        .flatten()
        .and_then(|saved| Theme::parse(&saved))
        .unwrap_or_else(|| if prefers_dark() { Theme::Dark } else { Theme::Light })
}

pub fn save_theme(theme: Theme) {
    let mut storage = BrowserStorage;
    if let Err(e) = storage.set(THEME_KEY, theme.as_str()) {
        rolling_logger::warn(&format!("Failed to save theme: {}", e));
    }
}

/// Toggle the `dark` class on `<html>`
pub fn apply_theme(theme: Theme) {
    let root = web_sys::window()
        .and_then(|window| window.document())
        .and_then(|document| document.document_element());
    if let Some(root) = root {
        let _ = root.class_list().toggle_with_force("dark", theme == Theme::Dark);
    }
}

fn prefers_dark() -> bool {
    web_sys::window()
        .and_then(|window| window.match_media("(prefers-color-scheme: dark)").ok().flatten())
        .map(|query| query.matches())
        .unwrap_or(false)
}
