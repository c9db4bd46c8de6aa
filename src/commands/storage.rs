//! Local Storage Binding
//!
//! Browser `localStorage` behind the ledger's key-value store trait.

use ledger_core::{KeyValueStore, LedgerConfig, LedgerError, LedgerResult, LedgerSession};
use wasm_bindgen::JsValue;

/// Handle-free view of `window.localStorage`. The storage object is looked up
/// on every call, so this type is `Send + Sync` and can sit in the app store.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct BrowserStorage;

impl BrowserStorage {
    fn local_storage() -> LedgerResult<web_sys::Storage> {
        web_sys::window()
            .ok_or_else(|| LedgerError::Storage("no window".to_string()))?
            .local_storage()
            .map_err(js_error)?
            .ok_or_else(|| LedgerError::Storage("localStorage unavailable".to_string()))
    }
}

impl KeyValueStore for BrowserStorage {
    fn get(&self, key: &str) -> LedgerResult<Option<String>> {
        Self::local_storage()?.get_item(key).map_err(js_error)
    }

    fn set(&mut self, key: &str, value: &str) -> LedgerResult<()> {
        Self::local_storage()?.set_item(key, value).map_err(js_error)
    }

    fn remove(&mut self, key: &str) -> LedgerResult<()> {
        Self::local_storage()?.remove_item(key).map_err(js_error)
    }
}

fn js_error(e: JsValue) -> LedgerError {
    LedgerError::Storage(format!("{:?}", e))
}

/// Load the ledger from local storage.
///
/// Unreadable blobs are logged and left untouched; the session refuses to
/// overwrite them until the user discards them.
pub fn open_session() -> LedgerSession<BrowserStorage> {
    let (session, errors) = LedgerSession::recover(BrowserStorage, LedgerConfig::default());
    for e in &errors {
        rolling_logger::error(&format!("Failed to load stored ledger data: {}", e));
    }
    session
}
