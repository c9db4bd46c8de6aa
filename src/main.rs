//! CreditKeeper Frontend Entry Point

mod commands;
mod context;
mod store;
mod components;
mod app;

use app::App;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();
    if let Err(e) = rolling_logger::init_logger("CreditKeeper") {
        web_sys::console::error_1(&e.into());
    }
    rolling_logger::info("CreditKeeper starting");
    mount_to_body(App);
}
