//! Activity Log Component
//!
//! Recent log lines from the in-memory ring buffer, with a text download.

use leptos::prelude::*;

use crate::commands::{self, TEXT_MIME};

const LOG_FILE_NAME: &str = "creditkeeper-log.txt";

#[component]
pub fn ActivityLog() -> impl IntoView {
    let (lines, set_lines) = signal(Vec::<String>::new());
    let refresh = move || set_lines.set(rolling_logger::recent_lines());

    let download = move |_| {
        let text = rolling_logger::recent_lines().join("\n");
        if let Err(e) = commands::download_file(LOG_FILE_NAME, TEXT_MIME, &text) {
            rolling_logger::error(&format!("Log download failed: {}", e));
        }
    };

    view! {
        <details class="card activity-log">
            <summary on:click=move |_| refresh()>"Activity Log"</summary>
            <div class="form-actions">
                <button class="secondary" on:click=move |_| refresh()>"Refresh"</button>
                <button class="secondary" on:click=download>"Download Log"</button>
            </div>
            <pre class="log-lines">{move || lines.get().join("\n")}</pre>
        </details>
    }
}
