//! Rolling Logger
//!
//! Installs a `tracing` subscriber that keeps the most recent log lines in a
//! circular buffer and mirrors each line to the platform sink: the browser
//! console on wasm32, stderr everywhere else.

mod buffer;
mod layer;

use std::sync::{Arc, Mutex, OnceLock};

use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

pub use buffer::RingBuffer;
pub use layer::RollingLayer;

/// Lines kept in memory
pub const DEFAULT_CAPACITY: usize = 500;

static BUFFER: OnceLock<Arc<Mutex<RingBuffer>>> = OnceLock::new();

fn shared_buffer() -> Arc<Mutex<RingBuffer>> {
    BUFFER
        .get_or_init(|| Arc::new(Mutex::new(RingBuffer::new(DEFAULT_CAPACITY))))
        .clone()
}

/// Install the global subscriber. Debug builds log at DEBUG, release at INFO.
pub fn init_logger(app_name: &str) -> Result<(), String> {
    let level = if cfg!(debug_assertions) { LevelFilter::DEBUG } else { LevelFilter::INFO };

    tracing_subscriber::registry()
        .with(level)
        .with(RollingLayer::new(app_name, shared_buffer()))
        .try_init()
        .map_err(|e| format!("failed to install logger: {}", e))
}

/// Snapshot of the buffered lines, oldest first
pub fn recent_lines() -> Vec<String> {
    shared_buffer().lock().map(|buffer| buffer.lines()).unwrap_or_default()
}

pub fn info(message: &str) {
    tracing::info!(target: "app", "{}", message);
}

pub fn warn(message: &str) {
    tracing::warn!(target: "app", "{}", message);
}

pub fn error(message: &str) {
    tracing::error!(target: "app", "{}", message);
}

mod sink {
    use tracing::Level;

    #[cfg(target_arch = "wasm32")]
    pub fn write(level: &Level, line: &str) {
        if *level == Level::ERROR {
            web_sys::console::error_1(&line.into());
        } else if *level == Level::WARN {
            web_sys::console::warn_1(&line.into());
        } else {
            web_sys::console::log_1(&line.into());
        }
    }

    #[cfg(not(target_arch = "wasm32"))]
    pub fn write(_level: &Level, line: &str) {
        eprintln!("{}", line);
    }
}
