//! Browser Bindings
//!
//! Wrappers around the browser APIs the app touches, organized by concern.

mod storage;
mod theme;
mod download;

pub use storage::*;
pub use theme::*;
pub use download::*;
