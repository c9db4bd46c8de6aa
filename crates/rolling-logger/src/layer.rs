//! Tracing layer that formats events into single lines

use std::fmt::{self, Write as _};
use std::sync::{Arc, Mutex};

use tracing::field::{Field, Visit};
use tracing::{Event, Level, Subscriber};
use tracing_subscriber::layer::{Context, Layer};

use crate::buffer::RingBuffer;

pub struct RollingLayer {
    app_name: String,
    buffer: Arc<Mutex<RingBuffer>>,
}

impl RollingLayer {
    pub fn new(app_name: &str, buffer: Arc<Mutex<RingBuffer>>) -> Self {
        Self {
            app_name: app_name.to_string(),
            buffer,
        }
    }

    fn format_line(&self, level: &Level, target: &str, message: &str) -> String {
        format!(
            "[{}] {} {:<5} {}: {}",
            chrono::Local::now().format("%H:%M:%S%.3f"),
            self.app_name,
            level,
            target,
            message
        )
    }
}

impl<S: Subscriber> Layer<S> for RollingLayer {
    fn on_event(&self, event: &Event<'_>, _ctx: Context<'_, S>) {
        let mut visitor = MessageVisitor::default();
        event.record(&mut visitor);

        let meta = event.metadata();
        let line = self.format_line(meta.level(), meta.target(), &visitor.finish());
        crate::sink::write(meta.level(), &line);

        if let Ok(mut buffer) = self.buffer.lock() {
            buffer.push(line);
        }
    }
}

/// Collects the `message` field plus any structured fields as `key=value`
#[derive(Default)]
struct MessageVisitor {
    message: String,
    fields: String,
}

impl MessageVisitor {
    fn finish(self) -> String {
        if self.fields.is_empty() {
            self.message
        } else if self.message.is_empty() {
            self.fields.trim_start().to_string()
        } else {
            format!("{}{}", self.message, self.fields)
        }
    }
}

impl Visit for MessageVisitor {
    fn record_str(&mut self, field: &Field, value: &str) {
        if field.name() == "message" {
            self.message = value.to_string();
        } else {
            let _ = write!(self.fields, " {}={}", field.name(), value);
        }
    }

    fn record_debug(&mut self, field: &Field, value: &dyn fmt::Debug) {
        if field.name() == "message" {
            self.message = format!("{:?}", value);
        } else {
            let _ = write!(self.fields, " {}={:?}", field.name(), value);
        }
    }
}
