//! Browser Logging
//!
//! Installs the rolling logger with a sink that forwards every record to
//! the devtools console at the matching severity.

use rolling_logger::{LogBuffer, LogRecord};
use tracing::Level;

fn console_sink(record: &LogRecord) {
    let line = wasm_bindgen::JsValue::from_str(&record.to_string());
    if record.level == Level::ERROR {
        web_sys::console::error_1(&line);
    } else if record.level == Level::WARN {
        web_sys::console::warn_1(&line);
    } else {
        web_sys::console::log_1(&line);
    }
}

/// Install the global subscriber; returns the buffer shown under Diagnostics
pub fn init(capacity: usize) -> LogBuffer {
    match rolling_logger::init(capacity, Some(Box::new(console_sink))) {
        Ok(buffer) => buffer,
        Err(e) => {
            web_sys::console::warn_1(&format!("[LOG] {}", e).into());
            LogBuffer::new(capacity)
        }
    }
}
