//! Rolling Logger
//!
//! A `tracing` layer that keeps the most recent log records in a bounded
//! in-memory buffer, and optionally hands every record to a sink (the
//! browser console in the UI).

use std::collections::VecDeque;
use std::fmt::{self, Write as _};
use std::sync::{Arc, Mutex};

use chrono::{SecondsFormat, Utc};
use tracing::field::{Field, Visit};
use tracing::{Event, Level, Subscriber};
use tracing_subscriber::layer::{Context, SubscriberExt};
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::Layer;

/// One captured log event
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogRecord {
    /// RFC 3339, UTC
    pub timestamp: String,
    pub level: Level,
    pub target: String,
    /// Message followed by `key=value` fields
    pub message: String,
}

impl fmt::Display for LogRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {:>5} [{}] {}", self.timestamp, self.level, self.target, self.message)
    }
}

/// Circular buffer of recent records, cheap to clone and share
#[derive(Debug, Clone)]
pub struct LogBuffer {
    inner: Arc<Mutex<VecDeque<LogRecord>>>,
    capacity: usize,
}

impl LogBuffer {
    pub fn new(capacity: usize) -> Self {
        Self {
            inner: Arc::new(Mutex::new(VecDeque::with_capacity(capacity))),
            capacity,
        }
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn push(&self, record: LogRecord) {
        if self.capacity == 0 {
            return;
        }
        // A poisoned lock only means a sink panicked mid-push; keep logging.
        let mut records = self.inner.lock().unwrap_or_else(|e| e.into_inner());
        if records.len() == self.capacity {
            records.pop_front();
        }
        records.push_back(record);
    }

    /// Oldest first
    pub fn snapshot(&self) -> Vec<LogRecord> {
        let records = self.inner.lock().unwrap_or_else(|e| e.into_inner());
        records.iter().cloned().collect()
    }

    /// The newest `n` records, newest first
    pub fn latest(&self, n: usize) -> Vec<LogRecord> {
        let records = self.inner.lock().unwrap_or_else(|e| e.into_inner());
        records.iter().rev().take(n).cloned().collect()
    }

    pub fn len(&self) -> usize {
        self.inner.lock().map(|r| r.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn clear(&self) {
        self.inner.lock().unwrap_or_else(|e| e.into_inner()).clear();
    }
}

/// Callback invoked for every record
pub type Sink = Box<dyn Fn(&LogRecord) + Send + Sync>;

/// Layer that writes events into a `LogBuffer`
pub struct RollingLayer {
    buffer: LogBuffer,
    sink: Option<Sink>,
    max_level: Level,
}

impl RollingLayer {
    pub fn new(buffer: LogBuffer) -> Self {
        Self {
            buffer,
            sink: None,
            max_level: Level::DEBUG,
        }
    }

    pub fn with_sink(mut self, sink: Sink) -> Self {
        self.sink = Some(sink);
        self
    }

    /// Drop events more verbose than `level`
    pub fn with_max_level(mut self, level: Level) -> Self {
        self.max_level = level;
        self
    }
}

#[derive(Default)]
struct MessageVisitor {
    message: String,
    fields: String,
}

impl Visit for MessageVisitor {
    fn record_str(&mut self, field: &Field, value: &str) {
        if field.name() == "message" {
            self.message.push_str(value);
        } else {
            let _ = write!(self.fields, " {}={}", field.name(), value);
        }
    }

    fn record_debug(&mut self, field: &Field, value: &dyn fmt::Debug) {
        if field.name() == "message" {
            let _ = write!(self.message, "{:?}", value);
        } else {
            let _ = write!(self.fields, " {}={:?}", field.name(), value);
        }
    }
}

impl<S: Subscriber> Layer<S> for RollingLayer {
    fn on_event(&self, event: &Event<'_>, _ctx: Context<'_, S>) {
        let metadata = event.metadata();
        // Level ordering: TRACE > DEBUG > INFO > WARN > ERROR
        if *metadata.level() > self.max_level {
            return;
        }

        let mut visitor = MessageVisitor::default();
        event.record(&mut visitor);

        let record = LogRecord {
            timestamp: Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true),
            level: *metadata.level(),
            target: metadata.target().to_string(),
            message: format!("{}{}", visitor.message, visitor.fields),
        };

        if let Some(sink) = &self.sink {
            sink(&record);
        }
        self.buffer.push(record);
    }
}

/// Errors from `init`
#[derive(Debug)]
pub enum InitError {
    /// A global subscriber was already installed
    AlreadyInitialized(String),
}

impl fmt::Display for InitError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InitError::AlreadyInitialized(msg) => write!(f, "Logger already initialized: {}", msg),
        }
    }
}

impl std::error::Error for InitError {}

/// Install a rolling layer as the global subscriber and return its buffer.
pub fn init(capacity: usize, sink: Option<Sink>) -> Result<LogBuffer, InitError> {
    let buffer = LogBuffer::new(capacity);
    let mut layer = RollingLayer::new(buffer.clone());
    if let Some(sink) = sink {
        layer = layer.with_sink(sink);
    }
    tracing_subscriber::registry()
        .with(layer)
        .try_init()
        .map_err(|e| InitError::AlreadyInitialized(e.to_string()))?;
    Ok(buffer)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};

    fn record(message: &str) -> LogRecord {
        LogRecord {
            timestamp: "2024-01-01T00:00:00.000Z".to_string(),
            level: Level::INFO,
            target: "test".to_string(),
            message: message.to_string(),
        }
    }

    #[test]
    fn test_buffer_evicts_oldest() {
        let buffer = LogBuffer::new(3);
        for i in 0..5 {
            buffer.push(record(&format!("event {}", i)));
        }
        let messages: Vec<String> = buffer.snapshot().into_iter().map(|r| r.message).collect();
        assert_eq!(messages, vec!["event 2", "event 3", "event 4"]);

        let latest: Vec<String> = buffer.latest(2).into_iter().map(|r| r.message).collect();
        assert_eq!(latest, vec!["event 4", "event 3"]);
    }

    #[test]
    fn test_zero_capacity_keeps_nothing() {
        let buffer = LogBuffer::new(0);
        buffer.push(record("dropped"));
        assert!(buffer.is_empty());
    }

    #[test]
    fn test_layer_captures_message_and_fields() {
        let buffer = LogBuffer::new(10);
        let hits = Arc::new(AtomicUsize::new(0));
        let counter = hits.clone();
        let layer = RollingLayer::new(buffer.clone())
            .with_max_level(Level::INFO)
            .with_sink(Box::new(move |_| {
                counter.fetch_add(1, Ordering::SeqCst);
            }));
        let subscriber = tracing_subscriber::registry().with(layer);

        tracing::subscriber::with_default(subscriber, || {
            tracing::info!(target: "novilist::test", novel_id = 7, "loaded novel");
            tracing::debug!(target: "novilist::test", "too verbose");
            tracing::warn!(target: "novilist::test", error = %"boom", "request failed");
        });

        let records = buffer.snapshot();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].message, "loaded novel novel_id=7");
        assert_eq!(records[0].target, "novilist::test");
        assert_eq!(records[1].level, Level::WARN);
        assert_eq!(records[1].message, "request failed error=boom");
        assert_eq!(hits.load(Ordering::SeqCst), 2);
    }
}
