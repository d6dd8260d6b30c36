//! Captures the log records emitted by book-query during a test

use std::sync::{Arc, Mutex};
use tracing::Subscriber;
use tracing::subscriber::DefaultGuard;
use tracing_subscriber::layer::{Context, Layer, SubscriberExt};

/// A recorded log event with its level and rendered message
#[derive(Debug, Clone)]
pub struct LogRecord {
    pub level: tracing::Level,
    pub message: String,
}

/// Shared storage for captured records
#[derive(Debug, Clone, Default)]
pub struct LogStore(Arc<Mutex<Vec<LogRecord>>>);

impl LogStore {
    /// Every captured record, at any level
    pub fn records(&self) -> Vec<LogRecord> {
        self.0.lock().unwrap().clone()
    }

    /// Error-level records, in emission order
    pub fn errors(&self) -> Vec<LogRecord> {
        self.0
            .lock()
            .unwrap()
            .iter()
            .filter(|r| r.level == tracing::Level::ERROR)
            .cloned()
            .collect()
    }
}

struct MessageVisitor(String);

impl tracing::field::Visit for MessageVisitor {
    fn record_debug(&mut self, field: &tracing::field::Field, value: &dyn std::fmt::Debug) {
        if field.name() == "message" {
            self.0 = format!("{:?}", value);
        }
    }
}

struct CaptureLayer(LogStore);

impl<S: Subscriber> Layer<S> for CaptureLayer {
    fn on_event(&self, event: &tracing::Event<'_>, _ctx: Context<'_, S>) {
        if !event.metadata().target().starts_with("book_query") {
            return;
        }
        let mut visitor = MessageVisitor(String::new());
        event.record(&mut visitor);
        self.0.0.lock().unwrap().push(LogRecord {
            level: *event.metadata().level(),
            message: visitor.0,
        });
    }
}

/// Capture this thread's book-query log events until the guard drops
pub fn capture_logs() -> (LogStore, DefaultGuard) {
    let store = LogStore::default();
    let guard =
        tracing::subscriber::set_default(tracing_subscriber::registry().with(CaptureLayer(store.clone())));
    (store, guard)
}
