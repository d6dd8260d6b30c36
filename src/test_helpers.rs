//! Shared test fakes: a scripted transport, a scripted filesystem, and a
//! `tracing` layer that records the log events emitted by this crate.

use crate::error::{Error, Result};
use crate::storage::Filesystem;
use crate::transport::Transport;
use async_trait::async_trait;
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};
use std::time::Duration;
use tracing::Subscriber;
use tracing::subscriber::DefaultGuard;
use tracing_subscriber::layer::{Context, Layer, SubscriberExt};

/// What a [`StubTransport`] answers with
#[derive(Clone, Debug)]
pub(crate) enum StubReply {
    Body(String),
    HttpError { status: u16, message: String },
    Timeout,
}

/// Transport that records every requested URL and answers with a fixed reply
pub(crate) struct StubTransport {
    reply: StubReply,
    calls: Mutex<Vec<String>>,
}

impl StubTransport {
    pub(crate) fn new(reply: StubReply) -> Arc<Self> {
        Arc::new(Self {
            reply,
            calls: Mutex::new(Vec::new()),
        })
    }

    pub(crate) fn body(body: &str) -> Arc<Self> {
        Self::new(StubReply::Body(body.to_string()))
    }

    pub(crate) fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl Transport for StubTransport {
    async fn get(&self, url: &str) -> Result<String> {
        self.calls.lock().unwrap().push(url.to_string());
        match &self.reply {
            StubReply::Body(body) => Ok(body.clone()),
            StubReply::HttpError { status, message } => Err(Error::HttpStatus {
                url: url.to_string(),
                status: *status,
                message: message.clone(),
            }),
            StubReply::Timeout => Err(Error::Timeout {
                url: url.to_string(),
                timeout: Duration::from_secs(10),
            }),
        }
    }

    fn name(&self) -> &'static str {
        "stub"
    }
}

/// In-memory filesystem whose two operations can be made to fail
#[derive(Default)]
pub(crate) struct StubFilesystem {
    pub(crate) fail_create_dir: bool,
    pub(crate) fail_write: bool,
    dirs: Mutex<Vec<PathBuf>>,
    files: Mutex<HashMap<PathBuf, Vec<u8>>>,
}

impl StubFilesystem {
    pub(crate) fn failing(fail_create_dir: bool, fail_write: bool) -> Arc<Self> {
        Arc::new(Self {
            fail_create_dir,
            fail_write,
            ..Default::default()
        })
    }

    pub(crate) fn dirs(&self) -> Vec<PathBuf> {
        self.dirs.lock().unwrap().clone()
    }

    pub(crate) fn file(&self, path: &Path) -> Option<String> {
        self.files
            .lock()
            .unwrap()
            .get(path)
            .map(|bytes| String::from_utf8_lossy(bytes).into_owned())
    }
}

#[async_trait]
impl Filesystem for StubFilesystem {
    async fn create_dir_all(&self, dir: &Path) -> std::io::Result<()> {
        self.dirs.lock().unwrap().push(dir.to_path_buf());
        if self.fail_create_dir {
            return Err(std::io::Error::from(std::io::ErrorKind::PermissionDenied));
        }
        Ok(())
    }

    async fn write(&self, path: &Path, contents: &[u8]) -> std::io::Result<()> {
        if self.fail_write {
            return Err(std::io::Error::other("no space left on device"));
        }
        self.files
            .lock()
            .unwrap()
            .insert(path.to_path_buf(), contents.to_vec());
        Ok(())
    }
}

/// A log event emitted by this crate
#[derive(Debug, Clone)]
pub(crate) struct CapturedEvent {
    pub(crate) level: tracing::Level,
    pub(crate) message: String,
    pub(crate) fields: HashMap<String, String>,
}

/// Shared storage for captured events
#[derive(Debug, Clone, Default)]
pub(crate) struct LogStore(Arc<Mutex<Vec<CapturedEvent>>>);

impl LogStore {
    pub(crate) fn events(&self) -> Vec<CapturedEvent> {
        self.0.lock().unwrap().clone()
    }

    pub(crate) fn at_level(&self, level: tracing::Level) -> Vec<CapturedEvent> {
        self.events()
            .into_iter()
            .filter(|e| e.level == level)
            .collect()
    }
}

struct CaptureLayer {
    store: LogStore,
}

struct FieldVisitor {
    message: String,
    fields: HashMap<String, String>,
}

impl tracing::field::Visit for FieldVisitor {
    fn record_debug(&mut self, field: &tracing::field::Field, value: &dyn std::fmt::Debug) {
        if field.name() == "message" {
            self.message = format!("{:?}", value);
        } else {
            self.fields
                .insert(field.name().to_string(), format!("{:?}", value));
        }
    }

    fn record_str(&mut self, field: &tracing::field::Field, value: &str) {
        if field.name() == "message" {
            self.message = value.to_string();
        } else {
            self.fields
                .insert(field.name().to_string(), value.to_string());
        }
    }
}

impl<S: Subscriber> Layer<S> for CaptureLayer {
    fn on_event(&self, event: &tracing::Event<'_>, _ctx: Context<'_, S>) {
        // Only this crate's events; hyper and friends log on the same thread
        if !event.metadata().target().starts_with("book_query") {
            return;
        }

        let mut visitor = FieldVisitor {
            message: String::new(),
            fields: HashMap::new(),
        };
        event.record(&mut visitor);

        self.store.0.lock().unwrap().push(CapturedEvent {
            level: *event.metadata().level(),
            message: visitor.message,
            fields: visitor.fields,
        });
    }
}

/// Route this thread's log events into a fresh store until the guard drops
///
/// `#[tokio::test]` runs on a current-thread runtime, so everything awaited in
/// the test body is captured.
pub(crate) fn capture_logs() -> (LogStore, DefaultGuard) {
    let store = LogStore::default();
    let subscriber = tracing_subscriber::registry().with(CaptureLayer {
        store: store.clone(),
    });
    let guard = tracing::subscriber::set_default(subscriber);
    (store, guard)
}
