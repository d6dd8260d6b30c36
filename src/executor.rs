//! Request execution with transport-failure containment

use crate::transport::Transport;
use std::sync::Arc;

/// Runs search requests and turns transport failures into log records
///
/// A failed request is logged once at error level, with the error text as the
/// message, and is never returned to the caller.
#[derive(Clone)]
pub struct RequestExecutor {
    transport: Arc<dyn Transport>,
}

impl RequestExecutor {
    /// Create an executor on top of the given transport
    pub fn new(transport: Arc<dyn Transport>) -> Self {
        Self { transport }
    }

    /// Fetch `url` and return the body text
    ///
    /// Returns the empty string when the request fails; the failure itself is
    /// only visible in the log. Use [`fetch`](Self::fetch) to tell a failure
    /// apart from an empty body.
    pub async fn execute(&self, url: &str) -> String {
        self.fetch(url).await.unwrap_or_default()
    }

    /// Fetch `url`, returning `None` if the request failed
    ///
    /// Failures are logged exactly as in [`execute`](Self::execute).
    pub async fn fetch(&self, url: &str) -> Option<String> {
        match self.transport.get(url).await {
            Ok(body) => Some(body),
            Err(e) => {
                tracing::error!(url = %url, transport = self.transport.name(), "{}", e);
                None
            }
        }
    }
}
