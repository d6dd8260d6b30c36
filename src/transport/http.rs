//! `reqwest`-backed transport

use super::traits::Transport;
use crate::config::Config;
use crate::error::{Error, Result};
use async_trait::async_trait;
use std::fmt::Display;
use std::time::Duration;

/// Longest error body, in characters, carried into an [`Error::HttpStatus`] message
const MAX_ERROR_BODY_CHARS: usize = 512;

/// Transport that performs real HTTP(S) requests
///
/// The client is built once from [`Config`] and reused across calls, so the
/// timeout and user agent apply to every request.
#[derive(Clone, Debug)]
pub struct HttpTransport {
    client: reqwest::Client,
    timeout: Duration,
}

impl HttpTransport {
    /// Build a transport with the timeout and user agent from `config`
    ///
    /// # Errors
    ///
    /// Returns [`Error::Config`] if the user agent is not a valid header value
    /// or the client cannot be built.
    pub fn new(config: &Config) -> Result<Self> {
        let user_agent =
            reqwest::header::HeaderValue::from_str(&config.user_agent).map_err(|e| {
                Error::Config {
                    message: format!("invalid user_agent '{}': {}", config.user_agent, e),
                    key: Some("user_agent".to_string()),
                }
            })?;

        let client = reqwest::Client::builder()
            .timeout(config.timeout)
            .user_agent(user_agent)
            .build()
            .map_err(|e| Error::Config {
                message: format!("failed to build HTTP client: {}", e),
                key: None,
            })?;

        Ok(Self {
            client,
            timeout: config.timeout,
        })
    }

    fn classify(&self, url: &str, err: reqwest::Error) -> Error {
        if err.is_timeout() {
            Error::Timeout {
                url: url.to_string(),
                timeout: self.timeout,
            }
        } else if err.is_connect() {
            Error::Connection {
                url: url.to_string(),
                message: err.to_string(),
            }
        } else {
            Error::Network(err)
        }
    }
}

#[async_trait]
impl Transport for HttpTransport {
    async fn get(&self, url: &str) -> Result<String> {
        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| self.classify(url, e))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.map_err(|e| self.classify(url, e));
            let message = status_message(status, body);
            return Err(Error::HttpStatus {
                url: url.to_string(),
                status: status.as_u16(),
                message,
            });
        }

        // Decodes with the declared charset, UTF-8 when none is given
        response.text().await.map_err(|e| self.classify(url, e))
    }

    fn name(&self) -> &'static str {
        "http"
    }
}

/// Server-supplied text for a non-success response
///
/// Uses the (truncated) body when there is one, the reason phrase otherwise,
/// and keeps the read error when the body could not be read.
fn status_message<E: Display>(
    status: reqwest::StatusCode,
    body: std::result::Result<String, E>,
) -> String {
    let reason = status.canonical_reason().unwrap_or("unknown status");
    match body {
        Ok(body) => match body.trim() {
            "" => reason.to_string(),
            text if text.chars().count() > MAX_ERROR_BODY_CHARS => {
                let head: String = text.chars().take(MAX_ERROR_BODY_CHARS).collect();
                format!("{}... (truncated)", head)
            }
            text => text.to_string(),
        },
        Err(e) => format!("{} (body unreadable: {})", reason, e),
    }
}
