//! Error types for book-query
//!
//! Every stage of the pipeline reports failure through [`Error`]. The request
//! executor and the file writer turn these into log records at their public
//! boundary, so callers of the pipeline never see them directly; they surface
//! only from the fallible building blocks (`Transport::get`, `Config::validate`,
//! `BookQuery::new`).

use std::path::PathBuf;
use std::time::Duration;
use thiserror::Error;

/// Result type alias for book-query operations
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for book-query
#[derive(Debug, Error)]
pub enum Error {
    /// Configuration error with context about which setting is invalid
    #[error("configuration error: {message}")]
    Config {
        /// Human-readable error message describing the configuration issue
        message: String,
        /// The configuration key that caused the error (e.g., "base_url")
        key: Option<String>,
    },

    /// The search endpoint answered with a non-success status
    #[error("HTTP error {status} from {url}: {message}")]
    HttpStatus {
        /// The URL that was requested
        url: String,
        /// HTTP status code returned by the server
        status: u16,
        /// Server-supplied error text (response body, or the reason phrase if empty)
        message: String,
    },

    /// The request did not complete within the configured timeout
    #[error("timeout fetching {url} (exceeded {timeout:?})")]
    Timeout {
        /// The URL that was requested
        url: String,
        /// The timeout that was exceeded
        timeout: Duration,
    },

    /// No connection could be established to the search endpoint
    #[error("connection failed for {url}: {message}")]
    Connection {
        /// The URL that was requested
        url: String,
        /// Transport-supplied description of the failure
        message: String,
    },

    /// Any other transport-level failure
    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),

    /// The parent directory of an output file could not be created
    #[error("Could not create directory {}", path.display())]
    CreateDirectory {
        /// The directory that was attempted
        path: PathBuf,
        /// Underlying filesystem error
        #[source]
        source: std::io::Error,
    },

    /// The output file could not be opened or written
    #[error("Could not create file {}", path.display())]
    CreateFile {
        /// The file path that was attempted
        path: PathBuf,
        /// Underlying filesystem error
        #[source]
        source: std::io::Error,
    },

    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization error
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl Error {
    /// Returns true for failures that happened while talking to the search endpoint
    pub fn is_transport(&self) -> bool {
        matches!(
            self,
            Error::HttpStatus { .. }
                | Error::Timeout { .. }
                | Error::Connection { .. }
                | Error::Network(_)
        )
    }
}
