//! # book-query
//!
//! Fetches book metadata for an author from a remote search endpoint and
//! optionally persists the response to a file.
//!
//! The pipeline has three stages:
//! - **Request preparation** - [`query::prepare`] and [`query::compose_url`]
//!   turn an author name into an encoded search URL
//! - **Execution** - [`RequestExecutor`] fetches the URL through a [`Transport`]
//!   and logs, rather than returns, transport failures
//! - **Persistence** - [`FileWriter`] writes the payload through a
//!   [`Filesystem`] and logs, rather than returns, filesystem failures
//!
//! [`BookQuery`] wires the stages together. Logging goes through `tracing`;
//! install a subscriber to see it.
//!
//! ## Quick Start
//!
//! ```no_run
//! use book_query::{BookQuery, Config};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = Config {
//!         base_url: "https://books.example.com/search".to_string(),
//!         ..Default::default()
//!     };
//!
//!     let books = BookQuery::new(&config)?;
//!     let metadata = books.query_books("Agatha Christie").await;
//!     println!("{}", metadata);
//!
//!     Ok(())
//! }
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::unwrap_used)]
#![warn(clippy::expect_used)]

/// Author search pipeline
pub mod client;
/// Configuration types
pub mod config;
/// Error types
pub mod error;
/// Request execution
pub mod executor;
/// Query parameters and URL composition
pub mod query;
/// File persistence
pub mod storage;
/// Network transport
pub mod transport;

#[allow(clippy::unwrap_used, clippy::expect_used)]
#[cfg(test)]
pub(crate) mod test_helpers;

// Re-export commonly used types
pub use client::BookQuery;
pub use config::Config;
pub use error::{Error, Result};
pub use executor::RequestExecutor;
pub use query::{QueryParams, compose_url, prepare};
pub use storage::{FileWriter, Filesystem, LocalFilesystem};
pub use transport::{HttpTransport, Transport};
