//! Author search pipeline: parameters, URL, request, and optional persistence

use crate::config::Config;
use crate::error::Result;
use crate::executor::RequestExecutor;
use crate::query::{compose_url, prepare};
use crate::storage::{FileWriter, Filesystem, LocalFilesystem};
use crate::transport::{HttpTransport, Transport};
use std::path::Path;
use std::sync::Arc;

/// Queries the book search endpoint by author
///
/// # Examples
///
/// ```no_run
/// use book_query::{BookQuery, Config};
///
/// # #[tokio::main]
/// # async fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let books = BookQuery::new(&Config::default())?;
///
/// let metadata = books.query_books("Agatha Christie").await;
/// println!("{}", metadata);
///
/// books.save_books("Agatha Christie", "data/christie.json").await;
/// # Ok(())
/// # }
/// ```
#[derive(Clone)]
pub struct BookQuery {
    base_url: String,
    executor: RequestExecutor,
    writer: FileWriter,
}

impl BookQuery {
    /// Build a pipeline that talks HTTP and writes to the local filesystem
    ///
    /// # Errors
    ///
    /// Returns an error if the config fails validation or the HTTP client
    /// cannot be built.
    pub fn new(config: &Config) -> Result<Self> {
        config.validate()?;
        let transport = HttpTransport::new(config)?;
        Ok(Self::with_collaborators(
            config.base_url.clone(),
            Arc::new(transport),
            Arc::new(LocalFilesystem),
        ))
    }

    /// Build a pipeline from explicit collaborators
    pub fn with_collaborators(
        base_url: impl Into<String>,
        transport: Arc<dyn Transport>,
        fs: Arc<dyn Filesystem>,
    ) -> Self {
        Self {
            base_url: base_url.into(),
            executor: RequestExecutor::new(transport),
            writer: FileWriter::new(fs),
        }
    }

    /// The base endpoint searches are sent to
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// The fully encoded search URL for `author`
    pub fn search_url(&self, author: &str) -> String {
        compose_url(&self.base_url, &prepare(author))
    }

    /// Search for `author` and return the response body
    ///
    /// A failed request is logged and yields the empty string.
    pub async fn query_books(&self, author: &str) -> String {
        let url = self.search_url(author);
        self.executor.execute(&url).await
    }

    /// Search for `author` and write the response body to `path`
    ///
    /// If the request fails nothing is written, so an earlier result at `path`
    /// survives. Filesystem failures are logged by the writer.
    pub async fn save_books(&self, author: &str, path: impl AsRef<Path>) {
        let url = self.search_url(author);
        let Some(body) = self.executor.fetch(&url).await else {
            return;
        };
        self.writer.write_to_file(path, &body).await;
    }
}
