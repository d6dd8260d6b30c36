//! Trait for fetching a search response

use async_trait::async_trait;

/// Trait for issuing a GET request and returning the decoded body
///
/// Implementations own whatever connection they open for the duration of the
/// call and release it before returning, on success and on failure.
///
/// # Examples
///
/// ```no_run
/// use book_query::{Config, HttpTransport, Transport};
///
/// # #[tokio::main]
/// # async fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let transport = HttpTransport::new(&Config::default())?;
/// let body = transport.get("https://buscador?author=Agatha+Christie").await?;
/// println!("{} bytes of metadata", body.len());
/// # Ok(())
/// # }
/// ```
#[async_trait]
pub trait Transport: Send + Sync {
    /// Fetch `url` and return the full response body as text
    ///
    /// # Errors
    ///
    /// Returns a transport error (see [`crate::Error::is_transport`]) if:
    /// - The endpoint answers with a non-success status
    /// - The request times out or the connection cannot be established
    /// - The body cannot be read or decoded
    async fn get(&self, url: &str) -> crate::Result<String>;

    /// Human-readable name for logging
    fn name(&self) -> &'static str;
}
