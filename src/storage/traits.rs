//! Trait for the filesystem operations the file writer needs

use async_trait::async_trait;
use std::path::Path;

/// Filesystem capability used by [`FileWriter`](super::FileWriter)
#[async_trait]
pub trait Filesystem: Send + Sync {
    /// Create `dir` and any missing ancestors; succeeds if it already exists
    async fn create_dir_all(&self, dir: &Path) -> std::io::Result<()>;

    /// Create or truncate `path` and write `contents` in full
    ///
    /// The data must be durable by the time this returns.
    async fn write(&self, path: &Path, contents: &[u8]) -> std::io::Result<()>;
}
