//! File writer that logs instead of failing

use super::local::LocalFilesystem;
use super::traits::Filesystem;
use crate::error::{Error, Result};
use std::path::Path;
use std::sync::Arc;

/// Writes text payloads to disk
///
/// Directory creation and the file write are separate failure points. Each
/// one is logged at error level as `Could not create directory <dir>` or
/// `Could not create file <path>`; neither is returned to the caller.
#[derive(Clone)]
pub struct FileWriter {
    fs: Arc<dyn Filesystem>,
}

impl Default for FileWriter {
    fn default() -> Self {
        Self::new(Arc::new(LocalFilesystem))
    }
}

impl FileWriter {
    /// Create a writer on top of the given filesystem
    pub fn new(fs: Arc<dyn Filesystem>) -> Self {
        Self { fs }
    }

    /// Write `content` to `path`, creating the parent directory if needed
    ///
    /// Existing files are truncated. Failures are logged, never returned; a
    /// successful write logs nothing.
    pub async fn write_to_file(&self, path: impl AsRef<Path>, content: &str) {
        let path = path.as_ref();

        if let Err(e) = self.ensure_parent_dir(path).await {
            log_failure(&e);
        }

        if let Err(e) = self.write_contents(path, content).await {
            log_failure(&e);
        }
    }

    async fn ensure_parent_dir(&self, path: &Path) -> Result<()> {
        // A bare file name has an empty parent: nothing to create
        let Some(dir) = path.parent().filter(|d| !d.as_os_str().is_empty()) else {
            return Ok(());
        };

        self.fs
            .create_dir_all(dir)
            .await
            .map_err(|source| Error::CreateDirectory {
                path: dir.to_path_buf(),
                source,
            })
    }

    async fn write_contents(&self, path: &Path, content: &str) -> Result<()> {
        self.fs
            .write(path, content.as_bytes())
            .await
            .map_err(|source| Error::CreateFile {
                path: path.to_path_buf(),
                source,
            })
    }
}

fn log_failure(err: &Error) {
    match err {
        Error::CreateDirectory { source, .. } | Error::CreateFile { source, .. } => {
            tracing::error!(error = %source, "{}", err);
        }
        other => tracing::error!("{}", other),
    }
}
