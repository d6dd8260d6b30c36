//! Filesystem implementation backed by `tokio::fs`

use super::traits::Filesystem;
use async_trait::async_trait;
use std::path::Path;
use tokio::io::AsyncWriteExt;

/// The real local filesystem
#[derive(Clone, Copy, Debug, Default)]
pub struct LocalFilesystem;

#[async_trait]
impl Filesystem for LocalFilesystem {
    async fn create_dir_all(&self, dir: &Path) -> std::io::Result<()> {
        tokio::fs::create_dir_all(dir).await
    }

    async fn write(&self, path: &Path, contents: &[u8]) -> std::io::Result<()> {
        let mut file = tokio::fs::File::create(path).await?;
        file.write_all(contents).await?;
        file.flush().await?;
        file.sync_all().await
    }
}
