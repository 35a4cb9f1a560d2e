//! Document storage for uploaded BECE result slips.

use async_trait::async_trait;
use std::path::PathBuf;
use tokio::fs;
use tokio::io::AsyncWriteExt;

use crate::errors::{AppError, AppResult};

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// Storage backend for uploaded documents, addressed by stored filename.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait DocumentStorage: Send + Sync {
    /// Write a document under `name`, replacing nothing
    async fn store(&self, name: &str, bytes: &[u8]) -> AppResult<()>;

    /// Remove a previously stored document
    async fn remove(&self, name: &str) -> AppResult<()>;

    /// Verify the backend is usable
    async fn check(&self) -> AppResult<()>;
}

/// Documents stored as files in a local directory
pub struct LocalDiskStorage {
    root: PathBuf,
}

impl LocalDiskStorage {
    /// Ensure the upload directory exists
    pub async fn new(root: impl Into<PathBuf>) -> AppResult<Self> {
        let root = root.into();
        fs::create_dir_all(&root).await.map_err(|e| {
            tracing::error!("Failed to create upload directory {}: {}", root.display(), e);
            AppError::from(e)
        })?;
        Ok(Self { root })
    }

    fn path_for(&self, name: &str) -> AppResult<PathBuf> {
        // Stored names are generated, never a path
        if name.is_empty() || name.contains(|c: char| c == '/' || c == '\\') || name.starts_with('.') {
            return Err(AppError::internal(format!("invalid stored filename '{}'", name)));
        }
        Ok(self.root.join(name))
    }
}

#[async_trait]
impl DocumentStorage for LocalDiskStorage {
    async fn store(&self, name: &str, bytes: &[u8]) -> AppResult<()> {
        let path = self.path_for(name)?;

        let mut file = fs::OpenOptions::new()
            .write(true)
            .create_new(true)
            .open(&path)
            .await?;

        let written = async {
            file.write_all(bytes).await?;
            file.sync_all().await
        }
        .await;

        if let Err(e) = written {
            tracing::error!("Failed to write document {}: {}", name, e);
            drop(file);
            if let Err(cleanup) = fs::remove_file(&path).await {
                tracing::warn!("Failed to clean up partial document {}: {}", name, cleanup);
            }
            return Err(e.into());
        }

        tracing::info!("Stored document: {} ({} bytes)", name, bytes.len());
        Ok(())
    }

    async fn remove(&self, name: &str) -> AppResult<()> {
        let path = self.path_for(name)?;
        fs::remove_file(&path).await?;
        tracing::debug!("Removed document: {}", name);
        Ok(())
    }

    async fn check(&self) -> AppResult<()> {
        let metadata = fs::metadata(&self.root).await?;
        if !metadata.is_dir() {
            return Err(AppError::internal(format!(
                "upload path {} is not a directory",
                self.root.display()
            )));
        }
        Ok(())
    }
}
