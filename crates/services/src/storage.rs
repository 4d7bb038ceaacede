use async_trait::async_trait;
use std::path::PathBuf;
use thiserror::Error;
use tracing::debug;

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Upload rejected: {0}")]
    Rejected(String),
}

/// Blob store boundary: accepts bytes under a path, returns a publicly
/// resolvable URL. Upload failures are recoverable — the profile
/// assembler falls back to inline data URIs, so registration never
/// blocks on storage availability.
#[async_trait]
pub trait BlobStore: Send + Sync {
    async fn upload(
        &self,
        path: &str,
        bytes: &[u8],
        content_type: &str,
    ) -> Result<String, StorageError>;
}

/// Filesystem-backed blob store serving files under a public path prefix.
pub struct LocalBlobStore {
    root: PathBuf,
    public_path: String,
}

impl LocalBlobStore {
    pub fn new(root: impl Into<PathBuf>, public_path: impl Into<String>) -> Self {
        Self {
            root: root.into(),
            public_path: public_path.into(),
        }
    }
}

#[async_trait]
impl BlobStore for LocalBlobStore {
    async fn upload(
        &self,
        path: &str,
        bytes: &[u8],
        _content_type: &str,
    ) -> Result<String, StorageError> {
        let file_path = self.root.join(path);
        if let Some(parent) = file_path.parent() {
            tokio::fs::create_dir_all(parent).await?;
        }
        tokio::fs::write(&file_path, bytes).await?;

        debug!(path, size = bytes.len(), "Stored blob");
        Ok(format!("{}/{}", self.public_path.trim_end_matches('/'), path))
    }
}
