//! Blob publishing abstraction trait

use async_trait::async_trait;
use thiserror::Error;

/// Publish operation errors
#[derive(Debug, Error)]
pub enum PublishError {
    #[error("Upload failed: {0}")]
    UploadFailed(String),

    #[error("Publisher not configured: {0}")]
    NotConfigured(String),

    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

/// Result type for publish operations
pub type PublishResult<T> = Result<T, PublishError>;

/// Remote blob store publisher.
///
/// Implementations upload a finished artifact under an object name and
/// return the remote URI. Publishing is best effort from the ingest
/// pipeline's point of view: the call site logs failures and carries on.
#[async_trait]
pub trait BlobPublisher: Send + Sync {
    /// Upload `data` under `object_name` and return the remote URI.
    async fn publish(
        &self,
        object_name: &str,
        content_type: &str,
        data: Vec<u8>,
    ) -> PublishResult<String>;

    /// Whether this publisher is backed by a real remote store.
    fn is_enabled(&self) -> bool;
}
