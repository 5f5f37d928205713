//! No-op publisher used when no bucket is configured.

use async_trait::async_trait;

use crate::traits::{BlobPublisher, PublishError, PublishResult};

/// Publisher that always reports the remote store as unconfigured.
///
/// Keeps failure containment at the ingest call site: the pipeline calls
/// `publish` unconditionally when asked to, and this implementation turns
/// that into a logged no-op rather than a request failure.
#[derive(Debug, Default)]
pub struct NoopPublisher;

#[async_trait]
impl BlobPublisher for NoopPublisher {
    async fn publish(
        &self,
        object_name: &str,
        _content_type: &str,
        _data: Vec<u8>,
    ) -> PublishResult<String> {
        Err(PublishError::NotConfigured(format!(
            "no bucket configured, skipping upload of {}",
            object_name
        )))
    }

    fn is_enabled(&self) -> bool {
        false
    }
}
