use std::sync::Arc;

use studiorec_core::Config;

use crate::{BlobPublisher, GcsPublisher, NoopPublisher, PublishResult};

/// Create a blob publisher based on configuration.
///
/// A missing bucket name downgrades auto-upload to a no-op rather than
/// failing startup; a bucket that is set but unusable is a hard error so
/// misconfiguration is caught early.
pub fn create_publisher(config: &Config) -> PublishResult<Arc<dyn BlobPublisher>> {
    match config.gcs_bucket() {
        Some(bucket) => {
            let publisher = GcsPublisher::new(bucket.to_string())?;
            tracing::info!(bucket = %bucket, "GCS publisher configured");
            Ok(Arc::new(publisher))
        }
        None => {
            tracing::info!("GOOGLE_CLOUD_BUCKET not set, auto-upload disabled");
            Ok(Arc::new(NoopPublisher))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use studiorec_core::config::IngestConfig;

    #[test]
    fn test_missing_bucket_downgrades_to_noop() {
        let config = Config(Box::new(IngestConfig {
            server_port: 8000,
            recordings_dir: "recordings".into(),
            max_upload_size_bytes: 1024,
            ffmpeg_path: None,
            gcs_bucket: None,
            gcs_project: None,
            transcriber_command: None,
            environment: "test".to_string(),
        }));

        let publisher = create_publisher(&config).unwrap();
        assert!(!publisher.is_enabled());
    }
}
