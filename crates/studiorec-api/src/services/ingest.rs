//! The ingest pipeline: validate, persist the original, transcode to MP3,
//! then run the optional best-effort publish steps.
//!
//! The pipeline is a single linear sequence per request. Validation and
//! encoding errors propagate to the caller; the two publish tails (remote
//! upload, transcription) are fire-and-report: their failures are logged
//! and reduced to booleans in the response, never failing the request.

use std::path::Path;
use std::sync::Arc;

use chrono::Local;
use studiorec_core::{
    safe_stem, timestamped_stem, AppError, StoredRecording, UploadRequest, UploadResponse,
    RECORDINGS_URL_PREFIX,
};

use crate::state::AppState;

const MP3_CONTENT_TYPE: &str = "audio/mpeg";
const FALLBACK_EXTENSION: &str = ".bin";

pub struct IngestService {
    state: Arc<AppState>,
}

impl IngestService {
    pub fn new(state: Arc<AppState>) -> Self {
        Self { state }
    }

    /// Run the full pipeline for one upload.
    pub async fn ingest(&self, request: UploadRequest) -> Result<UploadResponse, AppError> {
        request.validate()?;

        let recording = self.persist_original(&request).await?;

        let encode = studiorec_processing::EncodeRequest {
            input: recording.original_path.clone(),
            output: recording.mp3_path.clone(),
            trim: request.trim,
        };
        self.state.encoder.encode(&encode).await?;

        let auto_gcs_uploaded = if request.auto_upload_gcs {
            self.publish_to_gcs(&recording).await
        } else {
            false
        };

        let auto_transcribed = if request.auto_transcribe {
            self.transcribe(&recording).await
        } else {
            false
        };

        Ok(UploadResponse {
            original_url: format!("{}/{}", RECORDINGS_URL_PREFIX, recording.original_filename),
            mp3_url: format!("{}/{}", RECORDINGS_URL_PREFIX, recording.mp3_filename),
            original_filename: recording.original_filename,
            mp3_filename: recording.mp3_filename,
            auto_gcs_uploaded,
            auto_transcribed,
        })
    }

    /// Derive the stem and write the raw upload to the recordings directory.
    ///
    /// Name base fallback chain: caller-supplied base, else the uploaded
    /// filename's stem, else the fixed default. Collisions within the same
    /// second overwrite silently (last writer wins).
    async fn persist_original(&self, request: &UploadRequest) -> Result<StoredRecording, AppError> {
        let raw_base = request
            .name_base
            .as_deref()
            .filter(|s| !s.is_empty())
            .map(str::to_string)
            .unwrap_or_else(|| {
                Path::new(&request.filename)
                    .file_stem()
                    .map(|s| s.to_string_lossy().to_string())
                    .unwrap_or_default()
            });

        let stem = timestamped_stem(&safe_stem(&raw_base), Local::now().naive_local());

        let extension = Path::new(&request.filename)
            .extension()
            .map(|ext| format!(".{}", ext.to_string_lossy().to_lowercase()))
            .unwrap_or_else(|| FALLBACK_EXTENSION.to_string());

        let original_filename = format!("{}{}", stem, extension);
        let mp3_filename = format!("{}.mp3", stem);
        let recordings_dir = self.state.config.recordings_dir();
        let original_path = recordings_dir.join(&original_filename);
        let mp3_path = recordings_dir.join(&mp3_filename);

        tokio::fs::write(&original_path, &request.data).await?;

        tracing::info!(
            path = %original_path.display(),
            size_bytes = request.data.len(),
            "Original recording persisted"
        );

        Ok(StoredRecording {
            stem,
            original_filename,
            mp3_filename,
            original_path,
            mp3_path,
        })
    }

    /// Best-effort remote upload; returns whether it succeeded.
    async fn publish_to_gcs(&self, recording: &StoredRecording) -> bool {
        let data = match tokio::fs::read(&recording.mp3_path).await {
            Ok(data) => data,
            Err(e) => {
                tracing::warn!(
                    error = %e,
                    path = %recording.mp3_path.display(),
                    "Auto GCS upload failed: could not read MP3"
                );
                return false;
            }
        };

        match self
            .state
            .publisher
            .publish(&recording.mp3_filename, MP3_CONTENT_TYPE, data)
            .await
        {
            Ok(uri) => {
                tracing::info!(uri = %uri, "Auto GCS upload succeeded");
                true
            }
            Err(e) => {
                tracing::warn!(error = %e, "Auto GCS upload failed");
                false
            }
        }
    }

    /// Best-effort transcription; returns whether it succeeded.
    async fn transcribe(&self, recording: &StoredRecording) -> bool {
        match self.state.transcriber.transcribe(&recording.mp3_path).await {
            Ok(()) => true,
            Err(e) => {
                tracing::warn!(error = %e, "Auto transcription failed");
                false
            }
        }
    }
}
