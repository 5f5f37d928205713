//! Request/response models for the ingest flow.

use std::path::PathBuf;

use serde::Serialize;
use utoipa::ToSchema;

use crate::error::AppError;

/// Optional trim window in seconds, applied during transcode.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct TrimRange {
    pub start: Option<f64>,
    pub end: Option<f64>,
}

impl TrimRange {
    /// Validate the trim bounds: both values must be non-negative and, when
    /// an end is given together with a start, strictly greater than it.
    pub fn validate(&self) -> Result<(), AppError> {
        if let Some(start) = self.start {
            if start < 0.0 {
                return Err(AppError::BadRequest("trim_start must be >= 0".to_string()));
            }
        }
        if let Some(end) = self.end {
            if end < 0.0 {
                return Err(AppError::BadRequest("trim_end must be >= 0".to_string()));
            }
            if end <= self.start.unwrap_or(0.0) {
                return Err(AppError::BadRequest(
                    "trim_end must be > trim_start".to_string(),
                ));
            }
        }
        Ok(())
    }

    /// Duration of the trimmed segment, when an end bound is present.
    pub fn duration(&self) -> Option<f64> {
        self.end.map(|end| end - self.start.unwrap_or(0.0))
    }

    pub fn is_empty(&self) -> bool {
        self.start.is_none() && self.end.is_none()
    }
}

/// One upload, parsed from the multipart form. Transient; exists only for
/// the duration of the request.
#[derive(Debug, Clone)]
pub struct UploadRequest {
    pub data: Vec<u8>,
    pub filename: String,
    pub name_base: Option<String>,
    pub trim: TrimRange,
    pub auto_upload_gcs: bool,
    pub auto_transcribe: bool,
}

impl UploadRequest {
    pub fn validate(&self) -> Result<(), AppError> {
        if self.filename.is_empty() {
            return Err(AppError::BadRequest("missing filename".to_string()));
        }
        if self.data.is_empty() {
            return Err(AppError::BadRequest("empty upload".to_string()));
        }
        self.trim.validate()
    }
}

/// A recording persisted to the recordings directory. Never mutated after
/// creation; not automatically deleted.
#[derive(Debug, Clone)]
pub struct StoredRecording {
    pub stem: String,
    pub original_filename: String,
    pub mp3_filename: String,
    pub original_path: PathBuf,
    pub mp3_path: PathBuf,
}

/// Response body for a successful upload.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct UploadResponse {
    pub original_filename: String,
    pub mp3_filename: String,
    pub original_url: String,
    pub mp3_url: String,
    pub auto_gcs_uploaded: bool,
    pub auto_transcribed: bool,
}
