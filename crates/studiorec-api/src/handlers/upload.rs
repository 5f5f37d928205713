//! Upload handler: multipart parsing plus the ingest pipeline.

use std::sync::Arc;

use axum::{
    extract::{Multipart, State},
    Json,
};
use studiorec_core::{AppError, TrimRange, UploadRequest, UploadResponse};

use crate::error::HttpAppError;
use crate::services::IngestService;
use crate::state::AppState;

/// Multipart field carrying the audio blob.
const FILE_FIELD: &str = "file";

#[utoipa::path(
    post,
    path = "/api/upload",
    tag = "recordings",
    request_body(content = inline(Object), content_type = "multipart/form-data"),
    responses(
        (status = 200, description = "Recording saved and converted", body = UploadResponse),
        (status = 400, description = "Invalid input"),
        (status = 500, description = "Encoder missing or failed")
    )
)]
#[tracing::instrument(skip(state, multipart))]
pub async fn upload_recording(
    State(state): State<Arc<AppState>>,
    multipart: Multipart,
) -> Result<Json<UploadResponse>, HttpAppError> {
    let request = parse_upload(multipart).await?;

    let response = IngestService::new(state).ingest(request).await?;

    Ok(Json(response))
}

/// Parse the multipart form into an `UploadRequest`.
///
/// Unknown fields are ignored; the boolean flags follow the form contract
/// of the recorder page (string `"1"` enables).
async fn parse_upload(mut multipart: Multipart) -> Result<UploadRequest, AppError> {
    let mut data: Option<Vec<u8>> = None;
    let mut filename: Option<String> = None;
    let mut name_base: Option<String> = None;
    let mut trim = TrimRange::default();
    let mut auto_upload_gcs = false;
    let mut auto_transcribe = false;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::BadRequest(format!("invalid multipart body: {}", e)))?
    {
        let field_name = field.name().map(str::to_string);
        match field_name.as_deref() {
            Some(FILE_FIELD) => {
                filename = field.file_name().map(str::to_string);
                let bytes = field
                    .bytes()
                    .await
                    .map_err(|e| AppError::BadRequest(format!("failed to read file: {}", e)))?;
                data = Some(bytes.to_vec());
            }
            Some("name_base") => {
                name_base = Some(read_text(field, "name_base").await?);
            }
            Some("trim_start") => {
                trim.start = Some(parse_seconds(field, "trim_start").await?);
            }
            Some("trim_end") => {
                trim.end = Some(parse_seconds(field, "trim_end").await?);
            }
            Some("auto_upload_gcs") => {
                auto_upload_gcs = read_text(field, "auto_upload_gcs").await? == "1";
            }
            Some("auto_transcribe") => {
                auto_transcribe = read_text(field, "auto_transcribe").await? == "1";
            }
            _ => {}
        }
    }

    let data = data.ok_or_else(|| AppError::BadRequest("missing file field".to_string()))?;
    let filename = filename.unwrap_or_default();

    Ok(UploadRequest {
        data,
        filename,
        name_base,
        trim,
        auto_upload_gcs,
        auto_transcribe,
    })
}

async fn read_text(field: axum::extract::multipart::Field<'_>, name: &str) -> Result<String, AppError> {
    field
        .text()
        .await
        .map_err(|e| AppError::BadRequest(format!("failed to read {}: {}", name, e)))
}

async fn parse_seconds(
    field: axum::extract::multipart::Field<'_>,
    name: &str,
) -> Result<f64, AppError> {
    let text = read_text(field, name).await?;
    text.trim()
        .parse::<f64>()
        .map_err(|_| AppError::BadRequest(format!("{} must be a number in seconds", name)))
}
