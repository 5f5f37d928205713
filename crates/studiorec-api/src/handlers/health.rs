//! Health check handler.

use std::sync::Arc;

use axum::{extract::State, Json};

use crate::state::AppState;

/// Liveness plus the resolved encoder path, so operators can see at a
/// glance which ffmpeg the service will shell out to.
#[utoipa::path(
    get,
    path = "/api/health",
    tag = "health",
    responses(
        (status = 200, description = "Service is up")
    )
)]
pub async fn health(State(state): State<Arc<AppState>>) -> Json<serde_json::Value> {
    Json(serde_json::json!({
        "ok": true,
        "ffmpeg": state.encoder.ffmpeg_path(),
    }))
}
