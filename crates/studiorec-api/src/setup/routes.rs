//! Route configuration and setup

use std::sync::Arc;

use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post},
    Json, Router,
};
use studiorec_core::RECORDINGS_URL_PREFIX;
use tower_http::limit::RequestBodyLimitLayer;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use crate::handlers;
use crate::state::AppState;

/// Setup all application routes
pub fn setup_routes(state: Arc<AppState>) -> Router<()> {
    let max_body = state.config.max_upload_size_bytes();
    let recordings_dir = state.config.recordings_dir().to_path_buf();

    Router::new()
        .route("/api/upload", post(handlers::upload::upload_recording))
        .route("/api/health", get(handlers::health::health))
        .route(
            "/api/openapi.json",
            get(|| async { Json(crate::api_doc::get_openapi_spec()) }),
        )
        .nest_service(RECORDINGS_URL_PREFIX, ServeDir::new(recordings_dir))
        // Axum's built-in 2MB cap would reject recordings well under the
        // configured limit, so both limits are raised together.
        .layer(DefaultBodyLimit::max(max_body))
        .layer(RequestBodyLimitLayer::new(max_body))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
