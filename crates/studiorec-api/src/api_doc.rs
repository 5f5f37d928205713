//! OpenAPI documentation.

use utoipa::OpenApi;

use crate::handlers;
use studiorec_core::models;

pub fn get_openapi_spec() -> utoipa::openapi::OpenApi {
    ApiDoc::openapi()
}

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Studiorec API",
        version = "0.1.0",
        description = "Audio recording ingest API. Accepts browser recordings, converts them to MP3 via ffmpeg with optional trimming, and serves the results under /recordings/."
    ),
    paths(
        handlers::upload::upload_recording,
        handlers::health::health,
    ),
    components(
        schemas(
            models::UploadResponse,
        )
    ),
    tags(
        (name = "recordings", description = "Recording upload and conversion"),
        (name = "health", description = "Service health")
    )
)]
pub struct ApiDoc;
