//! Application setup and initialization
//!
//! All initialization logic lives here instead of main.rs so the router
//! can also be assembled by integration tests.

pub mod routes;
pub mod server;

use std::sync::Arc;

use anyhow::{Context, Result};
use studiorec_core::Config;
use studiorec_processing::{create_transcriber, resolve_ffmpeg_path, Mp3Encoder, TokioProcessRunner};
use studiorec_storage::create_publisher;

use crate::state::AppState;

/// Initialize the entire application
pub async fn initialize_app(config: Config) -> Result<(Arc<AppState>, axum::Router)> {
    // Validate configuration first, fail fast on misconfiguration
    config.validate().context("Configuration validation failed")?;

    tokio::fs::create_dir_all(config.recordings_dir())
        .await
        .with_context(|| {
            format!(
                "Failed to create recordings directory {}",
                config.recordings_dir().display()
            )
        })?;

    let base_dir = std::env::current_dir().context("Failed to resolve working directory")?;
    let ffmpeg_path = resolve_ffmpeg_path(config.ffmpeg_path(), &base_dir);
    tracing::info!(ffmpeg = %ffmpeg_path, "Encoder resolved");

    let runner = Arc::new(TokioProcessRunner);
    let encoder = Mp3Encoder::new(ffmpeg_path, runner.clone());
    let publisher = create_publisher(&config)?;
    let transcriber = create_transcriber(&config, runner);

    let state = Arc::new(AppState {
        config,
        encoder,
        publisher,
        transcriber,
    });

    let router = routes::setup_routes(state.clone());

    Ok((state, router))
}
