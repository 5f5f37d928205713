//! Studiorec core library
//!
//! Shared building blocks for the recording ingest service: configuration,
//! the error taxonomy, filename/stem derivation, and the request/response
//! models exchanged by the HTTP layer.

pub mod config;
pub mod error;
pub mod models;
pub mod naming;

pub use config::{Config, RECORDINGS_URL_PREFIX};
pub use error::{AppError, LogLevel};
pub use models::{StoredRecording, TrimRange, UploadRequest, UploadResponse};
pub use naming::{safe_stem, timestamped_stem, DEFAULT_NAME_BASE};
