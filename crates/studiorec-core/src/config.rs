//! Configuration module
//!
//! Environment-driven configuration, read once at process start. Optional
//! publish collaborators (GCS bucket, transcriber command) downgrade to
//! no-ops when unset rather than failing startup.

use std::env;
use std::path::{Path, PathBuf};

const DEFAULT_PORT: u16 = 8000;
const DEFAULT_RECORDINGS_DIR: &str = "recordings";
const DEFAULT_MAX_UPLOAD_SIZE_MB: usize = 100;

/// URL prefix under which the recordings directory is served read-only.
pub const RECORDINGS_URL_PREFIX: &str = "/recordings";

/// Ingest service configuration.
#[derive(Clone, Debug)]
pub struct IngestConfig {
    pub server_port: u16,
    pub recordings_dir: PathBuf,
    pub max_upload_size_bytes: usize,
    /// Explicit encoder path; when unset the bundled `./ffmpeg` is preferred,
    /// falling back to `ffmpeg` resolved from the environment.
    pub ffmpeg_path: Option<String>,
    pub gcs_bucket: Option<String>,
    pub gcs_project: Option<String>,
    pub transcriber_command: Option<String>,
    pub environment: String,
}

/// Application configuration.
#[derive(Clone, Debug)]
pub struct Config(pub Box<IngestConfig>);

impl Config {
    fn inner(&self) -> &IngestConfig {
        &self.0
    }

    pub fn from_env() -> Result<Self, anyhow::Error> {
        let config = IngestConfig::from_env()?;
        Ok(Config(Box::new(config)))
    }

    pub fn validate(&self) -> Result<(), anyhow::Error> {
        self.inner().validate()
    }

    pub fn is_production(&self) -> bool {
        let env = self.inner().environment.to_lowercase();
        env == "production" || env == "prod"
    }

    pub fn server_port(&self) -> u16 {
        self.inner().server_port
    }

    pub fn recordings_dir(&self) -> &Path {
        &self.inner().recordings_dir
    }

    pub fn max_upload_size_bytes(&self) -> usize {
        self.inner().max_upload_size_bytes
    }

    pub fn ffmpeg_path(&self) -> Option<&str> {
        self.inner().ffmpeg_path.as_deref()
    }

    pub fn gcs_bucket(&self) -> Option<&str> {
        self.inner().gcs_bucket.as_deref()
    }

    pub fn gcs_project(&self) -> Option<&str> {
        self.inner().gcs_project.as_deref()
    }

    pub fn transcriber_command(&self) -> Option<&str> {
        self.inner().transcriber_command.as_deref()
    }

    pub fn environment(&self) -> &str {
        &self.inner().environment
    }
}

impl IngestConfig {
    pub fn from_env() -> Result<Self, anyhow::Error> {
        dotenvy::dotenv().ok();

        let environment = env::var("ENVIRONMENT")
            .or_else(|_| env::var("APP_ENV"))
            .unwrap_or_else(|_| "development".to_string());

        let max_upload_size_mb = env::var("MAX_UPLOAD_SIZE_MB")
            .unwrap_or_else(|_| DEFAULT_MAX_UPLOAD_SIZE_MB.to_string())
            .parse::<usize>()
            .unwrap_or(DEFAULT_MAX_UPLOAD_SIZE_MB);

        let config = IngestConfig {
            server_port: env::var("PORT")
                .unwrap_or_else(|_| DEFAULT_PORT.to_string())
                .parse()
                .map_err(|_| anyhow::anyhow!("PORT must be a valid number"))?,
            recordings_dir: env::var("RECORDINGS_DIR")
                .unwrap_or_else(|_| DEFAULT_RECORDINGS_DIR.to_string())
                .into(),
            max_upload_size_bytes: max_upload_size_mb * 1024 * 1024,
            ffmpeg_path: env::var("FFMPEG_PATH").ok(),
            gcs_bucket: env::var("GOOGLE_CLOUD_BUCKET").ok(),
            gcs_project: env::var("GOOGLE_CLOUD_PROJECT").ok(),
            transcriber_command: env::var("TRANSCRIBER_COMMAND").ok(),
            environment,
        };

        Ok(config)
    }

    pub fn validate(&self) -> Result<(), anyhow::Error> {
        if self.max_upload_size_bytes == 0 {
            return Err(anyhow::anyhow!("MAX_UPLOAD_SIZE_MB must be greater than 0"));
        }
        if self.recordings_dir.as_os_str().is_empty() {
            return Err(anyhow::anyhow!("RECORDINGS_DIR must not be empty"));
        }
        if let Some(cmd) = &self.transcriber_command {
            if cmd.trim().is_empty() {
                return Err(anyhow::anyhow!(
                    "TRANSCRIBER_COMMAND is set but empty; unset it to disable auto-transcribe"
                ));
            }
        }
        Ok(())
    }
}
