//! MP3 encoder wrapping the external ffmpeg binary.
//!
//! Argument assembly is a pure function over a typed request so the trim
//! flag handling can be tested without spawning a process. Encoding is a
//! blocking, single-attempt operation: no retry, no timeout, no partial
//! output cleanup on failure.

use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use studiorec_core::{AppError, TrimRange};

use crate::process::ProcessRunner;

/// Name of the encoder binary resolved from the environment.
const FFMPEG_BIN: &str = "ffmpeg";
/// Bundled encoder preferred over the environment-resolved one.
const BUNDLED_FFMPEG: &str = "ffmpeg";

/// One transcode: input artifact, output MP3 path, optional trim window.
#[derive(Debug, Clone)]
pub struct EncodeRequest {
    pub input: PathBuf,
    pub output: PathBuf,
    pub trim: TrimRange,
}

impl EncodeRequest {
    /// Assemble the ffmpeg argument vector: seek/duration trimming plus the
    /// fixed output parameters (mono, 44.1kHz, libmp3lame, quality 3).
    pub fn build_args(&self) -> Vec<String> {
        let mut args = vec![
            "-y".to_string(),
            "-v".to_string(),
            "error".to_string(),
            "-i".to_string(),
            self.input.to_string_lossy().to_string(),
        ];

        if let Some(start) = self.trim.start {
            args.extend_from_slice(&["-ss".to_string(), start.to_string()]);
        }
        if let Some(duration) = self.trim.duration() {
            args.extend_from_slice(&["-t".to_string(), duration.to_string()]);
        }

        args.extend_from_slice(&[
            "-vn".to_string(),
            "-ac".to_string(),
            "1".to_string(),
            "-ar".to_string(),
            "44100".to_string(),
            "-codec:a".to_string(),
            "libmp3lame".to_string(),
            "-qscale:a".to_string(),
            "3".to_string(),
        ]);
        args.push(self.output.to_string_lossy().to_string());

        args
    }
}

/// Resolve the encoder binary: explicit configuration wins, then a bundled
/// `ffmpeg` next to the working directory, then `ffmpeg` from `PATH`.
pub fn resolve_ffmpeg_path(configured: Option<&str>, base_dir: &Path) -> String {
    if let Some(path) = configured {
        return path.to_string();
    }

    let bundled = base_dir.join(BUNDLED_FFMPEG);
    if is_executable(&bundled) {
        return bundled.to_string_lossy().to_string();
    }

    FFMPEG_BIN.to_string()
}

#[cfg(unix)]
fn is_executable(path: &Path) -> bool {
    use std::os::unix::fs::PermissionsExt;
    path.metadata()
        .map(|m| m.is_file() && m.permissions().mode() & 0o111 != 0)
        .unwrap_or(false)
}

#[cfg(not(unix))]
fn is_executable(path: &Path) -> bool {
    path.is_file()
}

/// ffmpeg-backed MP3 encoder.
pub struct Mp3Encoder {
    ffmpeg_path: String,
    runner: Arc<dyn ProcessRunner>,
}

impl Mp3Encoder {
    pub fn new(ffmpeg_path: String, runner: Arc<dyn ProcessRunner>) -> Self {
        Self {
            ffmpeg_path,
            runner,
        }
    }

    pub fn ffmpeg_path(&self) -> &str {
        &self.ffmpeg_path
    }

    /// Run the transcode to completion.
    ///
    /// A spawn failure with `NotFound` maps to `EncoderMissing`; a nonzero
    /// exit maps to `EncoderFailed` carrying the captured stderr.
    pub async fn encode(&self, request: &EncodeRequest) -> Result<(), AppError> {
        let args = request.build_args();

        tracing::debug!(
            ffmpeg = %self.ffmpeg_path,
            input = %request.input.display(),
            output = %request.output.display(),
            "Running ffmpeg"
        );

        let output = self
            .runner
            .run(&self.ffmpeg_path, &args)
            .await
            .map_err(|e| match e.kind() {
                ErrorKind::NotFound => {
                    AppError::EncoderMissing(format!("{}: {}", self.ffmpeg_path, e))
                }
                _ => AppError::Internal(format!("Failed to execute ffmpeg: {}", e)),
            })?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr).trim().to_string();
            return Err(AppError::EncoderFailed {
                status: output.status.code().unwrap_or(-1),
                stderr,
            });
        }

        tracing::info!(
            output = %request.output.display(),
            "ffmpeg transcode completed"
        );

        Ok(())
    }
}
