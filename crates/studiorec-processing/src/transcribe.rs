//! Transcription invoker.
//!
//! Transcription is owned by an external program (typically a cloud
//! speech-to-text client) pointed at the finished MP3; success is
//! determined solely by its exit code. Like blob publishing, this is a
//! best-effort capability: the ingest call site logs failures and reports
//! them as a boolean, never failing the request.

use std::io::ErrorKind;
use std::path::Path;
use std::sync::Arc;

use async_trait::async_trait;
use thiserror::Error;

use studiorec_core::Config;

use crate::process::ProcessRunner;

#[derive(Debug, Error)]
pub enum TranscribeError {
    #[error("Transcriber not configured: {0}")]
    NotConfigured(String),

    #[error("Transcriber not found: {0}")]
    CommandMissing(String),

    #[error("Transcriber exited with status {status}: {stderr}")]
    CommandFailed { status: i32, stderr: String },

    #[error("Failed to execute transcriber: {0}")]
    ExecutionFailed(String),
}

/// Invokes transcription of a finished recording.
#[async_trait]
pub trait TranscriptionInvoker: Send + Sync {
    async fn transcribe(&self, audio_path: &Path) -> Result<(), TranscribeError>;

    /// Whether a real transcriber is configured.
    fn is_enabled(&self) -> bool;
}

/// Transcriber that spawns a configured external program with the audio
/// path as its single argument.
pub struct CommandTranscriber {
    program: String,
    runner: Arc<dyn ProcessRunner>,
}

impl CommandTranscriber {
    pub fn new(program: String, runner: Arc<dyn ProcessRunner>) -> Self {
        Self { program, runner }
    }
}

#[async_trait]
impl TranscriptionInvoker for CommandTranscriber {
    async fn transcribe(&self, audio_path: &Path) -> Result<(), TranscribeError> {
        let args = vec![audio_path.to_string_lossy().to_string()];

        tracing::debug!(
            program = %self.program,
            audio = %audio_path.display(),
            "Invoking transcriber"
        );

        let output = self
            .runner
            .run(&self.program, &args)
            .await
            .map_err(|e| match e.kind() {
                ErrorKind::NotFound => {
                    TranscribeError::CommandMissing(format!("{}: {}", self.program, e))
                }
                _ => TranscribeError::ExecutionFailed(e.to_string()),
            })?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr).trim().to_string();
            return Err(TranscribeError::CommandFailed {
                status: output.status.code().unwrap_or(-1),
                stderr,
            });
        }

        tracing::info!(audio = %audio_path.display(), "Transcription completed");
        Ok(())
    }

    fn is_enabled(&self) -> bool {
        true
    }
}

/// No-op transcriber used when no command is configured.
#[derive(Debug, Default)]
pub struct NoopTranscriber;

#[async_trait]
impl TranscriptionInvoker for NoopTranscriber {
    async fn transcribe(&self, audio_path: &Path) -> Result<(), TranscribeError> {
        Err(TranscribeError::NotConfigured(format!(
            "no transcriber command configured, skipping {}",
            audio_path.display()
        )))
    }

    fn is_enabled(&self) -> bool {
        false
    }
}

/// Create a transcription invoker based on configuration.
pub fn create_transcriber(
    config: &Config,
    runner: Arc<dyn ProcessRunner>,
) -> Arc<dyn TranscriptionInvoker> {
    match config.transcriber_command() {
        Some(program) => {
            tracing::info!(program = %program, "Transcriber configured");
            Arc::new(CommandTranscriber::new(program.to_string(), runner))
        }
        None => {
            tracing::info!("TRANSCRIBER_COMMAND not set, auto-transcribe disabled");
            Arc::new(NoopTranscriber)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::process::Output;
    use std::sync::Mutex;

    #[cfg(unix)]
    fn exit_status(code: i32) -> std::process::ExitStatus {
        use std::os::unix::process::ExitStatusExt;
        std::process::ExitStatus::from_raw(code << 8)
    }

    struct FakeRunner {
        result: Box<dyn Fn() -> std::io::Result<Output> + Send + Sync>,
        calls: Mutex<Vec<(String, Vec<String>)>>,
    }

    impl FakeRunner {
        fn new(result: impl Fn() -> std::io::Result<Output> + Send + Sync + 'static) -> Self {
            Self {
                result: Box::new(result),
                calls: Mutex::new(Vec::new()),
            }
        }
    }

    #[async_trait]
    impl ProcessRunner for FakeRunner {
        async fn run(&self, program: &str, args: &[String]) -> std::io::Result<Output> {
            self.calls
                .lock()
                .unwrap()
                .push((program.to_string(), args.to_vec()));
            (self.result)()
        }
    }

    #[tokio::test]
    async fn test_zero_exit_is_success() {
        let runner = Arc::new(FakeRunner::new(|| {
            Ok(Output {
                status: exit_status(0),
                stdout: Vec::new(),
                stderr: Vec::new(),
            })
        }));
        let transcriber = CommandTranscriber::new("transcribe".to_string(), runner.clone());

        transcriber
            .transcribe(Path::new("/tmp/take.mp3"))
            .await
            .unwrap();

        let calls = runner.calls.lock().unwrap();
        assert_eq!(calls.len(), 1);
        assert_eq!(calls[0].1, vec!["/tmp/take.mp3".to_string()]);
    }

    #[tokio::test]
    async fn test_nonzero_exit_is_failure() {
        let runner = Arc::new(FakeRunner::new(|| {
            Ok(Output {
                status: exit_status(2),
                stdout: Vec::new(),
                stderr: b"bucket not accessible\n".to_vec(),
            })
        }));
        let transcriber = CommandTranscriber::new("transcribe".to_string(), runner);

        match transcriber.transcribe(Path::new("/tmp/take.mp3")).await {
            Err(TranscribeError::CommandFailed { status, stderr }) => {
                assert_eq!(status, 2);
                assert!(stderr.contains("bucket"));
            }
            other => panic!("Expected CommandFailed, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_missing_command_maps_to_command_missing() {
        let runner = Arc::new(FakeRunner::new(|| {
            Err(std::io::Error::new(ErrorKind::NotFound, "No such file"))
        }));
        let transcriber = CommandTranscriber::new("/nowhere/transcribe".to_string(), runner);

        let result = transcriber.transcribe(Path::new("/tmp/take.mp3")).await;
        assert!(matches!(result, Err(TranscribeError::CommandMissing(_))));
    }

    #[tokio::test]
    async fn test_noop_reports_not_configured() {
        let transcriber = NoopTranscriber;
        assert!(!transcriber.is_enabled());
        let result = transcriber.transcribe(Path::new("/tmp/take.mp3")).await;
        assert!(matches!(result, Err(TranscribeError::NotConfigured(_))));
    }
}
