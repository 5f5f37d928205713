//! Studiorec processing library
//!
//! Wrappers around the external collaborators the ingest pipeline shells
//! out to: the ffmpeg encoder and the transcription program. Subprocess
//! execution goes through the `ProcessRunner` seam so the argument assembly
//! and error mapping are testable without spawning real processes.

pub mod encoder;
pub mod process;
pub mod transcribe;

pub use encoder::{resolve_ffmpeg_path, EncodeRequest, Mp3Encoder};
pub use process::{ProcessRunner, TokioProcessRunner};
pub use transcribe::{
    create_transcriber, CommandTranscriber, NoopTranscriber, TranscribeError, TranscriptionInvoker,
};
