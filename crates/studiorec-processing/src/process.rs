//! Subprocess execution seam.

use std::process::{Output, Stdio};

use async_trait::async_trait;
use tokio::process::Command;

/// Runs an external program to completion and captures its output.
///
/// Tests inject a fake implementation so encoder/transcriber behavior can
/// be exercised without real binaries.
#[async_trait]
pub trait ProcessRunner: Send + Sync {
    async fn run(&self, program: &str, args: &[String]) -> std::io::Result<Output>;
}

/// Default runner backed by `tokio::process::Command`.
///
/// Blocks the calling task until the child exits; no timeout is enforced
/// at this layer.
#[derive(Debug, Default)]
pub struct TokioProcessRunner;

#[async_trait]
impl ProcessRunner for TokioProcessRunner {
    async fn run(&self, program: &str, args: &[String]) -> std::io::Result<Output> {
        Command::new(program)
            .args(args)
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::piped())
            .output()
            .await
    }
}
