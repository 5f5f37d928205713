//! Application state shared across handlers.

use std::sync::Arc;

use studiorec_core::Config;
use studiorec_processing::{Mp3Encoder, TranscriptionInvoker};
use studiorec_storage::BlobPublisher;

/// Everything a request handler needs: configuration plus the three
/// external collaborators (encoder, blob publisher, transcription invoker).
/// Constructed once at startup; there is no other cross-request state.
pub struct AppState {
    pub config: Config,
    pub encoder: Mp3Encoder,
    pub publisher: Arc<dyn BlobPublisher>,
    pub transcriber: Arc<dyn TranscriptionInvoker>,
}
