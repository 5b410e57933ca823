use std::path::Path;

use async_trait::async_trait;

/// Speech-to-text over a normalized waveform file. Provider failures are
/// absorbed by the orchestrator as a degraded transcript, not surfaced to
/// the client.
#[async_trait]
pub trait TranscriptionEngine: Send + Sync {
    async fn transcribe(&self, waveform: &Path) -> Result<String, TranscriptionError>;
}

#[derive(Debug, thiserror::Error)]
pub enum TranscriptionError {
    #[error("api request failed: {0}")]
    ApiRequestFailed(String),
    #[error("io: {0}")]
    Io(#[from] std::io::Error),
}
