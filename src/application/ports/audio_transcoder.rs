use std::path::Path;

use async_trait::async_trait;

/// Normalizes an uploaded audio container into a mono 16 kHz WAV on disk.
/// 16 kHz is a hard ceiling imposed by the STT provider's file-size and
/// quality constraints.
#[async_trait]
pub trait AudioTranscoder: Send + Sync {
    async fn transcode_to_wav(&self, data: &[u8], output: &Path) -> Result<(), TranscodeError>;
}

/// Transcode failures are fatal for the request; there is no retry.
#[derive(Debug, thiserror::Error)]
pub enum TranscodeError {
    #[error("audio decoding failed: {0}")]
    DecodingFailed(String),
    #[error("io: {0}")]
    Io(#[from] std::io::Error),
}
