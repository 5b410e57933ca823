use std::path::Path;
use std::pin::Pin;

use async_trait::async_trait;
use bytes::Bytes;
use futures::Stream;

use crate::domain::VoiceId;

/// Finite, single-pass sequence of synthesized audio chunks. A mid-stream
/// provider error terminates the sequence; it is never restarted.
pub type AudioChunkStream = Pin<Box<dyn Stream<Item = Result<Bytes, VoiceProviderError>> + Send>>;

/// Voice-cloning synthesis provider: registers voices from reference
/// samples, synthesizes speech against a registered voice, and deletes
/// voices to free quota.
#[async_trait]
pub trait VoiceProvider: Send + Sync {
    /// Registers a new voice from a reference waveform and returns the
    /// provider-issued identifier.
    async fn register_voice(&self, name: &str, sample: &Path)
        -> Result<VoiceId, VoiceProviderError>;

    /// Synthesizes the full utterance and returns the audio bytes.
    async fn synthesize(&self, text: &str, voice_id: &VoiceId)
        -> Result<Bytes, VoiceProviderError>;

    /// Opens a streaming synthesis connection and forwards chunks as they
    /// arrive.
    async fn synthesize_stream(
        &self,
        text: &str,
        voice_id: &VoiceId,
    ) -> Result<AudioChunkStream, VoiceProviderError>;

    async fn delete_voice(&self, voice_id: &VoiceId) -> Result<(), VoiceProviderError>;
}

#[derive(Debug, thiserror::Error)]
pub enum VoiceProviderError {
    #[error("voice registration failed: {0}")]
    RegistrationFailed(String),
    #[error("synthesis failed: {0}")]
    SynthesisFailed(String),
    #[error("voice deletion failed: {0}")]
    DeletionFailed(String),
    #[error("api request failed: {0}")]
    ApiRequestFailed(String),
}
