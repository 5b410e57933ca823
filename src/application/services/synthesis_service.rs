use std::path::Path;
use std::sync::Arc;

use uuid::Uuid;

use crate::application::ports::{AudioChunkStream, VoiceProvider, VoiceProviderError};
use crate::domain::{VoiceId, VoiceReference};

/// Speech synthesis over a single provider port, in two variants: a
/// complete file on disk or a live chunk stream.
pub struct SynthesisService {
    provider: Arc<dyn VoiceProvider>,
}

impl SynthesisService {
    pub fn new(provider: Arc<dyn VoiceProvider>) -> Self {
        Self { provider }
    }

    /// Synthesizes against an already-resolved persistent voice and writes
    /// the result to `output`.
    pub async fn synthesize_to_file(
        &self,
        text: &str,
        voice_id: &VoiceId,
        output: &Path,
    ) -> Result<(), SynthesisError> {
        let audio = self
            .provider
            .synthesize(text, voice_id)
            .await
            .map_err(SynthesisError::Synthesis)?;
        tokio::fs::write(output, &audio).await?;
        tracing::info!(voice_id = %voice_id, bytes = audio.len(), path = %output.display(), "Synthesized audio written");
        Ok(())
    }

    /// Transient-clone variant: registers a throwaway voice from the
    /// reference sample, synthesizes a complete file, and deletes the voice
    /// again whether or not synthesis succeeded, to conserve the provider's
    /// voice quota. Deletion failures are logged, never propagated.
    pub async fn clone_and_synthesize_to_file(
        &self,
        text: &str,
        reference: &VoiceReference,
        output: &Path,
    ) -> Result<(), SynthesisError> {
        let suffix = Uuid::new_v4().simple().to_string();
        let voice_name = format!("clone_{}", &suffix[..8]);

        let voice_id = self
            .provider
            .register_voice(&voice_name, reference.path())
            .await
            .map_err(SynthesisError::Registration)?;

        let result = self.synthesize_to_file(text, &voice_id, output).await;

        if let Err(e) = self.provider.delete_voice(&voice_id).await {
            tracing::warn!(voice_id = %voice_id, error = %e, "Failed to delete transient voice");
        }

        result
    }

    /// Opens a streaming synthesis connection for an already-resolved
    /// persistent voice. Chunks arrive finite and single-pass; a mid-stream
    /// provider error truncates the stream without retry.
    pub async fn synthesize_stream(
        &self,
        text: &str,
        voice_id: &VoiceId,
    ) -> Result<AudioChunkStream, SynthesisError> {
        self.provider
            .synthesize_stream(text, voice_id)
            .await
            .map_err(SynthesisError::Synthesis)
    }
}

#[derive(Debug, thiserror::Error)]
pub enum SynthesisError {
    #[error("voice registration: {0}")]
    Registration(VoiceProviderError),
    #[error("synthesis: {0}")]
    Synthesis(VoiceProviderError),
    #[error("io: {0}")]
    Io(#[from] std::io::Error),
}
