use std::sync::Arc;

use tokio::sync::Mutex;
use uuid::Uuid;

use crate::application::ports::{
    VoiceProvider, VoiceProviderError, VoiceRegistry, VoiceRegistryError,
};
use crate::domain::{UserId, VoiceId, VoiceIdentity, VoiceReference};

/// Maps a user to their long-lived cloned voice. The first request for a
/// user registers a voice with the provider and persists the returned id;
/// every later request reuses the stored id without a provider call.
pub struct VoiceResolver {
    provider: Arc<dyn VoiceProvider>,
    registry: Arc<dyn VoiceRegistry>,
    // Serializes lookup+register+persist. A global section is enough at the
    // expected contention; races between processes can still double-register
    // the same user with the provider (known open issue, surfaced in logs).
    guard: Mutex<()>,
}

impl VoiceResolver {
    pub fn new(provider: Arc<dyn VoiceProvider>, registry: Arc<dyn VoiceRegistry>) -> Self {
        Self {
            provider,
            registry,
            guard: Mutex::new(()),
        }
    }

    pub async fn resolve_or_create(
        &self,
        user_id: &UserId,
        reference: &VoiceReference,
    ) -> Result<VoiceId, VoiceResolveError> {
        let _section = self.guard.lock().await;

        if let Some(identity) = self.registry.get(user_id).await? {
            tracing::debug!(user_id = %user_id, voice_id = %identity.voice_id, "Reusing registered voice");
            return Ok(identity.voice_id);
        }

        let suffix = Uuid::new_v4().simple().to_string();
        let voice_name = format!("user_{}_{}", user_id, &suffix[..4]);

        tracing::info!(user_id = %user_id, sample = %reference.file_name(), "Registering new voice");

        let voice_id = self
            .provider
            .register_voice(&voice_name, reference.path())
            .await
            .map_err(VoiceResolveError::Registration)?;

        if let Err(e) = self
            .registry
            .put(user_id, VoiceIdentity::new(voice_id.clone()))
            .await
        {
            // The voice exists upstream but the mapping did not persist; the
            // id is logged so the orphan can be reclaimed manually.
            tracing::error!(user_id = %user_id, voice_id = %voice_id, error = %e, "Voice registered but mapping not persisted");
            return Err(VoiceResolveError::Registry(e));
        }

        tracing::info!(user_id = %user_id, voice_id = %voice_id, "Voice registered");
        Ok(voice_id)
    }
}

#[derive(Debug, thiserror::Error)]
pub enum VoiceResolveError {
    #[error("voice registration: {0}")]
    Registration(VoiceProviderError),
    #[error("voice registry: {0}")]
    Registry(#[from] VoiceRegistryError),
}
