use async_trait::async_trait;

use crate::domain::{UserId, VoiceIdentity};

/// Flat user-to-voice mapping with an injected persistence backend. The
/// single source of truth for which provider voice belongs to which user.
#[async_trait]
pub trait VoiceRegistry: Send + Sync {
    async fn get(&self, user_id: &UserId) -> Result<Option<VoiceIdentity>, VoiceRegistryError>;

    /// Persists the mapping for `user_id`, replacing any previous entry.
    /// Called only after the provider has confirmed registration.
    async fn put(
        &self,
        user_id: &UserId,
        identity: VoiceIdentity,
    ) -> Result<(), VoiceRegistryError>;
}

#[derive(Debug, thiserror::Error)]
pub enum VoiceRegistryError {
    #[error("io: {0}")]
    Io(#[from] std::io::Error),
    #[error("corrupt registry data: {0}")]
    Corrupt(String),
}
