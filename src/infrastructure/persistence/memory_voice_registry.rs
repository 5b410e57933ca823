use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::application::ports::{VoiceRegistry, VoiceRegistryError};
use crate::domain::{UserId, VoiceIdentity};

/// Process-local registry for tests and ephemeral deployments.
#[derive(Default)]
pub struct InMemoryVoiceRegistry {
    inner: RwLock<HashMap<String, VoiceIdentity>>,
}

impl InMemoryVoiceRegistry {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl VoiceRegistry for InMemoryVoiceRegistry {
    async fn get(&self, user_id: &UserId) -> Result<Option<VoiceIdentity>, VoiceRegistryError> {
        Ok(self.inner.read().await.get(user_id.as_str()).cloned())
    }

    async fn put(
        &self,
        user_id: &UserId,
        identity: VoiceIdentity,
    ) -> Result<(), VoiceRegistryError> {
        self.inner
            .write()
            .await
            .insert(user_id.as_str().to_string(), identity);
        Ok(())
    }
}
