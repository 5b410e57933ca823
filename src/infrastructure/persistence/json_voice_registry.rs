use std::collections::HashMap;
use std::path::PathBuf;

use async_trait::async_trait;
use tokio::sync::Mutex;

use crate::application::ports::{VoiceRegistry, VoiceRegistryError};
use crate::domain::{UserId, VoiceIdentity};

/// Flat JSON-file registry, the durable backend for the long-lived-voice
/// policy. The whole map is rewritten on every put; fine at the expected
/// handful of users.
pub struct JsonVoiceRegistry {
    path: PathBuf,
    lock: Mutex<()>,
}

impl JsonVoiceRegistry {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            lock: Mutex::new(()),
        }
    }

    async fn read_map(&self) -> Result<HashMap<String, VoiceIdentity>, VoiceRegistryError> {
        if !self.path.exists() {
            return Ok(HashMap::new());
        }
        let content = tokio::fs::read_to_string(&self.path).await?;
        serde_json::from_str(&content).map_err(|e| VoiceRegistryError::Corrupt(e.to_string()))
    }
}

#[async_trait]
impl VoiceRegistry for JsonVoiceRegistry {
    async fn get(&self, user_id: &UserId) -> Result<Option<VoiceIdentity>, VoiceRegistryError> {
        let _guard = self.lock.lock().await;
        let map = self.read_map().await?;
        Ok(map.get(user_id.as_str()).cloned())
    }

    async fn put(
        &self,
        user_id: &UserId,
        identity: VoiceIdentity,
    ) -> Result<(), VoiceRegistryError> {
        let _guard = self.lock.lock().await;
        let mut map = self.read_map().await?;
        map.insert(user_id.as_str().to_string(), identity);
        let content = serde_json::to_string_pretty(&map)
            .map_err(|e| VoiceRegistryError::Corrupt(e.to_string()))?;
        tokio::fs::write(&self.path, content).await?;
        Ok(())
    }
}
