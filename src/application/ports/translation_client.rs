use async_trait::async_trait;

/// Single-prompt completion against the translation provider.
#[async_trait]
pub trait TranslationClient: Send + Sync {
    async fn complete(&self, prompt: &str) -> Result<String, TranslationClientError>;
}

#[derive(Debug, thiserror::Error)]
pub enum TranslationClientError {
    #[error("api request failed: {0}")]
    ApiRequestFailed(String),
    #[error("rate limited")]
    RateLimited,
    #[error("invalid response: {0}")]
    InvalidResponse(String),
}
