use async_trait::async_trait;

/// Looks up domain glossary material by code. Returns `None` when no
/// resource exists for the code.
#[async_trait]
pub trait GlossaryStore: Send + Sync {
    async fn load(&self, domain_code: &str) -> Result<Option<String>, GlossaryStoreError>;
}

#[derive(Debug, thiserror::Error)]
pub enum GlossaryStoreError {
    #[error("io: {0}")]
    Io(#[from] std::io::Error),
    #[error("malformed glossary: {0}")]
    Malformed(String),
}
