use async_trait::async_trait;

use crate::domain::UserId;

/// Identity returned by the auth collaborator for a valid session token.
#[derive(Debug, Clone)]
pub struct SessionUser {
    pub user_id: UserId,
    pub username: String,
}

/// Validates the opaque bearer credential issued by the external auth
/// server. The pipeline never runs for an unauthenticated request.
#[async_trait]
pub trait SessionValidator: Send + Sync {
    async fn validate(&self, token: &str) -> Result<SessionUser, AuthError>;
}

#[derive(Debug, thiserror::Error)]
pub enum AuthError {
    #[error("not authenticated (no ACCESS_TOKEN cookie)")]
    MissingCredential,
    #[error("invalid or expired token")]
    InvalidToken,
    #[error("auth server unreachable: {0}")]
    Unreachable(String),
}
