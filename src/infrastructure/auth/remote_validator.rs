use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;

use crate::application::ports::{AuthError, SessionUser, SessionValidator};
use crate::domain::UserId;

const ACCESS_TOKEN_COOKIE: &str = "ACCESS_TOKEN";

/// Checks the session cookie against the separately-operated auth server by
/// forwarding it and reading back the resolved identity.
pub struct RemoteSessionValidator {
    client: Client,
    base_url: String,
}

#[derive(Deserialize)]
struct MeResponse {
    id: String,
    username: String,
}

impl RemoteSessionValidator {
    pub fn new(base_url: String, timeout: Duration) -> Self {
        Self {
            client: Client::builder()
                .timeout(timeout)
                .build()
                .unwrap_or_default(),
            base_url,
        }
    }
}

#[async_trait]
impl SessionValidator for RemoteSessionValidator {
    async fn validate(&self, token: &str) -> Result<SessionUser, AuthError> {
        let url = format!("{}/api/me", self.base_url.trim_end_matches('/'));

        let response = self
            .client
            .get(&url)
            .header(
                reqwest::header::COOKIE,
                format!("{}={}", ACCESS_TOKEN_COOKIE, token),
            )
            .send()
            .await
            .map_err(|e| AuthError::Unreachable(e.to_string()))?;

        if response.status() == reqwest::StatusCode::UNAUTHORIZED {
            return Err(AuthError::InvalidToken);
        }

        if !response.status().is_success() {
            return Err(AuthError::Unreachable(format!(
                "HTTP {}",
                response.status()
            )));
        }

        let me: MeResponse = response
            .json()
            .await
            .map_err(|e| AuthError::Unreachable(format!("body: {}", e)))?;

        Ok(SessionUser {
            user_id: UserId::new(me.id),
            username: me.username,
        })
    }
}
