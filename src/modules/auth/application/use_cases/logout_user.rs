use async_trait::async_trait;
use std::sync::Arc;

use crate::auth::application::ports::outgoing::{token_digest, TokenBlacklist, TokenProvider};

#[derive(Debug, Clone, thiserror::Error)]
pub enum LogoutError {
    #[error("Refresh token is invalid or expired")]
    InvalidToken,

    #[error("Blacklist error: {0}")]
    BlacklistError(String),
}

#[async_trait]
pub trait ILogoutUseCase: Send + Sync {
    async fn execute(&self, refresh_token: &str) -> Result<(), LogoutError>;
}

#[derive(Clone)]
pub struct LogoutUseCase<B>
where
    B: TokenBlacklist + Send + Sync,
{
    blacklist: B,
    token_provider: Arc<dyn TokenProvider + Send + Sync>,
}

impl<B> LogoutUseCase<B>
where
    B: TokenBlacklist + Send + Sync,
{
    pub fn new(blacklist: B, token_provider: Arc<dyn TokenProvider + Send + Sync>) -> Self {
        Self {
            blacklist,
            token_provider,
        }
    }
}

#[async_trait]
impl<B> ILogoutUseCase for LogoutUseCase<B>
where
    B: TokenBlacklist + Send + Sync,
{
    async fn execute(&self, refresh_token: &str) -> Result<(), LogoutError> {
        let claims = self
            .token_provider
            .verify_token(refresh_token)
            .map_err(|_| LogoutError::InvalidToken)?;

        if claims.token_type != "refresh" {
            return Err(LogoutError::InvalidToken);
        }

        // Blacklist entry only needs to outlive the token itself.
        let ttl = claims.exp - chrono::Utc::now().timestamp();
        if ttl <= 0 {
            return Ok(());
        }

        self.blacklist
            .revoke(&token_digest(refresh_token), ttl)
            .await
            .map_err(|e| LogoutError::BlacklistError(e.to_string()))
    }
}
