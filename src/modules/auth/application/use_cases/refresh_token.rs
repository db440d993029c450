use async_trait::async_trait;
use std::sync::Arc;

use crate::auth::application::ports::outgoing::{
    token_digest, TokenBlacklist, TokenError, TokenProvider,
};

#[derive(Debug, Clone, thiserror::Error)]
pub enum RefreshTokenError {
    #[error("Refresh token is invalid or expired")]
    InvalidToken,

    #[error("Refresh token has been revoked")]
    TokenRevoked,

    #[error("Token generation failed: {0}")]
    GenerationFailed(String),

    #[error("Blacklist error: {0}")]
    BlacklistError(String),
}

#[async_trait]
pub trait IRefreshTokenUseCase: Send + Sync {
    async fn execute(&self, refresh_token: &str) -> Result<String, RefreshTokenError>;
}

#[derive(Clone)]
pub struct RefreshTokenUseCase<B>
where
    B: TokenBlacklist + Send + Sync,
{
    token_provider: Arc<dyn TokenProvider + Send + Sync>,
    blacklist: B,
}

impl<B> RefreshTokenUseCase<B>
where
    B: TokenBlacklist + Send + Sync,
{
    pub fn new(token_provider: Arc<dyn TokenProvider + Send + Sync>, blacklist: B) -> Self {
        Self {
            token_provider,
            blacklist,
        }
    }
}

#[async_trait]
impl<B> IRefreshTokenUseCase for RefreshTokenUseCase<B>
where
    B: TokenBlacklist + Send + Sync,
{
    async fn execute(&self, refresh_token: &str) -> Result<String, RefreshTokenError> {
        let revoked = self
            .blacklist
            .is_revoked(&token_digest(refresh_token))
            .await
            .map_err(|e| RefreshTokenError::BlacklistError(e.to_string()))?;

        if revoked {
            return Err(RefreshTokenError::TokenRevoked);
        }

        self.token_provider
            .refresh_access_token(refresh_token)
            .map_err(|e| match e {
                TokenError::Invalid | TokenError::WrongTokenType => {
                    RefreshTokenError::InvalidToken
                }
                TokenError::GenerationFailed(msg) => RefreshTokenError::GenerationFailed(msg),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::application::domain::entities::UserRole;
    use crate::auth::application::ports::outgoing::{TokenBlacklistError, TokenClaims};
    use uuid::Uuid;

    struct MockTokens {
        refresh_ok: bool,
    }

    impl TokenProvider for MockTokens {
        fn generate_access_token(
            &self,
            _user_id: Uuid,
            _role: UserRole,
        ) -> Result<String, TokenError> {
            Ok("access".into())
        }

        fn generate_refresh_token(
            &self,
            _user_id: Uuid,
            _role: UserRole,
        ) -> Result<String, TokenError> {
            Ok("refresh".into())
        }

        fn verify_token(&self, _token: &str) -> Result<TokenClaims, TokenError> {
            Err(TokenError::Invalid)
        }

        fn refresh_access_token(&self, _refresh_token: &str) -> Result<String, TokenError> {
            if self.refresh_ok {
                Ok("new-access".into())
            } else {
                Err(TokenError::Invalid)
            }
        }
    }

    struct MockBlacklist {
        revoked: bool,
    }

    #[async_trait]
    impl TokenBlacklist for MockBlacklist {
        async fn revoke(
            &self,
            _token_digest: &str,
            _ttl_seconds: i64,
        ) -> Result<(), TokenBlacklistError> {
            Ok(())
        }

        async fn is_revoked(&self, _token_digest: &str) -> Result<bool, TokenBlacklistError> {
            Ok(self.revoked)
        }
    }

    #[tokio::test]
    async fn issues_new_access_token() {
        let uc = RefreshTokenUseCase::new(
            Arc::new(MockTokens { refresh_ok: true }),
            MockBlacklist { revoked: false },
        );
        assert_eq!(uc.execute("refresh.jwt").await.unwrap(), "new-access");
    }

    #[tokio::test]
    async fn revoked_token_is_refused() {
        let uc = RefreshTokenUseCase::new(
            Arc::new(MockTokens { refresh_ok: true }),
            MockBlacklist { revoked: true },
        );
        assert!(matches!(
            uc.execute("refresh.jwt").await,
            Err(RefreshTokenError::TokenRevoked)
        ));
    }

    #[tokio::test]
    async fn invalid_token_is_refused() {
        let uc = RefreshTokenUseCase::new(
            Arc::new(MockTokens { refresh_ok: false }),
            MockBlacklist { revoked: false },
        );
        assert!(matches!(
            uc.execute("garbage").await,
            Err(RefreshTokenError::InvalidToken)
        ));
    }
}
