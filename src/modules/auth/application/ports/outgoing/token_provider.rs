use uuid::Uuid;

use crate::auth::application::domain::entities::UserRole;

#[derive(Debug, Clone)]
pub struct TokenClaims {
    pub sub: Uuid,
    pub exp: i64,
    pub token_type: String,
    pub role: UserRole,
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum TokenError {
    #[error("Token generation failed: {0}")]
    GenerationFailed(String),

    #[error("Token is invalid or expired")]
    Invalid,

    #[error("Wrong token type")]
    WrongTokenType,
}

/// Issuance and verification of the bearer tokens. The role travels in the
/// claims so extractors can gate handlers without a DB round trip.
pub trait TokenProvider: Send + Sync {
    fn generate_access_token(&self, user_id: Uuid, role: UserRole) -> Result<String, TokenError>;
    fn generate_refresh_token(&self, user_id: Uuid, role: UserRole) -> Result<String, TokenError>;
    fn verify_token(&self, token: &str) -> Result<TokenClaims, TokenError>;
    fn refresh_access_token(&self, refresh_token: &str) -> Result<String, TokenError>;
}
