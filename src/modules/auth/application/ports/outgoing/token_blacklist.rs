use async_trait::async_trait;

#[derive(Debug, Clone, thiserror::Error)]
pub enum TokenBlacklistError {
    #[error("Blacklist store error: {0}")]
    StoreError(String),
}

/// Revoked refresh tokens, keyed by digest, expiring alongside the token
/// itself.
#[async_trait]
pub trait TokenBlacklist: Send + Sync {
    async fn revoke(&self, token_digest: &str, ttl_seconds: i64)
        -> Result<(), TokenBlacklistError>;
    async fn is_revoked(&self, token_digest: &str) -> Result<bool, TokenBlacklistError>;
}

/// Digest used as the blacklist key; raw tokens never reach Redis.
pub fn token_digest(token: &str) -> String {
    use sha2::{Digest, Sha256};
    let mut hasher = Sha256::new();
    hasher.update(token.as_bytes());
    let digest = hasher.finalize();
    digest.iter().map(|b| format!("{:02x}", b)).collect()
}
