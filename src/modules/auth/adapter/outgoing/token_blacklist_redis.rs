use async_trait::async_trait;
use deadpool_redis::Pool;
use redis::AsyncCommands;
use std::sync::Arc;

use crate::auth::application::ports::outgoing::token_blacklist::{
    TokenBlacklist, TokenBlacklistError,
};

/// Redis-backed blacklist of revoked refresh tokens. Keys carry the token
/// digest, never the token itself, and expire with the token.
#[derive(Clone)]
pub struct RedisTokenBlacklist {
    pool: Arc<Pool>,
}

impl RedisTokenBlacklist {
    pub fn new(pool: Arc<Pool>) -> Self {
        Self { pool }
    }

    fn key(token_digest: &str) -> String {
        format!("revoked_token:{}", token_digest)
    }
}

#[async_trait]
impl TokenBlacklist for RedisTokenBlacklist {
    async fn revoke(
        &self,
        token_digest: &str,
        ttl_seconds: i64,
    ) -> Result<(), TokenBlacklistError> {
        let mut conn = self
            .pool
            .get()
            .await
            .map_err(|e| TokenBlacklistError::StoreError(e.to_string()))?;

        let ttl = u64::try_from(ttl_seconds).unwrap_or(0).max(1);
        let _: () = conn
            .set_ex(Self::key(token_digest), "1", ttl)
            .await
            .map_err(|e| TokenBlacklistError::StoreError(e.to_string()))?;

        Ok(())
    }

    async fn is_revoked(&self, token_digest: &str) -> Result<bool, TokenBlacklistError> {
        let mut conn = self
            .pool
            .get()
            .await
            .map_err(|e| TokenBlacklistError::StoreError(e.to_string()))?;

        let exists: bool = conn
            .exists(Self::key(token_digest))
            .await
            .map_err(|e| TokenBlacklistError::StoreError(e.to_string()))?;

        Ok(exists)
    }
}
