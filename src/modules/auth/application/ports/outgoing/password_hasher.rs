use async_trait::async_trait;

#[derive(Debug, Clone, thiserror::Error)]
pub enum PasswordHashError {
    #[error("Hashing failed: {0}")]
    HashingFailed(String),

    #[error("Verification failed: {0}")]
    VerificationFailed(String),
}

/// Hashing runs on a blocking pool in the adapters, so the port is async even
/// though the underlying primitives are not.
#[async_trait]
pub trait PasswordHasher: Send + Sync {
    async fn hash_password(&self, password: &str) -> Result<String, PasswordHashError>;
    async fn verify_password(&self, password: &str, hash: &str)
        -> Result<bool, PasswordHashError>;
}
