use async_trait::async_trait;
use bcrypt::{hash, verify, DEFAULT_COST};

use crate::auth::application::ports::outgoing::password_hasher::{
    PasswordHashError, PasswordHasher,
};

/// bcrypt is the default hasher (matching the legacy accounts); argon2 is the
/// alternative behind the same port.
#[derive(Clone)]
pub struct BcryptHasher {
    cost: u32,
}

impl BcryptHasher {
    pub fn new() -> Self {
        Self { cost: DEFAULT_COST }
    }

    pub fn with_cost(cost: u32) -> Self {
        Self { cost }
    }
}

impl Default for BcryptHasher {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl PasswordHasher for BcryptHasher {
    async fn hash_password(&self, password: &str) -> Result<String, PasswordHashError> {
        let password = password.to_string();
        let cost = self.cost;

        tokio::task::spawn_blocking(move || {
            hash(password, cost).map_err(|e| PasswordHashError::HashingFailed(e.to_string()))
        })
        .await
        .map_err(|e| PasswordHashError::HashingFailed(e.to_string()))?
    }

    async fn verify_password(
        &self,
        password: &str,
        hashed: &str,
    ) -> Result<bool, PasswordHashError> {
        let password = password.to_string();
        let hashed = hashed.to_string();

        tokio::task::spawn_blocking(move || {
            verify(password, &hashed)
                .map_err(|e| PasswordHashError::VerificationFailed(e.to_string()))
        })
        .await
        .map_err(|e| PasswordHashError::VerificationFailed(e.to_string()))?
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn hash_and_verify_password() {
        // Minimum cost keeps the test fast
        let hasher = BcryptHasher::with_cost(4);
        let password = "SecurePassword123";

        let hashed = hasher.hash_password(password).await.unwrap();

        assert!(hasher.verify_password(password, &hashed).await.unwrap());
        assert!(!hasher
            .verify_password("WrongPassword", &hashed)
            .await
            .unwrap());

        let invalid = hasher.verify_password(password, "invalid-hash").await;
        assert!(matches!(
            invalid,
            Err(PasswordHashError::VerificationFailed(_))
        ));
    }
}
