use async_trait::async_trait;
use uuid::Uuid;

use crate::auth::application::domain::entities::{AccountStatus, UserRole};

/// Input DTO for registration. The role decides which profile row is created
/// alongside the user (vendor or driver) inside the same transaction.
#[derive(Debug, Clone)]
pub struct CreateUserData {
    pub username: String,
    pub email: String,
    pub password_hash: String,
    pub full_name: String,
    pub phone: String,
    pub role: UserRole,
    pub status: AccountStatus,
}

#[derive(Debug, Clone, serde::Serialize)]
pub struct UserResult {
    pub id: Uuid,
    pub username: String,
    pub email: String,
    pub full_name: String,
    pub role: UserRole,
    pub status: AccountStatus,
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum UserRepositoryError {
    #[error("User already exists")]
    UserAlreadyExists,

    #[error("User not found")]
    UserNotFound,

    #[error("Database error: {0}")]
    DatabaseError(String),
}

#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Creates the user and, for vendor/driver roles, an empty profile row,
    /// atomically.
    async fn create_user(&self, user: CreateUserData) -> Result<UserResult, UserRepositoryError>;
}
