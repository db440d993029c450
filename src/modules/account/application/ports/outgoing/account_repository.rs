use async_trait::async_trait;
use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::auth::application::domain::entities::{AccountStatus, UserRole};

/// Admin listing filter. `page` starts at 1.
#[derive(Debug, Clone)]
pub struct UserListFilter {
    pub role: Option<UserRole>,
    pub status: Option<AccountStatus>,
    pub page: u64,
    pub per_page: u64,
}

#[derive(Debug, Clone)]
pub struct UserSummary {
    pub id: Uuid,
    pub username: String,
    pub email: String,
    pub full_name: String,
    pub phone: String,
    pub role: UserRole,
    pub status: AccountStatus,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone)]
pub struct UserPage {
    pub users: Vec<UserSummary>,
    pub total: u64,
    pub page: u64,
    pub per_page: u64,
}

/// What moderation needs to know about a user before changing its status.
#[derive(Debug, Clone)]
pub struct ModerationTarget {
    pub id: Uuid,
    pub role: UserRole,
    pub status: AccountStatus,
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum AccountRepositoryError {
    #[error("User not found")]
    NotFound,

    #[error("Database error: {0}")]
    DatabaseError(String),
}

#[async_trait]
pub trait AccountRepository: Send + Sync {
    /// Lists non-deleted accounts, newest first.
    async fn list_users(
        &self,
        filter: UserListFilter,
    ) -> Result<UserPage, AccountRepositoryError>;

    async fn find_moderation_target(
        &self,
        user_id: Uuid,
    ) -> Result<ModerationTarget, AccountRepositoryError>;

    /// Applies the new status. When `verify_vendor` is set the vendor row
    /// is flagged verified in the same transaction.
    async fn apply_moderation(
        &self,
        user_id: Uuid,
        status: AccountStatus,
        verify_vendor: bool,
    ) -> Result<(), AccountRepositoryError>;

    /// Soft-deletes the given accounts, returning how many rows changed.
    async fn soft_delete(&self, user_ids: &[Uuid]) -> Result<u64, AccountRepositoryError>;
}
