use async_trait::async_trait;
use uuid::Uuid;

#[derive(Debug, Clone, thiserror::Error)]
pub enum DeleteUsersError {
    #[error("No user ids given")]
    EmptySelection,

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

/// Bulk soft delete. Returns how many accounts were actually flagged;
/// already-deleted and unknown ids are skipped silently.
#[async_trait]
pub trait DeleteUsersUseCase: Send + Sync {
    async fn execute(&self, user_ids: Vec<Uuid>) -> Result<u64, DeleteUsersError>;
}
