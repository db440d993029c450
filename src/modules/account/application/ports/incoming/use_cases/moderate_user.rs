use async_trait::async_trait;
use uuid::Uuid;

use crate::auth::application::domain::entities::AccountStatus;

#[derive(Debug, Clone, thiserror::Error)]
pub enum ModerateUserError {
    #[error("User not found")]
    UserNotFound,

    #[error("Cannot move account from {} to {}", .from.as_str(), .to.as_str())]
    InvalidTransition {
        from: AccountStatus,
        to: AccountStatus,
    },

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

/// Admin moderation: approve, reject, suspend or reinstate an account.
/// Approving a vendor also marks the vendor profile verified.
#[async_trait]
pub trait ModerateUserUseCase: Send + Sync {
    async fn execute(
        &self,
        user_id: Uuid,
        new_status: AccountStatus,
    ) -> Result<AccountStatus, ModerateUserError>;
}
