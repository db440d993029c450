use async_trait::async_trait;
use uuid::Uuid;

use crate::auth::application::domain::entities::UserRole;
use crate::order::application::ports::outgoing::OrderRecord;

#[derive(Debug, Clone, thiserror::Error)]
pub enum ListOrdersError {
    #[error("No profile for this account")]
    ProfileNotFound,

    #[error("This role has no order listing")]
    UnsupportedRole,

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

/// Role-scoped listing: customers see their own orders, vendors their
/// shop's, drivers their assignments.
#[async_trait]
pub trait ListOrdersUseCase: Send + Sync {
    async fn execute(
        &self,
        user_id: Uuid,
        role: UserRole,
    ) -> Result<Vec<OrderRecord>, ListOrdersError>;
}
