use async_trait::async_trait;

use crate::account::application::ports::outgoing::UserPage;
use crate::auth::application::domain::entities::{AccountStatus, UserRole};

const MAX_PER_PAGE: u64 = 100;
const DEFAULT_PER_PAGE: u64 = 20;

/// Normalized admin listing query. Out-of-range paging values are clamped
/// rather than rejected.
#[derive(Debug, Clone)]
pub struct ListUsersQuery {
    pub role: Option<UserRole>,
    pub status: Option<AccountStatus>,
    pub page: u64,
    pub per_page: u64,
}

impl ListUsersQuery {
    pub fn new(
        role: Option<UserRole>,
        status: Option<AccountStatus>,
        page: Option<u64>,
        per_page: Option<u64>,
    ) -> Self {
        Self {
            role,
            status,
            page: page.unwrap_or(1).max(1),
            per_page: per_page.unwrap_or(DEFAULT_PER_PAGE).clamp(1, MAX_PER_PAGE),
        }
    }
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum ListUsersError {
    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait ListUsersUseCase: Send + Sync {
    async fn execute(&self, query: ListUsersQuery) -> Result<UserPage, ListUsersError>;
}
