use async_trait::async_trait;

use crate::account::application::ports::incoming::use_cases::{
    ListUsersError, ListUsersQuery, ListUsersUseCase,
};
use crate::account::application::ports::outgoing::{
    AccountRepository, UserListFilter, UserPage,
};

pub struct ListUsersService<R: AccountRepository> {
    repository: R,
}

impl<R: AccountRepository> ListUsersService<R> {
    pub fn new(repository: R) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<R: AccountRepository> ListUsersUseCase for ListUsersService<R> {
    async fn execute(&self, query: ListUsersQuery) -> Result<UserPage, ListUsersError> {
        let filter = UserListFilter {
            role: query.role,
            status: query.status,
            page: query.page,
            per_page: query.per_page,
        };

        self.repository
            .list_users(filter)
            .await
            .map_err(|e| ListUsersError::RepositoryError(e.to_string()))
    }
}
