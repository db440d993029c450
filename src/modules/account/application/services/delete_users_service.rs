use async_trait::async_trait;
use uuid::Uuid;

use crate::account::application::ports::incoming::use_cases::{
    DeleteUsersError, DeleteUsersUseCase,
};
use crate::account::application::ports::outgoing::AccountRepository;

pub struct DeleteUsersService<R: AccountRepository> {
    repository: R,
}

impl<R: AccountRepository> DeleteUsersService<R> {
    pub fn new(repository: R) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<R: AccountRepository> DeleteUsersUseCase for DeleteUsersService<R> {
    async fn execute(&self, user_ids: Vec<Uuid>) -> Result<u64, DeleteUsersError> {
        if user_ids.is_empty() {
            return Err(DeleteUsersError::EmptySelection);
        }

        self.repository
            .soft_delete(&user_ids)
            .await
            .map_err(|e| DeleteUsersError::RepositoryError(e.to_string()))
    }
}
