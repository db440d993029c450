use std::sync::Arc;

use crate::account::application::ports::incoming::use_cases::{
    DeleteUsersUseCase, ListUsersUseCase, ModerateUserUseCase,
};

/// Admin account-management use cases wired into the application state.
#[derive(Clone)]
pub struct AccountUseCases {
    pub list_users: Arc<dyn ListUsersUseCase>,
    pub moderate_user: Arc<dyn ModerateUserUseCase>,
    pub delete_users: Arc<dyn DeleteUsersUseCase>,
}
