use async_trait::async_trait;
use std::sync::Arc;
use uuid::Uuid;

use crate::account::application::ports::incoming::use_cases::{
    ModerateUserError, ModerateUserUseCase,
};
use crate::account::application::ports::outgoing::{AccountRepository, AccountRepositoryError};
use crate::auth::application::domain::entities::{AccountStatus, UserRole};
use crate::notification::application::domain::entities::NotificationKind;
use crate::notification::application::ports::outgoing::{NotificationDraft, NotificationPublisher};

pub struct ModerateUserService<R: AccountRepository> {
    repository: R,
    publisher: Arc<dyn NotificationPublisher>,
}

impl<R: AccountRepository> ModerateUserService<R> {
    pub fn new(repository: R, publisher: Arc<dyn NotificationPublisher>) -> Self {
        Self {
            repository,
            publisher,
        }
    }
}

#[async_trait]
impl<R: AccountRepository> ModerateUserUseCase for ModerateUserService<R> {
    async fn execute(
        &self,
        user_id: Uuid,
        new_status: AccountStatus,
    ) -> Result<AccountStatus, ModerateUserError> {
        let target = self
            .repository
            .find_moderation_target(user_id)
            .await
            .map_err(|e| match e {
                AccountRepositoryError::NotFound => ModerateUserError::UserNotFound,
                other => ModerateUserError::RepositoryError(other.to_string()),
            })?;

        if !target.status.can_transition(new_status) {
            return Err(ModerateUserError::InvalidTransition {
                from: target.status,
                to: new_status,
            });
        }

        let verify_vendor =
            target.role == UserRole::Vendor && new_status == AccountStatus::Active;

        self.repository
            .apply_moderation(user_id, new_status, verify_vendor)
            .await
            .map_err(|e| match e {
                AccountRepositoryError::NotFound => ModerateUserError::UserNotFound,
                other => ModerateUserError::RepositoryError(other.to_string()),
            })?;

        self.publisher
            .publish(NotificationDraft {
                user_id,
                kind: NotificationKind::AccountModerated,
                title: "Account status updated".to_string(),
                body: format!("Your account is now {}", new_status.as_str()),
                order_id: None,
            })
            .await;

        Ok(new_status)
    }
}
