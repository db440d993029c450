use async_trait::async_trait;
use sea_orm::sea_query::Expr;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, PaginatorTrait, QueryFilter,
    QueryOrder, Set, TransactionTrait,
};
use std::sync::Arc;
use uuid::Uuid;

use crate::account::application::ports::outgoing::{
    AccountRepository, AccountRepositoryError, ModerationTarget, UserListFilter, UserPage,
    UserSummary,
};
use crate::auth::application::domain::entities::{AccountStatus, UserRole};
use crate::modules::auth::adapter::outgoing::sea_orm_entity::users;
use crate::modules::vendor::adapter::outgoing::sea_orm_entity as vendors;

#[derive(Clone)]
pub struct AccountRepositoryPostgres {
    db: Arc<DatabaseConnection>,
}

impl AccountRepositoryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }

    fn to_summary(model: users::Model) -> Result<UserSummary, AccountRepositoryError> {
        let role = UserRole::parse(&model.role).ok_or_else(|| {
            AccountRepositoryError::DatabaseError(format!("Unknown role: {}", model.role))
        })?;
        let status = AccountStatus::parse(&model.status).ok_or_else(|| {
            AccountRepositoryError::DatabaseError(format!("Unknown status: {}", model.status))
        })?;

        Ok(UserSummary {
            id: model.id,
            username: model.username,
            email: model.email,
            full_name: model.full_name,
            phone: model.phone,
            role,
            status,
            created_at: model.created_at.into(),
        })
    }
}

#[async_trait]
impl AccountRepository for AccountRepositoryPostgres {
    async fn list_users(
        &self,
        filter: UserListFilter,
    ) -> Result<UserPage, AccountRepositoryError> {
        let mut query = users::Entity::find().filter(users::Column::IsDeleted.eq(false));

        if let Some(role) = filter.role {
            query = query.filter(users::Column::Role.eq(role.as_str()));
        }
        if let Some(status) = filter.status {
            query = query.filter(users::Column::Status.eq(status.as_str()));
        }

        let paginator = query
            .order_by_desc(users::Column::CreatedAt)
            .paginate(&*self.db, filter.per_page);

        let total = paginator
            .num_items()
            .await
            .map_err(|e| AccountRepositoryError::DatabaseError(e.to_string()))?;

        let rows = paginator
            .fetch_page(filter.page - 1)
            .await
            .map_err(|e| AccountRepositoryError::DatabaseError(e.to_string()))?;

        let users = rows
            .into_iter()
            .map(Self::to_summary)
            .collect::<Result<Vec<_>, _>>()?;

        Ok(UserPage {
            users,
            total,
            page: filter.page,
            per_page: filter.per_page,
        })
    }

    async fn find_moderation_target(
        &self,
        user_id: Uuid,
    ) -> Result<ModerationTarget, AccountRepositoryError> {
        let model = users::Entity::find_by_id(user_id)
            .filter(users::Column::IsDeleted.eq(false))
            .one(&*self.db)
            .await
            .map_err(|e| AccountRepositoryError::DatabaseError(e.to_string()))?
            .ok_or(AccountRepositoryError::NotFound)?;

        let summary = Self::to_summary(model)?;

        Ok(ModerationTarget {
            id: summary.id,
            role: summary.role,
            status: summary.status,
        })
    }

    async fn apply_moderation(
        &self,
        user_id: Uuid,
        status: AccountStatus,
        verify_vendor: bool,
    ) -> Result<(), AccountRepositoryError> {
        let txn = self
            .db
            .begin()
            .await
            .map_err(|e| AccountRepositoryError::DatabaseError(e.to_string()))?;

        let found = users::Entity::find_by_id(user_id)
            .one(&txn)
            .await
            .map_err(|e| AccountRepositoryError::DatabaseError(e.to_string()))?
            .ok_or(AccountRepositoryError::NotFound)?;

        let mut active: users::ActiveModel = found.into();
        active.status = Set(status.as_str().to_string());
        active
            .update(&txn)
            .await
            .map_err(|e| AccountRepositoryError::DatabaseError(e.to_string()))?;

        if verify_vendor {
            vendors::Entity::update_many()
                .col_expr(vendors::Column::Verified, Expr::value(true))
                .filter(vendors::Column::UserId.eq(user_id))
                .exec(&txn)
                .await
                .map_err(|e| AccountRepositoryError::DatabaseError(e.to_string()))?;
        }

        txn.commit()
            .await
            .map_err(|e| AccountRepositoryError::DatabaseError(e.to_string()))
    }

    async fn soft_delete(&self, user_ids: &[Uuid]) -> Result<u64, AccountRepositoryError> {
        let result = users::Entity::update_many()
            .col_expr(users::Column::IsDeleted, Expr::value(true))
            .col_expr(
                users::Column::UpdatedAt,
                Expr::value(chrono::Utc::now()),
            )
            .filter(users::Column::Id.is_in(user_ids.iter().copied()))
            .filter(users::Column::IsDeleted.eq(false))
            .exec(&*self.db)
            .await
            .map_err(|e| AccountRepositoryError::DatabaseError(e.to_string()))?;

        Ok(result.rows_affected)
    }
}
