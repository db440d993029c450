use async_trait::async_trait;
use sea_orm::ActiveValue::NotSet;
use sea_orm::{ActiveModelTrait, DatabaseConnection, Set, TransactionTrait};
use std::sync::Arc;
use uuid::Uuid;

use crate::auth::application::domain::entities::UserRole;
use crate::auth::application::ports::outgoing::user_repository::{
    CreateUserData, UserRepository, UserRepositoryError, UserResult,
};
use crate::driver::adapter::outgoing::sea_orm_entity::ActiveModel as DriverActiveModel;
use crate::vendor::adapter::outgoing::sea_orm_entity::ActiveModel as VendorActiveModel;

use super::sea_orm_entity::users::{ActiveModel as UserActiveModel, Model as UserModel};

#[derive(Clone)]
pub struct UserRepositoryPostgres {
    db: Arc<DatabaseConnection>,
}

impl UserRepositoryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }

    fn map_to_user_result(model: UserModel) -> Result<UserResult, UserRepositoryError> {
        let role = UserRole::parse(&model.role).ok_or_else(|| {
            UserRepositoryError::DatabaseError(format!("unknown role '{}'", model.role))
        })?;
        let status = crate::auth::application::domain::entities::AccountStatus::parse(
            &model.status,
        )
        .ok_or_else(|| {
            UserRepositoryError::DatabaseError(format!("unknown status '{}'", model.status))
        })?;

        Ok(UserResult {
            id: model.id,
            email: model.email,
            username: model.username,
            full_name: model.full_name,
            role,
            status,
        })
    }

    fn is_unique_violation(err: &sea_orm::DbErr) -> bool {
        let err_str = err.to_string().to_lowercase();
        err_str.contains("23505")
            || err_str.contains("duplicate key")
            || err_str.contains("unique constraint")
    }
}

#[async_trait]
impl UserRepository for UserRepositoryPostgres {
    async fn create_user(&self, user: CreateUserData) -> Result<UserResult, UserRepositoryError> {
        let txn = self
            .db
            .begin()
            .await
            .map_err(|e| UserRepositoryError::DatabaseError(e.to_string()))?;

        let user_id = Uuid::new_v4();
        let active_user = UserActiveModel {
            id: Set(user_id),
            username: Set(user.username),
            email: Set(user.email),
            password_hash: Set(user.password_hash),
            full_name: Set(user.full_name.clone()),
            phone: Set(user.phone),
            role: Set(user.role.as_str().to_string()),
            status: Set(user.status.as_str().to_string()),
            created_at: NotSet,
            updated_at: NotSet,
            is_deleted: Set(false),
        };

        let inserted = active_user.insert(&txn).await.map_err(|e| {
            if Self::is_unique_violation(&e) {
                UserRepositoryError::UserAlreadyExists
            } else {
                UserRepositoryError::DatabaseError(e.to_string())
            }
        })?;

        // The role-specific profile row is born alongside the user so approval
        // and ownership lookups never race a missing profile.
        match user.role {
            UserRole::Vendor => {
                let vendor = VendorActiveModel {
                    id: Set(Uuid::new_v4()),
                    user_id: Set(user_id),
                    business_name: Set(user.full_name),
                    address: Set(String::new()),
                    description: Set(String::new()),
                    logo_path: Set(None),
                    verified: Set(false),
                    rating_avg: Set(rust_decimal::Decimal::ZERO),
                    rating_count: Set(0),
                    created_at: NotSet,
                    updated_at: NotSet,
                };
                vendor
                    .insert(&txn)
                    .await
                    .map_err(|e| UserRepositoryError::DatabaseError(e.to_string()))?;
            }
            UserRole::Driver => {
                let driver = DriverActiveModel {
                    id: Set(Uuid::new_v4()),
                    user_id: Set(user_id),
                    vendor_id: Set(None),
                    vehicle_type: Set(String::new()),
                    vehicle_plate: Set(String::new()),
                    license_number: Set(String::new()),
                    availability: Set("offline".to_string()),
                    rating_avg: Set(rust_decimal::Decimal::ZERO),
                    rating_count: Set(0),
                    created_at: NotSet,
                    updated_at: NotSet,
                };
                driver
                    .insert(&txn)
                    .await
                    .map_err(|e| UserRepositoryError::DatabaseError(e.to_string()))?;
            }
            UserRole::Customer | UserRole::Admin => {}
        }

        txn.commit()
            .await
            .map_err(|e| UserRepositoryError::DatabaseError(e.to_string()))?;

        Self::map_to_user_result(inserted)
    }
}
