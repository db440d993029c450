use crate::account::application::ports::incoming::use_cases::ModerateUserError;
use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::auth::adapter::incoming::web::extractors::auth::AdminUser;
use crate::auth::application::domain::entities::AccountStatus;
use crate::shared::api::ApiResponse;
use crate::AppState;
use actix_web::{patch, web, Responder};
use serde::{Deserialize, Serialize};
use tracing::{error, info};
use utoipa::ToSchema;
use uuid::Uuid;

#[derive(Deserialize, ToSchema)]
pub struct ModerateUserDto {
    /// Target status: active, rejected or suspended
    #[schema(example = "active")]
    pub status: AccountStatus,
}

#[derive(Serialize, ToSchema)]
pub struct ModerationResult {
    /// User ID (UUID)
    user_id: String,

    /// Status after moderation
    status: String,
}

/// Moderate an account
///
/// Allowed moves: pending to active or rejected, active to suspended,
/// suspended back to active. Approving a vendor also verifies the vendor
/// profile.
#[utoipa::path(
    patch,
    path = "/api/admin/users/{user_id}/status",
    tag = "admin",
    params(("user_id" = String, Path, description = "User ID (UUID)")),
    request_body = ModerateUserDto,
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "Status applied", body = inline(SuccessResponse<ModerationResult>)),
        (status = 403, description = "Admin role required", body = ErrorResponse),
        (status = 404, description = "User not found", body = ErrorResponse),
        (status = 409, description = "Transition not allowed", body = ErrorResponse),
    )
)]
#[patch("/api/admin/users/{user_id}/status")]
pub async fn moderate_user_handler(
    _admin: AdminUser,
    path: web::Path<Uuid>,
    req: web::Json<ModerateUserDto>,
    data: web::Data<AppState>,
) -> impl Responder {
    let user_id = path.into_inner();
    let new_status = req.into_inner().status;

    match data
        .account_use_cases
        .moderate_user
        .execute(user_id, new_status)
        .await
    {
        Ok(status) => {
            info!(user_id = %user_id, status = status.as_str(), "Account moderated");
            ApiResponse::success(ModerationResult {
                user_id: user_id.to_string(),
                status: status.as_str().to_string(),
            })
        }

        Err(ModerateUserError::UserNotFound) => {
            ApiResponse::not_found("USER_NOT_FOUND", "User not found")
        }

        Err(e @ ModerateUserError::InvalidTransition { .. }) => {
            ApiResponse::conflict("INVALID_STATUS_TRANSITION", &e.to_string())
        }

        Err(ModerateUserError::RepositoryError(ref e)) => {
            error!(error = %e, "Account moderation failed");
            ApiResponse::internal_error()
        }
    }
}
