use crate::account::application::ports::incoming::use_cases::DeleteUsersError;
use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::auth::adapter::incoming::web::extractors::auth::AdminUser;
use crate::shared::api::ApiResponse;
use crate::AppState;
use actix_web::{delete, web, Responder};
use serde::{Deserialize, Serialize};
use tracing::{error, info};
use utoipa::ToSchema;
use uuid::Uuid;

#[derive(Deserialize, ToSchema)]
pub struct DeleteUsersDto {
    /// Accounts to soft-delete
    pub user_ids: Vec<Uuid>,
}

#[derive(Serialize, ToSchema)]
pub struct DeleteUsersResult {
    /// How many accounts were flagged deleted
    deleted: u64,
}

/// Soft-delete accounts in bulk
///
/// Deleted accounts can no longer authenticate but their rows stay for
/// order history. Unknown and already-deleted ids are skipped.
#[utoipa::path(
    delete,
    path = "/api/admin/users",
    tag = "admin",
    request_body = DeleteUsersDto,
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "Accounts deleted", body = inline(SuccessResponse<DeleteUsersResult>)),
        (status = 400, description = "Empty id list", body = ErrorResponse),
        (status = 403, description = "Admin role required", body = ErrorResponse),
    )
)]
#[delete("/api/admin/users")]
pub async fn delete_users_handler(
    _admin: AdminUser,
    req: web::Json<DeleteUsersDto>,
    data: web::Data<AppState>,
) -> impl Responder {
    let user_ids = req.into_inner().user_ids;

    match data.account_use_cases.delete_users.execute(user_ids).await {
        Ok(deleted) => {
            info!(deleted, "Accounts soft-deleted");
            ApiResponse::success(DeleteUsersResult { deleted })
        }

        Err(DeleteUsersError::EmptySelection) => {
            ApiResponse::bad_request("EMPTY_SELECTION", "No user ids given")
        }

        Err(DeleteUsersError::RepositoryError(ref e)) => {
            error!(error = %e, "Bulk account delete failed");
            ApiResponse::internal_error()
        }
    }
}
