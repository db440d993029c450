use crate::account::application::ports::incoming::use_cases::{ListUsersError, ListUsersQuery};
use crate::account::application::ports::outgoing::{UserPage, UserSummary};
use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::auth::adapter::incoming::web::extractors::auth::AdminUser;
use crate::auth::application::domain::entities::{AccountStatus, UserRole};
use crate::shared::api::ApiResponse;
use crate::AppState;
use actix_web::{get, web, Responder};
use serde::{Deserialize, Serialize};
use tracing::error;
use utoipa::{IntoParams, ToSchema};

#[derive(Deserialize, IntoParams)]
pub struct ListUsersParams {
    /// Filter by role: customer, driver, vendor or admin
    role: Option<UserRole>,

    /// Filter by status: pending, active, suspended or rejected
    status: Option<AccountStatus>,

    /// Page number, starting at 1
    page: Option<u64>,

    /// Page size, capped at 100
    per_page: Option<u64>,
}

#[derive(Serialize, ToSchema)]
pub struct UserAdminView {
    /// User ID (UUID)
    id: String,

    username: String,

    email: String,

    full_name: String,

    phone: String,

    role: String,

    status: String,

    /// RFC 3339 timestamp
    created_at: String,
}

impl From<UserSummary> for UserAdminView {
    fn from(u: UserSummary) -> Self {
        Self {
            id: u.id.to_string(),
            username: u.username,
            email: u.email,
            full_name: u.full_name,
            phone: u.phone,
            role: u.role.as_str().to_string(),
            status: u.status.as_str().to_string(),
            created_at: u.created_at.to_rfc3339(),
        }
    }
}

#[derive(Serialize, ToSchema)]
pub struct UserPageView {
    users: Vec<UserAdminView>,

    /// Total matching accounts across all pages
    total: u64,

    page: u64,

    per_page: u64,
}

impl From<UserPage> for UserPageView {
    fn from(p: UserPage) -> Self {
        Self {
            users: p.users.into_iter().map(UserAdminView::from).collect(),
            total: p.total,
            page: p.page,
            per_page: p.per_page,
        }
    }
}

/// List accounts for moderation, newest first
#[utoipa::path(
    get,
    path = "/api/admin/users",
    tag = "admin",
    params(ListUsersParams),
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "Paged account listing", body = inline(SuccessResponse<UserPageView>)),
        (status = 401, description = "Missing or invalid access token", body = ErrorResponse),
        (status = 403, description = "Admin role required", body = ErrorResponse),
    )
)]
#[get("/api/admin/users")]
pub async fn get_users_handler(
    _admin: AdminUser,
    params: web::Query<ListUsersParams>,
    data: web::Data<AppState>,
) -> impl Responder {
    let params = params.into_inner();
    let query = ListUsersQuery::new(params.role, params.status, params.page, params.per_page);

    match data.account_use_cases.list_users.execute(query).await {
        Ok(page) => ApiResponse::success(UserPageView::from(page)),

        Err(ListUsersError::RepositoryError(ref e)) => {
            error!(error = %e, "Admin user listing failed");
            ApiResponse::internal_error()
        }
    }
}
