use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::auth::adapter::incoming::web::extractors::auth::AuthenticatedUser;
use crate::auth::application::use_cases::fetch_profile::FetchProfileError;
use crate::shared::api::ApiResponse;
use crate::AppState;
use actix_web::{get, web, Responder};
use serde::Serialize;
use tracing::error;
use utoipa::ToSchema;

#[derive(Serialize, ToSchema)]
pub struct UserProfileResponse {
    /// User ID (UUID)
    #[schema(example = "123e4567-e89b-12d3-a456-426614174000")]
    id: String,

    /// Username
    #[schema(example = "amina_k")]
    username: String,

    /// Email address
    #[schema(example = "amina@example.com")]
    email: String,

    /// Full name
    #[schema(example = "Amina Kareem")]
    full_name: String,

    /// Phone number
    #[schema(example = "+2348012345678")]
    phone: String,

    /// Account role
    #[schema(example = "customer")]
    role: String,

    /// Account status
    #[schema(example = "active")]
    status: String,

    /// Account creation timestamp (RFC 3339)
    #[schema(example = "2026-01-15T09:30:00Z")]
    created_at: String,
}

/// Fetch the authenticated user's profile
#[utoipa::path(
    get,
    path = "/api/auth/me",
    tag = "auth",
    security(("bearer_auth" = [])),
    responses(
        (
            status = 200,
            description = "Profile of the authenticated user",
            body = inline(SuccessResponse<UserProfileResponse>),
        ),
        (
            status = 401,
            description = "Missing or invalid access token",
            body = ErrorResponse,
        ),
        (
            status = 404,
            description = "Account no longer exists",
            body = ErrorResponse,
        ),
    )
)]
#[get("/api/auth/me")]
pub async fn fetch_profile_handler(
    user: AuthenticatedUser,
    data: web::Data<AppState>,
) -> impl Responder {
    let use_case = &data.fetch_profile_use_case;

    match use_case.execute(user.user_id).await {
        Ok(profile) => ApiResponse::success(UserProfileResponse {
            id: profile.id.to_string(),
            username: profile.username,
            email: profile.email,
            full_name: profile.full_name,
            phone: profile.phone,
            role: profile.role.as_str().to_string(),
            status: profile.status.as_str().to_string(),
            created_at: profile.created_at.to_rfc3339(),
        }),

        Err(FetchProfileError::NotFound) => {
            ApiResponse::not_found("USER_NOT_FOUND", "Account no longer exists")
        }

        Err(FetchProfileError::QueryError(ref e)) => {
            error!(error = %e, "Profile lookup failed");
            ApiResponse::internal_error()
        }
    }
}
