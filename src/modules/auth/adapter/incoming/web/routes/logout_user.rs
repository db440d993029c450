use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::auth::application::use_cases::logout_user::LogoutError;
use crate::shared::api::ApiResponse;
use crate::AppState;
use actix_web::{post, web, Responder};
use serde::{Deserialize, Serialize};
use tracing::{error, warn};
use utoipa::ToSchema;

#[derive(Deserialize, ToSchema)]
pub struct LogoutRequestDto {
    /// JWT refresh token to revoke
    #[schema(example = "eyJhbGciOiJIUzI1NiIsInR5cCI6IkpXVCJ9...")]
    pub refresh_token: String,
}

#[derive(Serialize, ToSchema)]
pub struct LogoutResponseBody {
    #[schema(example = "Logged out")]
    message: String,
}

/// Log out
///
/// Revokes the refresh token. Access tokens stay valid until they expire
/// on their own.
#[utoipa::path(
    post,
    path = "/api/auth/logout",
    tag = "auth",
    request_body = LogoutRequestDto,
    responses(
        (
            status = 200,
            description = "Refresh token revoked",
            body = inline(SuccessResponse<LogoutResponseBody>),
        ),
        (
            status = 401,
            description = "Refresh token invalid",
            body = ErrorResponse,
        ),
        (
            status = 500,
            description = "Internal server error",
            body = ErrorResponse,
        ),
    )
)]
#[post("/api/auth/logout")]
pub async fn logout_user_handler(
    req: web::Json<LogoutRequestDto>,
    data: web::Data<AppState>,
) -> impl Responder {
    let use_case = &data.logout_use_case;

    match use_case.execute(&req.refresh_token).await {
        Ok(()) => ApiResponse::success(LogoutResponseBody {
            message: "Logged out".to_string(),
        }),

        Err(LogoutError::InvalidToken) => {
            warn!("Logout rejected: invalid refresh token");
            ApiResponse::unauthorized("INVALID_REFRESH_TOKEN", "Refresh token is invalid or expired")
        }

        Err(LogoutError::BlacklistError(ref e)) => {
            error!(error = %e, "Token revocation failed");
            ApiResponse::internal_error()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::application::use_cases::logout_user::ILogoutUseCase;
    use crate::tests::support::app_state_builder::TestAppStateBuilder;
    use actix_web::{test, App};
    use async_trait::async_trait;

    struct MockLogout(Result<(), LogoutError>);

    #[async_trait]
    impl ILogoutUseCase for MockLogout {
        async fn execute(&self, _: &str) -> Result<(), LogoutError> {
            self.0.clone()
        }
    }

    #[actix_web::test]
    async fn test_logout_success() {
        let app_state = TestAppStateBuilder::default()
            .with_logout(MockLogout(Ok(())))
            .build();

        let app =
            test::init_service(App::new().app_data(app_state).service(logout_user_handler)).await;

        let req = test::TestRequest::post()
            .uri("/api/auth/logout")
            .set_json(serde_json::json!({ "refresh_token": "header.payload.sig" }))
            .to_request();

        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), 200);

        let body: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(body["data"]["message"], "Logged out");
    }

    #[actix_web::test]
    async fn test_logout_invalid_token() {
        let app_state = TestAppStateBuilder::default()
            .with_logout(MockLogout(Err(LogoutError::InvalidToken)))
            .build();

        let app =
            test::init_service(App::new().app_data(app_state).service(logout_user_handler)).await;

        let req = test::TestRequest::post()
            .uri("/api/auth/logout")
            .set_json(serde_json::json!({ "refresh_token": "garbage" }))
            .to_request();

        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), 401);

        let body: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(body["error"]["code"], "INVALID_REFRESH_TOKEN");
    }
}
