use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::auth::application::use_cases::refresh_token::RefreshTokenError;
use crate::shared::api::ApiResponse;
use crate::AppState;
use actix_web::{post, web, Responder};
use serde::{Deserialize, Serialize};
use tracing::{error, warn};
use utoipa::ToSchema;

#[derive(Deserialize, ToSchema)]
pub struct RefreshTokenRequestDto {
    /// JWT refresh token issued at login
    #[schema(example = "eyJhbGciOiJIUzI1NiIsInR5cCI6IkpXVCJ9...")]
    pub refresh_token: String,
}

#[derive(Serialize, ToSchema)]
pub struct RefreshTokenResponseBody {
    /// Fresh JWT access token
    #[schema(example = "eyJhbGciOiJIUzI1NiIsInR5cCI6IkpXVCJ9...")]
    access_token: String,
}

/// Exchange a refresh token for a new access token
///
/// Revoked refresh tokens are rejected even when still within their
/// validity window.
#[utoipa::path(
    post,
    path = "/api/auth/refresh",
    tag = "auth",
    request_body = RefreshTokenRequestDto,
    responses(
        (
            status = 200,
            description = "New access token issued",
            body = inline(SuccessResponse<RefreshTokenResponseBody>),
        ),
        (
            status = 401,
            description = "Refresh token invalid, expired or revoked",
            body = ErrorResponse,
        ),
        (
            status = 500,
            description = "Internal server error",
            body = ErrorResponse,
        ),
    )
)]
#[post("/api/auth/refresh")]
pub async fn refresh_token_handler(
    req: web::Json<RefreshTokenRequestDto>,
    data: web::Data<AppState>,
) -> impl Responder {
    let use_case = &data.refresh_token_use_case;

    match use_case.execute(&req.refresh_token).await {
        Ok(access_token) => ApiResponse::success(RefreshTokenResponseBody { access_token }),

        Err(RefreshTokenError::InvalidToken) => {
            warn!("Refresh rejected: invalid token");
            ApiResponse::unauthorized("INVALID_REFRESH_TOKEN", "Refresh token is invalid or expired")
        }

        Err(RefreshTokenError::TokenRevoked) => {
            warn!("Refresh rejected: revoked token");
            ApiResponse::unauthorized("TOKEN_REVOKED", "Refresh token has been revoked")
        }

        Err(RefreshTokenError::GenerationFailed(ref e)) => {
            error!(error = %e, "Access token generation failed");
            ApiResponse::internal_error()
        }

        Err(RefreshTokenError::BlacklistError(ref e)) => {
            error!(error = %e, "Token blacklist lookup failed");
            ApiResponse::internal_error()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::application::use_cases::refresh_token::IRefreshTokenUseCase;
    use crate::tests::support::app_state_builder::TestAppStateBuilder;
    use actix_web::{test, App};
    use async_trait::async_trait;

    struct MockRefresh(Result<String, RefreshTokenError>);

    #[async_trait]
    impl IRefreshTokenUseCase for MockRefresh {
        async fn execute(&self, _: &str) -> Result<String, RefreshTokenError> {
            self.0.clone()
        }
    }

    async fn call(mock: MockRefresh) -> (u16, serde_json::Value) {
        let app_state = TestAppStateBuilder::default().with_refresh_token(mock).build();

        let app =
            test::init_service(App::new().app_data(app_state).service(refresh_token_handler))
                .await;

        let req = test::TestRequest::post()
            .uri("/api/auth/refresh")
            .set_json(serde_json::json!({ "refresh_token": "header.payload.sig" }))
            .to_request();

        let resp = test::call_service(&app, req).await;
        let status = resp.status().as_u16();
        let body = test::read_body_json(resp).await;
        (status, body)
    }

    #[actix_web::test]
    async fn test_refresh_success() {
        let (status, body) = call(MockRefresh(Ok("new.access.token".to_string()))).await;
        assert_eq!(status, 200);
        assert_eq!(body["data"]["access_token"], "new.access.token");
    }

    #[actix_web::test]
    async fn test_refresh_revoked_token() {
        let (status, body) = call(MockRefresh(Err(RefreshTokenError::TokenRevoked))).await;
        assert_eq!(status, 401);
        assert_eq!(body["error"]["code"], "TOKEN_REVOKED");
    }

    #[actix_web::test]
    async fn test_refresh_invalid_token() {
        let (status, body) = call(MockRefresh(Err(RefreshTokenError::InvalidToken))).await;
        assert_eq!(status, 401);
        assert_eq!(body["error"]["code"], "INVALID_REFRESH_TOKEN");
    }

    #[actix_web::test]
    async fn test_refresh_blacklist_error() {
        let (status, body) = call(MockRefresh(Err(RefreshTokenError::BlacklistError(
            "redis down".to_string(),
        ))))
        .await;
        assert_eq!(status, 500);
        assert_eq!(body["error"]["code"], "INTERNAL_ERROR");
    }
}
