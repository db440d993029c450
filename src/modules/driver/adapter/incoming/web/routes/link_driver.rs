use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::auth::adapter::incoming::web::extractors::auth::VendorUser;
use crate::driver::application::ports::incoming::use_cases::LinkDriverError;
use crate::shared::api::ApiResponse;
use crate::AppState;
use actix_web::{post, web, Responder};
use tracing::{error, info};
use uuid::Uuid;

use super::get_driver_profile::DriverProfileView;

/// Attach a driver to the caller's fleet
///
/// The driver account must be approved and not already attached to any
/// vendor.
#[utoipa::path(
    post,
    path = "/api/vendors/me/drivers/{driver_id}",
    tag = "driver",
    params(("driver_id" = String, Path, description = "Driver ID (UUID)")),
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "Driver linked", body = inline(SuccessResponse<DriverProfileView>)),
        (status = 403, description = "Vendor role required", body = ErrorResponse),
        (status = 404, description = "Vendor profile or driver not found", body = ErrorResponse),
        (status = 409, description = "Driver pending approval or already in a fleet", body = ErrorResponse),
    )
)]
#[post("/api/vendors/me/drivers/{driver_id}")]
pub async fn link_driver_handler(
    vendor: VendorUser,
    path: web::Path<Uuid>,
    data: web::Data<AppState>,
) -> impl Responder {
    let driver_id = path.into_inner();

    match data
        .driver_use_cases
        .link_driver
        .execute(vendor.user_id, driver_id)
        .await
    {
        Ok(profile) => {
            info!(vendor_user_id = %vendor.user_id, driver_id = %driver_id, "Driver linked to fleet");
            ApiResponse::success(DriverProfileView::from(profile))
        }

        Err(LinkDriverError::VendorNotFound) => {
            ApiResponse::not_found("VENDOR_NOT_FOUND", "Vendor profile not found")
        }

        Err(LinkDriverError::DriverNotFound) => {
            ApiResponse::not_found("DRIVER_NOT_FOUND", "Driver not found")
        }

        Err(LinkDriverError::DriverNotApproved) => ApiResponse::conflict(
            "DRIVER_NOT_APPROVED",
            "Driver account has not been approved",
        ),

        Err(LinkDriverError::AlreadyAttached) => ApiResponse::conflict(
            "DRIVER_ALREADY_ATTACHED",
            "Driver already belongs to a fleet",
        ),

        Err(LinkDriverError::RepositoryError(ref e)) => {
            error!(error = %e, "Driver link failed");
            ApiResponse::internal_error()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::application::domain::entities::UserRole;
    use crate::auth::application::ports::outgoing::token_provider::{
        TokenClaims, TokenError, TokenProvider,
    };
    use crate::driver::application::domain::entities::DriverAvailability;
    use crate::driver::application::ports::incoming::use_cases::LinkDriverUseCase;
    use crate::driver::application::ports::outgoing::DriverProfile;
    use crate::tests::support::app_state_builder::TestAppStateBuilder;
    use actix_web::{test, App};
    use async_trait::async_trait;
    use chrono::Utc;
    use rust_decimal::Decimal;
    use std::sync::Arc;

    struct StubTokenProvider {
        user_id: Uuid,
    }

    impl TokenProvider for StubTokenProvider {
        fn generate_access_token(
            &self,
            _user_id: Uuid,
            _role: UserRole,
        ) -> Result<String, TokenError> {
            Ok("access".to_string())
        }

        fn generate_refresh_token(
            &self,
            _user_id: Uuid,
            _role: UserRole,
        ) -> Result<String, TokenError> {
            Ok("refresh".to_string())
        }

        fn verify_token(&self, _token: &str) -> Result<TokenClaims, TokenError> {
            Ok(TokenClaims {
                sub: self.user_id,
                exp: (Utc::now().timestamp()) + 3600,
                token_type: "access".to_string(),
                role: UserRole::Vendor,
            })
        }

        fn refresh_access_token(&self, _refresh_token: &str) -> Result<String, TokenError> {
            Ok("access".to_string())
        }
    }

    struct MockLink(Result<(), LinkDriverError>);

    #[async_trait]
    impl LinkDriverUseCase for MockLink {
        async fn execute(
            &self,
            _vendor_user_id: Uuid,
            driver_id: Uuid,
        ) -> Result<DriverProfile, LinkDriverError> {
            self.0.clone().map(|_| DriverProfile {
                id: driver_id,
                user_id: Uuid::new_v4(),
                vendor_id: Some(Uuid::new_v4()),
                vehicle_type: "tanker".to_string(),
                vehicle_plate: "LND-344-XA".to_string(),
                license_number: "DL-9912".to_string(),
                availability: DriverAvailability::Available,
                rating_avg: Decimal::ZERO,
                rating_count: 0,
                created_at: Utc::now(),
                updated_at: Utc::now(),
            })
        }
    }

    fn app_data() -> actix_web::web::Data<Arc<dyn TokenProvider + Send + Sync>> {
        actix_web::web::Data::new(Arc::new(StubTokenProvider {
            user_id: Uuid::new_v4(),
        }) as Arc<dyn TokenProvider + Send + Sync>)
    }

    #[actix_web::test]
    async fn test_link_driver_success() {
        let app_state = TestAppStateBuilder::default()
            .with_link_driver(MockLink(Ok(())))
            .build();

        let app = test::init_service(
            App::new()
                .app_data(app_state)
                .app_data(app_data())
                .service(link_driver_handler),
        )
        .await;

        let req = test::TestRequest::post()
            .uri(&format!("/api/vendors/me/drivers/{}", Uuid::new_v4()))
            .insert_header(("Authorization", "Bearer token"))
            .to_request();

        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), 200);

        let body: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(body["success"], true);
        assert!(body["data"]["vendor_id"].is_string());
    }

    #[actix_web::test]
    async fn test_link_driver_already_attached() {
        let app_state = TestAppStateBuilder::default()
            .with_link_driver(MockLink(Err(LinkDriverError::AlreadyAttached)))
            .build();

        let app = test::init_service(
            App::new()
                .app_data(app_state)
                .app_data(app_data())
                .service(link_driver_handler),
        )
        .await;

        let req = test::TestRequest::post()
            .uri(&format!("/api/vendors/me/drivers/{}", Uuid::new_v4()))
            .insert_header(("Authorization", "Bearer token"))
            .to_request();

        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), 409);

        let body: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(body["error"]["code"], "DRIVER_ALREADY_ATTACHED");
    }

    #[actix_web::test]
    async fn test_link_driver_pending_approval() {
        let app_state = TestAppStateBuilder::default()
            .with_link_driver(MockLink(Err(LinkDriverError::DriverNotApproved)))
            .build();

        let app = test::init_service(
            App::new()
                .app_data(app_state)
                .app_data(app_data())
                .service(link_driver_handler),
        )
        .await;

        let req = test::TestRequest::post()
            .uri(&format!("/api/vendors/me/drivers/{}", Uuid::new_v4()))
            .insert_header(("Authorization", "Bearer token"))
            .to_request();

        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), 409);

        let body: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(body["error"]["code"], "DRIVER_NOT_APPROVED");
    }
}
