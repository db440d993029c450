use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::auth::adapter::incoming::web::extractors::auth::VendorUser;
use crate::driver::application::ports::incoming::use_cases::ListFleetError;
use crate::shared::api::ApiResponse;
use crate::AppState;
use actix_web::{get, web, Responder};
use tracing::error;

use super::get_driver_profile::DriverProfileView;

/// List the caller's fleet
#[utoipa::path(
    get,
    path = "/api/vendors/me/drivers",
    tag = "driver",
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "Fleet drivers", body = inline(SuccessResponse<Vec<DriverProfileView>>)),
        (status = 401, description = "Missing or invalid access token", body = ErrorResponse),
        (status = 403, description = "Vendor role required", body = ErrorResponse),
        (status = 404, description = "Vendor profile not found", body = ErrorResponse),
    )
)]
#[get("/api/vendors/me/drivers")]
pub async fn get_fleet_handler(vendor: VendorUser, data: web::Data<AppState>) -> impl Responder {
    match data.driver_use_cases.list_fleet.execute(vendor.user_id).await {
        Ok(fleet) => ApiResponse::success(
            fleet
                .into_iter()
                .map(DriverProfileView::from)
                .collect::<Vec<_>>(),
        ),

        Err(ListFleetError::VendorNotFound) => {
            ApiResponse::not_found("VENDOR_NOT_FOUND", "Vendor profile not found")
        }

        Err(ListFleetError::RepositoryError(ref e)) => {
            error!(error = %e, "Fleet listing failed");
            ApiResponse::internal_error()
        }
    }
}
