use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::auth::adapter::incoming::web::extractors::auth::DriverUser;
use crate::driver::application::domain::entities::DriverAvailability;
use crate::driver::application::ports::incoming::use_cases::SetAvailabilityError;
use crate::shared::api::ApiResponse;
use crate::AppState;
use actix_web::{patch, web, Responder};
use serde::Deserialize;
use tracing::{error, info};
use utoipa::ToSchema;

use super::get_driver_profile::DriverProfileView;

#[derive(Deserialize, ToSchema)]
pub struct SetAvailabilityDto {
    /// available | busy | offline
    #[schema(example = "available")]
    pub availability: DriverAvailability,
}

/// Set the caller's availability
///
/// Going offline while assigned to a delivery does not unassign it;
/// assignment state lives on the order.
#[utoipa::path(
    patch,
    path = "/api/drivers/me/availability",
    tag = "driver",
    request_body = SetAvailabilityDto,
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "Updated profile", body = inline(SuccessResponse<DriverProfileView>)),
        (status = 400, description = "Unknown availability value", body = ErrorResponse),
        (status = 403, description = "Driver role required", body = ErrorResponse),
        (status = 404, description = "Driver profile not found", body = ErrorResponse),
    )
)]
#[patch("/api/drivers/me/availability")]
pub async fn set_availability_handler(
    driver: DriverUser,
    req: web::Json<SetAvailabilityDto>,
    data: web::Data<AppState>,
) -> impl Responder {
    let availability = req.into_inner().availability;

    match data
        .driver_use_cases
        .set_availability
        .execute(driver.user_id, availability)
        .await
    {
        Ok(profile) => {
            info!(user_id = %driver.user_id, availability = availability.as_str(), "Driver availability set");
            ApiResponse::success(DriverProfileView::from(profile))
        }

        Err(SetAvailabilityError::NotFound) => {
            ApiResponse::not_found("DRIVER_NOT_FOUND", "Driver profile not found")
        }

        Err(SetAvailabilityError::RepositoryError(ref e)) => {
            error!(error = %e, "Driver availability update failed");
            ApiResponse::internal_error()
        }
    }
}
