use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::auth::adapter::incoming::web::extractors::auth::DriverUser;
use crate::driver::application::ports::incoming::use_cases::{
    UpdateDriverProfileCommand, UpdateDriverProfileError,
};
use crate::shared::api::ApiResponse;
use crate::AppState;
use actix_web::{put, web, Responder};
use serde::Deserialize;
use tracing::{error, info};
use utoipa::ToSchema;

use super::get_driver_profile::DriverProfileView;

#[derive(Deserialize, ToSchema)]
pub struct UpdateDriverProfileDto {
    /// Vehicle type
    #[schema(example = "tanker")]
    pub vehicle_type: String,

    /// Vehicle registration plate, stored uppercase
    #[schema(example = "LND-344-XA")]
    pub vehicle_plate: String,

    /// Driving license number
    pub license_number: String,
}

/// Update the caller's vehicle and license details
#[utoipa::path(
    put,
    path = "/api/drivers/me",
    tag = "driver",
    request_body = UpdateDriverProfileDto,
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "Updated profile", body = inline(SuccessResponse<DriverProfileView>)),
        (status = 400, description = "Validation error", body = ErrorResponse),
        (status = 403, description = "Driver role required", body = ErrorResponse),
        (status = 404, description = "Driver profile not found", body = ErrorResponse),
    )
)]
#[put("/api/drivers/me")]
pub async fn update_driver_profile_handler(
    driver: DriverUser,
    req: web::Json<UpdateDriverProfileDto>,
    data: web::Data<AppState>,
) -> impl Responder {
    let dto = req.into_inner();

    let command = match UpdateDriverProfileCommand::new(
        dto.vehicle_type,
        dto.vehicle_plate,
        dto.license_number,
    ) {
        Ok(command) => command,
        Err(e) => return ApiResponse::bad_request("VALIDATION_ERROR", &e.to_string()),
    };

    match data
        .driver_use_cases
        .update_profile
        .execute(driver.user_id, command)
        .await
    {
        Ok(profile) => {
            info!(user_id = %driver.user_id, "Driver profile updated");
            ApiResponse::success(DriverProfileView::from(profile))
        }

        Err(UpdateDriverProfileError::NotFound) => {
            ApiResponse::not_found("DRIVER_NOT_FOUND", "Driver profile not found")
        }

        Err(UpdateDriverProfileError::RepositoryError(ref e)) => {
            error!(error = %e, "Driver profile update failed");
            ApiResponse::internal_error()
        }
    }
}
