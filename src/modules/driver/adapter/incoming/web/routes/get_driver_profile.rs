use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::auth::adapter::incoming::web::extractors::auth::DriverUser;
use crate::driver::application::ports::incoming::use_cases::GetDriverProfileError;
use crate::driver::application::ports::outgoing::DriverProfile;
use crate::shared::api::ApiResponse;
use crate::AppState;
use actix_web::{get, web, Responder};
use serde::Serialize;
use tracing::error;
use utoipa::ToSchema;

#[derive(Serialize, ToSchema)]
pub struct DriverProfileView {
    /// Driver ID (UUID)
    id: String,

    /// Fleet the driver belongs to, when linked
    vendor_id: Option<String>,

    /// Vehicle type
    #[schema(example = "tanker")]
    vehicle_type: String,

    /// Vehicle registration plate
    #[schema(example = "LND-344-XA")]
    vehicle_plate: String,

    /// Driving license number
    license_number: String,

    /// available | busy | offline
    availability: String,

    /// Average rating, 0.00 when unrated
    rating_avg: String,

    /// Number of ratings received
    rating_count: i32,
}

impl From<DriverProfile> for DriverProfileView {
    fn from(d: DriverProfile) -> Self {
        Self {
            id: d.id.to_string(),
            vendor_id: d.vendor_id.map(|id| id.to_string()),
            vehicle_type: d.vehicle_type,
            vehicle_plate: d.vehicle_plate,
            license_number: d.license_number,
            availability: d.availability.as_str().to_string(),
            rating_avg: d.rating_avg.to_string(),
            rating_count: d.rating_count,
        }
    }
}

/// Fetch the caller's driver profile
#[utoipa::path(
    get,
    path = "/api/drivers/me",
    tag = "driver",
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "Own driver profile", body = inline(SuccessResponse<DriverProfileView>)),
        (status = 401, description = "Missing or invalid access token", body = ErrorResponse),
        (status = 403, description = "Driver role required", body = ErrorResponse),
        (status = 404, description = "Driver profile not found", body = ErrorResponse),
    )
)]
#[get("/api/drivers/me")]
pub async fn get_driver_profile_handler(
    driver: DriverUser,
    data: web::Data<AppState>,
) -> impl Responder {
    match data.driver_use_cases.get_profile.execute(driver.user_id).await {
        Ok(profile) => ApiResponse::success(DriverProfileView::from(profile)),

        Err(GetDriverProfileError::NotFound) => {
            ApiResponse::not_found("DRIVER_NOT_FOUND", "Driver profile not found")
        }

        Err(GetDriverProfileError::RepositoryError(ref e)) => {
            error!(error = %e, "Driver profile lookup failed");
            ApiResponse::internal_error()
        }
    }
}
