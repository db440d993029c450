use actix_web::{dev::Payload, Error as ActixError, FromRequest, HttpRequest, HttpResponse};
use std::{
    future::{ready, Ready},
    sync::Arc,
};
use uuid::Uuid;

use crate::auth::application::domain::entities::UserRole;
use crate::auth::application::ports::outgoing::token_provider::TokenProvider;
use crate::shared::api::ApiResponse;

/// Any authenticated principal, regardless of role.
#[derive(Debug, Clone)]
pub struct AuthenticatedUser {
    pub user_id: Uuid,
    pub role: UserRole,
}

fn create_api_error(response: HttpResponse) -> ActixError {
    actix_web::error::InternalError::from_response("", response).into()
}

fn extract_token_from_header(req: &HttpRequest) -> Option<String> {
    req.headers()
        .get("Authorization")?
        .to_str()
        .ok()?
        .strip_prefix("Bearer ")
        .map(|s| s.to_string())
}

impl FromRequest for AuthenticatedUser {
    type Error = ActixError;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        let token_provider =
            match req.app_data::<actix_web::web::Data<Arc<dyn TokenProvider + Send + Sync>>>() {
                Some(provider) => provider,
                None => {
                    return ready(Err(create_api_error(ApiResponse::internal_error())));
                }
            };

        let token = match extract_token_from_header(req) {
            Some(t) => t,
            None => {
                return ready(Err(create_api_error(ApiResponse::unauthorized(
                    "MISSING_AUTH_HEADER",
                    "Missing or invalid authorization header",
                ))));
            }
        };

        match token_provider.verify_token(&token) {
            Ok(claims) => {
                if claims.token_type != "access" {
                    return ready(Err(create_api_error(ApiResponse::unauthorized(
                        "INVALID_TOKEN_TYPE",
                        "Invalid token type",
                    ))));
                }

                ready(Ok(AuthenticatedUser {
                    user_id: claims.sub,
                    role: claims.role,
                }))
            }
            Err(_) => ready(Err(create_api_error(ApiResponse::unauthorized(
                "INVALID_TOKEN",
                "Invalid or expired token",
            )))),
        }
    }
}

macro_rules! role_guard {
    ($name:ident, $role:expr, $code:literal, $message:literal) => {
        #[doc = concat!("Principal guaranteed to carry the `", $code, "` role claim.")]
        #[derive(Debug, Clone)]
        pub struct $name {
            pub user_id: Uuid,
        }

        impl FromRequest for $name {
            type Error = ActixError;
            type Future = Ready<Result<Self, Self::Error>>;

            fn from_request(req: &HttpRequest, payload: &mut Payload) -> Self::Future {
                match AuthenticatedUser::from_request(req, payload).into_inner() {
                    Ok(user) if user.role == $role => ready(Ok($name {
                        user_id: user.user_id,
                    })),
                    Ok(_) => ready(Err(create_api_error(ApiResponse::forbidden(
                        "ROLE_REQUIRED",
                        $message,
                    )))),
                    Err(e) => ready(Err(e)),
                }
            }
        }
    };
}

role_guard!(
    CustomerUser,
    UserRole::Customer,
    "customer",
    "Customer role required"
);
role_guard!(DriverUser, UserRole::Driver, "driver", "Driver role required");
role_guard!(VendorUser, UserRole::Vendor, "vendor", "Vendor role required");
role_guard!(AdminUser, UserRole::Admin, "admin", "Admin role required");
