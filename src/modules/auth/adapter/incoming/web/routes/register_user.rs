use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::auth::application::domain::entities::UserRole;
use crate::auth::application::use_cases::register_user::{
    RegisterError, RegisterRequest, RegisterRequestError,
};
use crate::shared::api::ApiResponse;
use crate::AppState;
use actix_web::{post, web, HttpResponse, Responder};
use serde::{Deserialize, Serialize};
use tracing::{error, info, warn};
use utoipa::ToSchema;

/// Request body for account registration
#[derive(Serialize, Deserialize, ToSchema)]
pub struct RegisterUserDto {
    /// Email address
    #[schema(example = "amina@example.com")]
    pub email: String,

    /// Username (unique identifier)
    #[schema(example = "amina_k")]
    pub username: String,

    /// Password (minimum 8 characters, at least one letter and one digit)
    #[schema(example = "SecurePass123")]
    pub password: String,

    /// Full name
    #[schema(example = "Amina Kareem")]
    pub full_name: String,

    /// Phone number
    #[schema(example = "+2348012345678")]
    pub phone: String,

    /// Account role: customer, driver or vendor
    #[schema(example = "customer")]
    pub role: UserRole,
}

#[derive(Serialize, ToSchema)]
pub struct RegisterUserResponse {
    /// Created account details
    pub user: RegisteredUser,
}

#[derive(Serialize, ToSchema)]
pub struct RegisteredUser {
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

    /// Account role
    #[schema(example = "customer")]
    role: String,

    /// Account status after registration: customers start active, vendor
    /// and driver accounts start pending
    #[schema(example = "active")]
    status: String,
}

fn map_validation_error(err: RegisterRequestError, dto: &RegisterUserDto) -> HttpResponse {
    warn!(
        username = %dto.username,
        email = %dto.email,
        error = %err,
        "Invalid registration input"
    );

    let code = match err {
        RegisterRequestError::InvalidEmail => "INVALID_EMAIL",
        RegisterRequestError::InvalidUsername => "INVALID_USERNAME",
        RegisterRequestError::WeakPassword => "INVALID_PASSWORD",
        RegisterRequestError::EmptyFullName => "INVALID_FULL_NAME",
        RegisterRequestError::InvalidPhone => "INVALID_PHONE",
        RegisterRequestError::AdminNotAllowed => "ROLE_NOT_ALLOWED",
    };

    ApiResponse::bad_request(code, &err.to_string())
}

/// Register a new account
///
/// Creates a customer, driver or vendor account. Customer accounts are
/// active immediately; driver and vendor accounts wait for admin approval.
#[utoipa::path(
    post,
    path = "/api/auth/register",
    tag = "auth",
    request_body = RegisterUserDto,
    responses(
        (
            status = 201,
            description = "Account created",
            body = inline(SuccessResponse<RegisterUserResponse>),
            example = json!({
                "success": true,
                "data": {
                    "user": {
                        "id": "123e4567-e89b-12d3-a456-426614174000",
                        "username": "amina_k",
                        "email": "amina@example.com",
                        "full_name": "Amina Kareem",
                        "role": "customer",
                        "status": "active"
                    }
                }
            })
        ),
        (
            status = 400,
            description = "Validation error",
            body = ErrorResponse,
            examples(
                ("Invalid email" = (value = json!({
                    "success": false,
                    "error": {
                        "code": "INVALID_EMAIL",
                        "message": "Invalid email format"
                    }
                }))),
                ("Weak password" = (value = json!({
                    "success": false,
                    "error": {
                        "code": "INVALID_PASSWORD",
                        "message": "Password must be at least 8 characters with a letter and a digit"
                    }
                }))),
                ("Admin role" = (value = json!({
                    "success": false,
                    "error": {
                        "code": "ROLE_NOT_ALLOWED",
                        "message": "Admin accounts cannot be self-registered"
                    }
                })))
            )
        ),
        (
            status = 409,
            description = "Email or username already in use",
            body = ErrorResponse,
            example = json!({
                "success": false,
                "error": {
                    "code": "ALREADY_REGISTERED",
                    "message": "Email or username already in use"
                }
            })
        ),
        (
            status = 500,
            description = "Internal server error",
            body = ErrorResponse,
            example = json!({
                "success": false,
                "error": {
                    "code": "INTERNAL_ERROR",
                    "message": "An unexpected error occurred"
                }
            })
        ),
    )
)]
#[post("/api/auth/register")]
pub async fn register_user_handler(
    req: web::Json<RegisterUserDto>,
    data: web::Data<AppState>,
) -> impl Responder {
    let use_case = &data.register_user_use_case;
    let dto = req.into_inner();

    info!(
        username = %dto.username,
        email = %dto.email,
        role = %dto.role.as_str(),
        "Registration attempt"
    );

    let request = match RegisterRequest::new(
        dto.email.clone(),
        dto.username.clone(),
        dto.password.clone(),
        dto.full_name.clone(),
        dto.phone.clone(),
        dto.role,
    ) {
        Ok(req) => req,
        Err(e) => return map_validation_error(e, &dto),
    };

    match use_case.execute(request).await {
        Ok(user) => {
            info!(
                user_id = %user.id,
                username = %user.username,
                role = %user.role.as_str(),
                status = %user.status.as_str(),
                "Account created"
            );

            ApiResponse::created(RegisterUserResponse {
                user: RegisteredUser {
                    id: user.id.to_string(),
                    username: user.username,
                    email: user.email,
                    full_name: user.full_name,
                    role: user.role.as_str().to_string(),
                    status: user.status.as_str().to_string(),
                },
            })
        }

        Err(RegisterError::AlreadyRegistered) => {
            warn!(email = %dto.email, "Registration rejected: already registered");
            ApiResponse::conflict("ALREADY_REGISTERED", "Email or username already in use")
        }

        Err(RegisterError::HashingFailed(ref e)) => {
            error!(error = %e, "Password hashing failed");
            ApiResponse::internal_error()
        }

        Err(RegisterError::RepositoryError(ref e)) => {
            error!(error = %e, "User creation failed");
            ApiResponse::internal_error()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::application::domain::entities::AccountStatus;
    use crate::auth::application::ports::outgoing::UserResult;
    use crate::auth::application::use_cases::register_user::IRegisterUserUseCase;
    use crate::tests::support::app_state_builder::TestAppStateBuilder;
    use actix_web::{test, App};
    use async_trait::async_trait;
    use uuid::Uuid;

    #[derive(Clone)]
    struct MockRegisterSuccess;

    #[async_trait]
    impl IRegisterUserUseCase for MockRegisterSuccess {
        async fn execute(&self, request: RegisterRequest) -> Result<UserResult, RegisterError> {
            let status = request.initial_status();
            Ok(UserResult {
                id: Uuid::new_v4(),
                username: request.username().to_string(),
                email: request.email().to_string(),
                full_name: "Test User".to_string(),
                role: request.role(),
                status,
            })
        }
    }

    #[derive(Clone)]
    struct MockRegisterAlreadyExists;

    #[async_trait]
    impl IRegisterUserUseCase for MockRegisterAlreadyExists {
        async fn execute(&self, _: RegisterRequest) -> Result<UserResult, RegisterError> {
            Err(RegisterError::AlreadyRegistered)
        }
    }

    #[derive(Clone)]
    struct MockRegisterRepoError;

    #[async_trait]
    impl IRegisterUserUseCase for MockRegisterRepoError {
        async fn execute(&self, _: RegisterRequest) -> Result<UserResult, RegisterError> {
            Err(RegisterError::RepositoryError("connection lost".to_string()))
        }
    }

    fn request_json(role: &str) -> serde_json::Value {
        serde_json::json!({
            "email": "test@example.com",
            "username": "testuser",
            "password": "SecurePass123",
            "full_name": "Test User",
            "phone": "+2348012345678",
            "role": role
        })
    }

    #[actix_web::test]
    async fn test_register_customer_is_active() {
        let app_state = TestAppStateBuilder::default()
            .with_register_user(MockRegisterSuccess)
            .build();

        let app = test::init_service(
            App::new()
                .app_data(app_state)
                .service(register_user_handler),
        )
        .await;

        let req = test::TestRequest::post()
            .uri("/api/auth/register")
            .set_json(request_json("customer"))
            .to_request();

        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), 201);

        let body: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(body["success"], true);
        assert_eq!(body["data"]["user"]["role"], "customer");
        assert_eq!(body["data"]["user"]["status"], "active");
        assert!(body.get("error").is_none());
    }

    #[actix_web::test]
    async fn test_register_vendor_is_pending() {
        let app_state = TestAppStateBuilder::default()
            .with_register_user(MockRegisterSuccess)
            .build();

        let app = test::init_service(
            App::new()
                .app_data(app_state)
                .service(register_user_handler),
        )
        .await;

        let req = test::TestRequest::post()
            .uri("/api/auth/register")
            .set_json(request_json("vendor"))
            .to_request();

        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), 201);

        let body: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(body["data"]["user"]["status"], "pending");
    }

    #[actix_web::test]
    async fn test_register_admin_is_rejected() {
        let app_state = TestAppStateBuilder::default()
            .with_register_user(MockRegisterSuccess)
            .build();

        let app = test::init_service(
            App::new()
                .app_data(app_state)
                .app_data(crate::shared::api::custom_json_config())
                .service(register_user_handler),
        )
        .await;

        let req = test::TestRequest::post()
            .uri("/api/auth/register")
            .set_json(request_json("admin"))
            .to_request();

        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), 400);

        let body: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(body["success"], false);
        assert_eq!(body["error"]["code"], "ROLE_NOT_ALLOWED");
    }

    #[actix_web::test]
    async fn test_register_weak_password() {
        let app_state = TestAppStateBuilder::default()
            .with_register_user(MockRegisterSuccess)
            .build();

        let app = test::init_service(
            App::new()
                .app_data(app_state)
                .service(register_user_handler),
        )
        .await;

        let req = test::TestRequest::post()
            .uri("/api/auth/register")
            .set_json(serde_json::json!({
                "email": "test@example.com",
                "username": "testuser",
                "password": "short1",
                "full_name": "Test User",
                "phone": "+2348012345678",
                "role": "customer"
            }))
            .to_request();

        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), 400);

        let body: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(body["error"]["code"], "INVALID_PASSWORD");
    }

    #[actix_web::test]
    async fn test_register_duplicate_conflict() {
        let app_state = TestAppStateBuilder::default()
            .with_register_user(MockRegisterAlreadyExists)
            .build();

        let app = test::init_service(
            App::new()
                .app_data(app_state)
                .service(register_user_handler),
        )
        .await;

        let req = test::TestRequest::post()
            .uri("/api/auth/register")
            .set_json(request_json("customer"))
            .to_request();

        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), 409);

        let body: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(body["error"]["code"], "ALREADY_REGISTERED");
    }

    #[actix_web::test]
    async fn test_register_repository_error() {
        let app_state = TestAppStateBuilder::default()
            .with_register_user(MockRegisterRepoError)
            .build();

        let app = test::init_service(
            App::new()
                .app_data(app_state)
                .service(register_user_handler),
        )
        .await;

        let req = test::TestRequest::post()
            .uri("/api/auth/register")
            .set_json(request_json("customer"))
            .to_request();

        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), 500);

        let body: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(body["error"]["code"], "INTERNAL_ERROR");
    }
}
