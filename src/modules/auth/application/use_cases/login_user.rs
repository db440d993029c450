use async_trait::async_trait;
use serde::{Deserialize, Deserializer, Serialize};
use std::sync::Arc;

use crate::auth::application::{
    domain::entities::{AccountStatus, UserRole},
    ports::outgoing::{PasswordHasher, TokenProvider, UserQuery},
};
use email_address::EmailAddress;

// ========================= Login Request =========================

/// Validated login request - deserializable directly from JSON.
#[derive(Debug, Clone)]
pub struct LoginRequest {
    email: String,
    password: String,
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum LoginRequestError {
    #[error("Email cannot be empty")]
    EmptyEmail,

    #[error("Invalid email format")]
    InvalidEmailFormat,

    #[error("Password cannot be empty")]
    EmptyPassword,
}

impl LoginRequest {
    pub fn new(email: String, password: String) -> Result<Self, LoginRequestError> {
        let email = email.trim().to_string();
        if email.is_empty() {
            return Err(LoginRequestError::EmptyEmail);
        }
        if !EmailAddress::is_valid(&email) {
            return Err(LoginRequestError::InvalidEmailFormat);
        }

        let password = password.trim().to_string();
        if password.is_empty() {
            return Err(LoginRequestError::EmptyPassword);
        }

        Ok(Self {
            email: email.to_lowercase(),
            password,
        })
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn password(&self) -> &str {
        &self.password
    }
}

impl<'de> Deserialize<'de> for LoginRequest {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        #[derive(Deserialize)]
        struct LoginRequestHelper {
            email: String,
            password: String,
        }

        let helper = LoginRequestHelper::deserialize(deserializer)?;
        LoginRequest::new(helper.email, helper.password).map_err(serde::de::Error::custom)
    }
}

// ========================= Login Error =========================

#[derive(Debug, Clone)]
pub enum LoginError {
    InvalidCredentials,
    UserDeleted,
    AccountBlocked(AccountStatus),
    PasswordVerificationFailed(String),
    TokenGenerationFailed(String),
    QueryError(String),
}

impl std::fmt::Display for LoginError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LoginError::InvalidCredentials => write!(f, "Invalid email or password"),
            LoginError::UserDeleted => write!(f, "User account has been deleted"),
            LoginError::AccountBlocked(status) => {
                write!(f, "Account is {}", status.as_str())
            }
            LoginError::PasswordVerificationFailed(msg) => {
                write!(f, "Password verification failed: {}", msg)
            }
            LoginError::TokenGenerationFailed(msg) => {
                write!(f, "Token generation failed: {}", msg)
            }
            LoginError::QueryError(msg) => write!(f, "Query error: {}", msg),
        }
    }
}

impl std::error::Error for LoginError {}

// ========================= Login Response =========================

#[derive(Debug, Clone, Serialize)]
pub struct UserInfo {
    pub id: uuid::Uuid,
    pub username: String,
    pub email: String,
    pub role: UserRole,
    pub status: AccountStatus,
}

#[derive(Debug, Clone, Serialize)]
pub struct LoginUserResponse {
    pub access_token: String,
    pub refresh_token: String,
    pub user: UserInfo,
}

// ========================= Use Case =========================

#[async_trait]
pub trait ILoginUserUseCase: Send + Sync {
    async fn execute(&self, request: LoginRequest) -> Result<LoginUserResponse, LoginError>;
}

#[derive(Clone)]
pub struct LoginUserUseCase<Q>
where
    Q: UserQuery + Send + Sync,
{
    query: Q,
    password_hasher: Arc<dyn PasswordHasher + Send + Sync>,
    token_provider: Arc<dyn TokenProvider + Send + Sync>,
}

impl<Q> LoginUserUseCase<Q>
where
    Q: UserQuery + Send + Sync,
{
    pub fn new(
        query: Q,
        password_hasher: Arc<dyn PasswordHasher + Send + Sync>,
        token_provider: Arc<dyn TokenProvider + Send + Sync>,
    ) -> Self {
        Self {
            query,
            password_hasher,
            token_provider,
        }
    }
}

#[async_trait]
impl<Q> ILoginUserUseCase for LoginUserUseCase<Q>
where
    Q: UserQuery + Send + Sync,
{
    async fn execute(&self, request: LoginRequest) -> Result<LoginUserResponse, LoginError> {
        let user = self
            .query
            .find_by_email(request.email())
            .await
            .map_err(|e| LoginError::QueryError(e.to_string()))?
            .ok_or(LoginError::InvalidCredentials)?;

        if user.is_deleted {
            return Err(LoginError::UserDeleted);
        }

        // Pending vendors/drivers may log in to see their approval status;
        // suspended and rejected accounts are refused.
        if !user.status.may_login() {
            return Err(LoginError::AccountBlocked(user.status));
        }

        let is_valid = self
            .password_hasher
            .verify_password(request.password(), &user.password_hash)
            .await
            .map_err(|e| LoginError::PasswordVerificationFailed(e.to_string()))?;

        if !is_valid {
            return Err(LoginError::InvalidCredentials);
        }

        let access_token = self
            .token_provider
            .generate_access_token(user.id, user.role)
            .map_err(|e| LoginError::TokenGenerationFailed(e.to_string()))?;

        let refresh_token = self
            .token_provider
            .generate_refresh_token(user.id, user.role)
            .map_err(|e| LoginError::TokenGenerationFailed(e.to_string()))?;

        Ok(LoginUserResponse {
            access_token,
            refresh_token,
            user: UserInfo {
                id: user.id,
                username: user.username,
                email: user.email,
                role: user.role,
                status: user.status,
            },
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::application::ports::outgoing::{
        PasswordHashError, TokenClaims, TokenError, UserQueryError, UserQueryResult,
    };
    use uuid::Uuid;

    // ==================== LoginRequest ====================

    #[test]
    fn login_request_normalizes_email() {
        let req =
            LoginRequest::new("  Jane@Example.COM ".into(), "password123".into()).unwrap();
        assert_eq!(req.email(), "jane@example.com");
    }

    #[test]
    fn login_request_rejects_empty_password() {
        let res = LoginRequest::new("jane@example.com".into(), "   ".into());
        assert!(matches!(res, Err(LoginRequestError::EmptyPassword)));
    }

    #[test]
    fn login_request_rejects_bad_email() {
        let res = LoginRequest::new("nope".into(), "password123".into());
        assert!(matches!(res, Err(LoginRequestError::InvalidEmailFormat)));
    }

    // ==================== Mocks ====================

    struct MockQuery {
        user: Option<UserQueryResult>,
        fail: bool,
    }

    #[async_trait]
    impl UserQuery for MockQuery {
        async fn find_by_id(
            &self,
            _user_id: Uuid,
        ) -> Result<Option<UserQueryResult>, UserQueryError> {
            Ok(None)
        }

        async fn find_by_email(
            &self,
            email: &str,
        ) -> Result<Option<UserQueryResult>, UserQueryError> {
            if self.fail {
                return Err(UserQueryError::DatabaseError("down".into()));
            }
            Ok(self.user.clone().filter(|u| u.email == email))
        }
    }

    struct MockHasher {
        verify: bool,
    }

    #[async_trait]
    impl PasswordHasher for MockHasher {
        async fn hash_password(&self, _password: &str) -> Result<String, PasswordHashError> {
            Ok("hash".into())
        }

        async fn verify_password(
            &self,
            _password: &str,
            _hash: &str,
        ) -> Result<bool, PasswordHashError> {
            Ok(self.verify)
        }
    }

    struct MockTokens;

    impl TokenProvider for MockTokens {
        fn generate_access_token(
            &self,
            _user_id: Uuid,
            _role: UserRole,
        ) -> Result<String, TokenError> {
            Ok("access".into())
        }

        fn generate_refresh_token(
            &self,
            _user_id: Uuid,
            _role: UserRole,
        ) -> Result<String, TokenError> {
            Ok("refresh".into())
        }

        fn verify_token(&self, _token: &str) -> Result<TokenClaims, TokenError> {
            Err(TokenError::Invalid)
        }

        fn refresh_access_token(&self, _refresh_token: &str) -> Result<String, TokenError> {
            Err(TokenError::Invalid)
        }
    }

    fn test_user(status: AccountStatus, is_deleted: bool) -> UserQueryResult {
        UserQueryResult {
            id: Uuid::new_v4(),
            email: "jane@example.com".into(),
            username: "jane".into(),
            password_hash: "hash".into(),
            full_name: "Jane Doe".into(),
            phone: "+2348012345678".into(),
            role: UserRole::Customer,
            status,
            created_at: chrono::Utc::now(),
            updated_at: chrono::Utc::now(),
            is_deleted,
        }
    }

    fn use_case(
        user: Option<UserQueryResult>,
        fail: bool,
        verify: bool,
    ) -> LoginUserUseCase<MockQuery> {
        LoginUserUseCase::new(
            MockQuery { user, fail },
            Arc::new(MockHasher { verify }),
            Arc::new(MockTokens),
        )
    }

    fn request() -> LoginRequest {
        LoginRequest::new("jane@example.com".into(), "password123".into()).unwrap()
    }

    // ==================== Tests ====================

    #[tokio::test]
    async fn login_succeeds_for_active_user() {
        let uc = use_case(Some(test_user(AccountStatus::Active, false)), false, true);
        let res = uc.execute(request()).await.unwrap();
        assert_eq!(res.access_token, "access");
        assert_eq!(res.user.status, AccountStatus::Active);
    }

    #[tokio::test]
    async fn pending_accounts_may_still_login() {
        let uc = use_case(Some(test_user(AccountStatus::Pending, false)), false, true);
        assert!(uc.execute(request()).await.is_ok());
    }

    #[tokio::test]
    async fn suspended_account_is_blocked() {
        let uc = use_case(Some(test_user(AccountStatus::Suspended, false)), false, true);
        let res = uc.execute(request()).await;
        assert!(matches!(
            res,
            Err(LoginError::AccountBlocked(AccountStatus::Suspended))
        ));
    }

    #[tokio::test]
    async fn rejected_account_is_blocked() {
        let uc = use_case(Some(test_user(AccountStatus::Rejected, false)), false, true);
        let res = uc.execute(request()).await;
        assert!(matches!(
            res,
            Err(LoginError::AccountBlocked(AccountStatus::Rejected))
        ));
    }

    #[tokio::test]
    async fn deleted_account_is_refused() {
        let uc = use_case(Some(test_user(AccountStatus::Active, true)), false, true);
        assert!(matches!(
            uc.execute(request()).await,
            Err(LoginError::UserDeleted)
        ));
    }

    #[tokio::test]
    async fn unknown_email_maps_to_invalid_credentials() {
        let uc = use_case(None, false, true);
        assert!(matches!(
            uc.execute(request()).await,
            Err(LoginError::InvalidCredentials)
        ));
    }

    #[tokio::test]
    async fn wrong_password_maps_to_invalid_credentials() {
        let uc = use_case(Some(test_user(AccountStatus::Active, false)), false, false);
        assert!(matches!(
            uc.execute(request()).await,
            Err(LoginError::InvalidCredentials)
        ));
    }

    #[tokio::test]
    async fn query_failure_surfaces() {
        let uc = use_case(None, true, true);
        assert!(matches!(
            uc.execute(request()).await,
            Err(LoginError::QueryError(_))
        ));
    }
}
