use async_trait::async_trait;
use serde::{Deserialize, Deserializer};
use std::sync::Arc;

use crate::auth::application::{
    domain::entities::{AccountStatus, UserRole},
    ports::outgoing::{
        CreateUserData, PasswordHasher, UserRepository, UserRepositoryError, UserResult,
    },
};
use email_address::EmailAddress;

// ========================= Register Request =========================

/// Validated registration request. Construction guarantees a well-formed
/// email, a username within bounds, a policy-compliant password and a
/// non-admin role.
#[derive(Debug, Clone)]
pub struct RegisterRequest {
    email: String,
    username: String,
    password: String,
    full_name: String,
    phone: String,
    role: UserRole,
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum RegisterRequestError {
    #[error("Invalid email format")]
    InvalidEmail,

    #[error("Username must be 3-50 characters, alphanumeric or underscore")]
    InvalidUsername,

    #[error("Password must be at least 8 characters with a letter and a digit")]
    WeakPassword,

    #[error("Full name cannot be empty")]
    EmptyFullName,

    #[error("Invalid phone number")]
    InvalidPhone,

    #[error("Admin accounts cannot be self-registered")]
    AdminNotAllowed,
}

impl RegisterRequest {
    pub fn new(
        email: String,
        username: String,
        password: String,
        full_name: String,
        phone: String,
        role: UserRole,
    ) -> Result<Self, RegisterRequestError> {
        let email = email.trim().to_lowercase();
        if !EmailAddress::is_valid(&email) {
            return Err(RegisterRequestError::InvalidEmail);
        }

        let username = username.trim().to_string();
        let username_re = regex::Regex::new(r"^[A-Za-z0-9_]{3,50}$").unwrap();
        if !username_re.is_match(&username) {
            return Err(RegisterRequestError::InvalidUsername);
        }

        if password.len() < 8
            || !password.chars().any(|c| c.is_ascii_alphabetic())
            || !password.chars().any(|c| c.is_ascii_digit())
        {
            return Err(RegisterRequestError::WeakPassword);
        }

        let full_name = full_name.trim().to_string();
        if full_name.is_empty() {
            return Err(RegisterRequestError::EmptyFullName);
        }

        let phone = phone.trim().to_string();
        let phone_re = regex::Regex::new(r"^\+?[0-9][0-9 \-]{6,20}$").unwrap();
        if !phone_re.is_match(&phone) {
            return Err(RegisterRequestError::InvalidPhone);
        }

        if role == UserRole::Admin {
            return Err(RegisterRequestError::AdminNotAllowed);
        }

        Ok(Self {
            email,
            username,
            password,
            full_name,
            phone,
            role,
        })
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn username(&self) -> &str {
        &self.username
    }

    pub fn password(&self) -> &str {
        &self.password
    }

    pub fn role(&self) -> UserRole {
        self.role
    }

    /// Customers are live immediately; vendor and driver accounts wait for
    /// admin approval.
    pub fn initial_status(&self) -> AccountStatus {
        match self.role {
            UserRole::Customer => AccountStatus::Active,
            _ => AccountStatus::Pending,
        }
    }
}

impl<'de> Deserialize<'de> for RegisterRequest {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        #[derive(Deserialize)]
        struct RegisterRequestHelper {
            email: String,
            username: String,
            password: String,
            full_name: String,
            phone: String,
            role: UserRole,
        }

        let helper = RegisterRequestHelper::deserialize(deserializer)?;
        RegisterRequest::new(
            helper.email,
            helper.username,
            helper.password,
            helper.full_name,
            helper.phone,
            helper.role,
        )
        .map_err(serde::de::Error::custom)
    }
}

// ========================= Register Error =========================

#[derive(Debug, Clone, thiserror::Error)]
pub enum RegisterError {
    #[error("Email or username already in use")]
    AlreadyRegistered,

    #[error("Password hashing failed: {0}")]
    HashingFailed(String),

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

// ========================= Use Case =========================

#[async_trait]
pub trait IRegisterUserUseCase: Send + Sync {
    async fn execute(&self, request: RegisterRequest) -> Result<UserResult, RegisterError>;
}

#[derive(Clone)]
pub struct RegisterUserUseCase<R>
where
    R: UserRepository + Send + Sync,
{
    repository: R,
    password_hasher: Arc<dyn PasswordHasher + Send + Sync>,
}

impl<R> RegisterUserUseCase<R>
where
    R: UserRepository + Send + Sync,
{
    pub fn new(repository: R, password_hasher: Arc<dyn PasswordHasher + Send + Sync>) -> Self {
        Self {
            repository,
            password_hasher,
        }
    }
}

#[async_trait]
impl<R> IRegisterUserUseCase for RegisterUserUseCase<R>
where
    R: UserRepository + Send + Sync,
{
    async fn execute(&self, request: RegisterRequest) -> Result<UserResult, RegisterError> {
        let password_hash = self
            .password_hasher
            .hash_password(request.password())
            .await
            .map_err(|e| RegisterError::HashingFailed(e.to_string()))?;

        let status = request.initial_status();
        let data = CreateUserData {
            username: request.username.clone(),
            email: request.email.clone(),
            password_hash,
            full_name: request.full_name.clone(),
            phone: request.phone.clone(),
            role: request.role,
            status,
        };

        self.repository.create_user(data).await.map_err(|e| match e {
            UserRepositoryError::UserAlreadyExists => RegisterError::AlreadyRegistered,
            other => RegisterError::RepositoryError(other.to_string()),
        })
    }
}
