pub mod app_state_builder;
pub mod stubs;

use std::sync::Arc;

use actix_web::web;
use chrono::Utc;
use uuid::Uuid;

use crate::auth::application::domain::entities::UserRole;
use crate::auth::application::ports::outgoing::token_provider::{
    TokenClaims, TokenError, TokenProvider,
};

struct StubTokenProvider {
    user_id: Uuid,
    role: UserRole,
}

impl TokenProvider for StubTokenProvider {
    fn generate_access_token(&self, _user_id: Uuid, _role: UserRole) -> Result<String, TokenError> {
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
            exp: Utc::now().timestamp() + 3600,
            token_type: "access".to_string(),
            role: self.role,
        })
    }

    fn refresh_access_token(&self, _refresh_token: &str) -> Result<String, TokenError> {
        Ok("access".to_string())
    }
}

/// Token provider app data whose verification always yields the given role.
pub fn token_provider(role: UserRole) -> web::Data<Arc<dyn TokenProvider + Send + Sync>> {
    web::Data::new(Arc::new(StubTokenProvider {
        user_id: Uuid::new_v4(),
        role,
    }) as Arc<dyn TokenProvider + Send + Sync>)
}
