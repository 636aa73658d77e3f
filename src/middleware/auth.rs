//! Bearer token authentication guard.
//!
//! Handlers call `AuthGuard::new(...).require(&[...])` as their first step.
//! The guard extracts the bearer token from the Authorization header,
//! verifies its signature and expiry, and loads the user it names. A token
//! for a deleted account fails like any other bad token.

use axum::http::{header::AUTHORIZATION, HeaderMap};
use sea_orm::DatabaseConnection;

use crate::{
    data::user::UserRepository,
    error::{auth::AuthError, AppError},
    model::user::{Role, User},
    service::token::TokenService,
};

pub enum Permission {
    Admin,
}

pub struct AuthGuard<'a> {
    db: &'a DatabaseConnection,
    tokens: &'a TokenService,
    headers: &'a HeaderMap,
}

impl<'a> AuthGuard<'a> {
    pub fn new(db: &'a DatabaseConnection, tokens: &'a TokenService, headers: &'a HeaderMap) -> Self {
        Self {
            db,
            tokens,
            headers,
        }
    }

    /// Pulls the token out of `Authorization: Bearer <token>`.
    fn bearer_token(&self) -> Result<&str, AuthError> {
        let header = self
            .headers
            .get(AUTHORIZATION)
            .ok_or(AuthError::MissingToken)?;

        let value = header.to_str().map_err(|_| AuthError::InvalidToken)?;

        value
            .strip_prefix("Bearer ")
            .map(str::trim)
            .filter(|token| !token.is_empty())
            .ok_or(AuthError::InvalidToken)
    }

    /// Authenticates the request and checks the required permissions.
    ///
    /// # Arguments
    /// - `permissions` - Permissions the caller must hold, all of them
    ///
    /// # Returns
    /// - `Ok(User)` - The authenticated user
    /// - `Err(AuthError::MissingToken)` - No Authorization header
    /// - `Err(AuthError::InvalidToken)` - Malformed header or bad signature
    /// - `Err(AuthError::TokenExpired)` - Signature valid, token expired
    /// - `Err(AuthError::UnknownUser)` - Token names a deleted account
    /// - `Err(AuthError::AccessDenied)` - Authenticated but missing a permission
    pub async fn require(&self, permissions: &[Permission]) -> Result<User, AppError> {
        let token = self.bearer_token()?;
        let user_id = self.tokens.verify(token)?;

        let user_repo = UserRepository::new(self.db);
        let Some(user) = user_repo.find_by_id(user_id).await? else {
            return Err(AuthError::UnknownUser(user_id).into());
        };

        for permission in permissions {
            match permission {
                Permission::Admin => {
                    if user.role != Role::Admin {
                        return Err(AuthError::AccessDenied(
                            user_id,
                            "admin permission required".to_string(),
                        )
                        .into());
                    }
                }
            }
        }

        Ok(user)
    }
}
