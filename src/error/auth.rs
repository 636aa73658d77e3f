use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::model::api::ErrorDto;

#[derive(Error, Debug)]
pub enum AuthError {
    /// No bearer token was supplied in the Authorization header.
    ///
    /// Results in a 401 Unauthorized response.
    #[error("Missing bearer token")]
    MissingToken,

    /// The bearer token failed signature verification or is malformed.
    ///
    /// Results in a 401 Unauthorized response.
    #[error("Invalid bearer token")]
    InvalidToken,

    /// The bearer token signature is valid but the token has expired.
    ///
    /// Results in a 401 Unauthorized response.
    #[error("Expired bearer token")]
    TokenExpired,

    /// The token resolved to a user id that no longer exists.
    ///
    /// Results in a 401 Unauthorized response.
    #[error("Token refers to unknown user {0}")]
    UnknownUser(i32),

    /// Login was attempted with an unknown email or a wrong password.
    ///
    /// The two cases are indistinguishable to the caller. Results in a
    /// 401 Unauthorized response.
    #[error("Invalid credentials")]
    InvalidCredentials,

    /// The authenticated user lacks the required permission.
    ///
    /// Results in a 403 Forbidden response. The message is logged but the
    /// client only sees a generic body.
    #[error("Access denied for user {0}: {1}")]
    AccessDenied(i32, String),
}

/// Converts authentication errors into HTTP responses.
///
/// Every token failure maps to the same 401 body regardless of whether the
/// token was missing, malformed, expired, or orphaned, so the response never
/// reveals which part of the check failed. Credential failures likewise share
/// one body for unknown email and wrong password.
///
/// # Returns
/// - 401 Unauthorized - For all token and credential failures
/// - 403 Forbidden - For permission failures of an authenticated user
impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        match self {
            Self::MissingToken | Self::InvalidToken | Self::TokenExpired | Self::UnknownUser(_) => {
                tracing::debug!("Authentication failure: {}", self);
                (
                    StatusCode::UNAUTHORIZED,
                    Json(ErrorDto {
                        error: "Please authenticate".to_string(),
                    }),
                )
                    .into_response()
            }
            Self::InvalidCredentials => (
                StatusCode::UNAUTHORIZED,
                Json(ErrorDto {
                    error: "Invalid credentials".to_string(),
                }),
            )
                .into_response(),
            Self::AccessDenied(user_id, reason) => {
                tracing::debug!("Access denied for user {}: {}", user_id, reason);
                (
                    StatusCode::FORBIDDEN,
                    Json(ErrorDto {
                        error: "Not authorized".to_string(),
                    }),
                )
                    .into_response()
            }
        }
    }
}
