use axum::{
    extract::State,
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
    Json,
};

use crate::{
    error::AppError,
    middleware::auth::AuthGuard,
    model::{
        api::{ErrorDto, MessageDto, ValidationErrorDto},
        user::{LoginDto, LoginResponseDto, LoginUserDto},
    },
    service::user::UserService,
    state::AppState,
};

pub static AUTH_TAG: &str = "auth";

/// POST /auth/login - Exchange credentials for a bearer token
///
/// Authenticates the supplied email and password and returns a signed token
/// plus the identity it grants. Unknown email and wrong password are
/// indistinguishable in the response.
///
/// # Returns
/// - `200 OK`: Token and user identity
/// - `400 Bad Request`: Malformed credentials, all violations listed
/// - `401 Unauthorized`: Unknown email or wrong password
/// - `500 Internal Server Error`: Database or hashing error
#[utoipa::path(
    post,
    path = "/auth/login",
    tag = AUTH_TAG,
    request_body = LoginDto,
    responses(
        (status = 200, description = "Successfully authenticated", body = LoginResponseDto),
        (status = 400, description = "Malformed credentials", body = ValidationErrorDto),
        (status = 401, description = "Invalid credentials", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn login(
    State(state): State<AppState>,
    Json(payload): Json<LoginDto>,
) -> Result<impl IntoResponse, AppError> {
    let user_service = UserService::new(&state.db);
    let (token, user) = user_service.login(payload, &state.tokens).await?;

    Ok((
        StatusCode::OK,
        Json(LoginResponseDto {
            token,
            user: LoginUserDto {
                email: user.email,
                role: user.role.as_str().to_string(),
            },
        }),
    ))
}

/// GET /auth/logout - End the session
///
/// Tokens are stateless and cannot be revoked server-side; the endpoint
/// exists so clients have a uniform logout call and simply confirms that the
/// client should discard its token.
///
/// # Authentication
/// Requires a valid bearer token
///
/// # Returns
/// - `200 OK`: Confirmation message
/// - `401 Unauthorized`: Missing or invalid token
#[utoipa::path(
    get,
    path = "/auth/logout",
    tag = AUTH_TAG,
    responses(
        (status = 200, description = "Logged out", body = MessageDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
    ),
)]
pub async fn logout(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<impl IntoResponse, AppError> {
    let auth_guard = AuthGuard::new(&state.db, &state.tokens, &headers);
    auth_guard.require(&[]).await?;

    Ok((
        StatusCode::OK,
        Json(MessageDto {
            message: "Logged out".to_string(),
        }),
    ))
}
