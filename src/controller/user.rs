use axum::{
    extract::{Path, State},
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
    Json,
};

use crate::{
    error::AppError,
    middleware::auth::AuthGuard,
    model::{
        api::{ErrorDto, MessageDto, ValidationErrorDto},
        user::{CreateUserDto, UpdateUserDto, UserDto},
    },
    service::user::UserService,
    state::AppState,
};

pub static USER_TAG: &str = "users";

/// GET /users - List all user accounts
///
/// Returns every account ordered by email. Password hashes never leave the
/// service layer.
///
/// # Authentication
/// Requires a valid bearer token
///
/// # Returns
/// - `200 OK`: JSON array of UserDto
/// - `401 Unauthorized`: Missing or invalid token
/// - `500 Internal Server Error`: Database error
#[utoipa::path(
    get,
    path = "/users",
    tag = USER_TAG,
    responses(
        (status = 200, description = "All user accounts", body = [UserDto]),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_all_users(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<impl IntoResponse, AppError> {
    let auth_guard = AuthGuard::new(&state.db, &state.tokens, &headers);
    auth_guard.require(&[]).await?;

    let user_service = UserService::new(&state.db);
    let users = user_service.get_all().await?;

    let users_dto: Vec<UserDto> = users.into_iter().map(|u| u.into_dto()).collect();

    Ok((StatusCode::OK, Json(users_dto)))
}

/// POST /users - Register a new user account
///
/// Registration is open: no token is required, and the account is created
/// with the regular user role so role escalation is not possible through
/// this endpoint. The email must not already be registered.
///
/// # Returns
/// - `201 Created`: The created account
/// - `400 Bad Request`: Validation failures, all violations listed
/// - `409 Conflict`: Email already registered
/// - `500 Internal Server Error`: Database or hashing error
#[utoipa::path(
    post,
    path = "/users",
    tag = USER_TAG,
    request_body = CreateUserDto,
    responses(
        (status = 201, description = "Account created", body = UserDto),
        (status = 400, description = "Invalid account data", body = ValidationErrorDto),
        (status = 409, description = "Email already registered", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_user(
    State(state): State<AppState>,
    Json(payload): Json<CreateUserDto>,
) -> Result<impl IntoResponse, AppError> {
    let user_service = UserService::new(&state.db);
    let user = user_service.register(payload).await?;

    Ok((StatusCode::CREATED, Json(user.into_dto())))
}

/// GET /users/{email} - Fetch one account by email
///
/// # Authentication
/// Requires a valid bearer token
///
/// # Path Parameters
/// - `email`: Email of the account
///
/// # Returns
/// - `200 OK`: The account
/// - `401 Unauthorized`: Missing or invalid token
/// - `404 Not Found`: No account with that email
/// - `500 Internal Server Error`: Database error
#[utoipa::path(
    get,
    path = "/users/{email}",
    tag = USER_TAG,
    params(
        ("email" = String, Path, description = "Email of the account")
    ),
    responses(
        (status = 200, description = "The account", body = UserDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 404, description = "User not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_user(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(email): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let auth_guard = AuthGuard::new(&state.db, &state.tokens, &headers);
    auth_guard.require(&[]).await?;

    let user_service = UserService::new(&state.db);
    let user = user_service.get_by_email(&email).await?;

    Ok((StatusCode::OK, Json(user.into_dto())))
}

/// PUT /users/{email} - Update an account
///
/// Applies the supplied fields only. A new password is re-hashed; a new
/// email must not belong to another account.
///
/// # Authentication
/// Requires a valid bearer token
///
/// # Path Parameters
/// - `email`: Email of the account to update
///
/// # Returns
/// - `200 OK`: The updated account
/// - `400 Bad Request`: Validation failures, all violations listed
/// - `401 Unauthorized`: Missing or invalid token
/// - `404 Not Found`: No account with that email
/// - `409 Conflict`: New email already registered
/// - `500 Internal Server Error`: Database or hashing error
#[utoipa::path(
    put,
    path = "/users/{email}",
    tag = USER_TAG,
    params(
        ("email" = String, Path, description = "Email of the account to update")
    ),
    request_body = UpdateUserDto,
    responses(
        (status = 200, description = "Account updated", body = UserDto),
        (status = 400, description = "Invalid account data", body = ValidationErrorDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 404, description = "User not found", body = ErrorDto),
        (status = 409, description = "Email already registered", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_user(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(email): Path<String>,
    Json(payload): Json<UpdateUserDto>,
) -> Result<impl IntoResponse, AppError> {
    let auth_guard = AuthGuard::new(&state.db, &state.tokens, &headers);
    auth_guard.require(&[]).await?;

    let user_service = UserService::new(&state.db);
    let user = user_service.update(&email, payload).await?;

    Ok((StatusCode::OK, Json(user.into_dto())))
}

/// DELETE /users/{email} - Delete an account
///
/// Admins may delete any account; a regular user only their own.
///
/// # Authentication
/// Requires a valid bearer token
///
/// # Path Parameters
/// - `email`: Email of the account to delete
///
/// # Returns
/// - `200 OK`: Confirmation message
/// - `401 Unauthorized`: Missing or invalid token
/// - `403 Forbidden`: Actor may not delete this account
/// - `404 Not Found`: No account with that email
/// - `500 Internal Server Error`: Database error
#[utoipa::path(
    delete,
    path = "/users/{email}",
    tag = USER_TAG,
    params(
        ("email" = String, Path, description = "Email of the account to delete")
    ),
    responses(
        (status = 200, description = "Account deleted", body = MessageDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Not authorized", body = ErrorDto),
        (status = 404, description = "User not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_user(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(email): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let auth_guard = AuthGuard::new(&state.db, &state.tokens, &headers);
    let actor = auth_guard.require(&[]).await?;

    let user_service = UserService::new(&state.db);
    user_service.delete(&email, &actor).await?;

    Ok((
        StatusCode::OK,
        Json(MessageDto {
            message: "User deleted".to_string(),
        }),
    ))
}
