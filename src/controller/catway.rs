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
        catway::{CatwayDto, CreateCatwayDto, UpdateCatwayDto},
    },
    service::catway::CatwayService,
    state::AppState,
};

pub static CATWAY_TAG: &str = "catways";

/// GET /catways - List all catways
///
/// Returns every catway ordered by catway number.
///
/// # Authentication
/// Requires a valid bearer token
///
/// # Returns
/// - `200 OK`: JSON array of CatwayDto
/// - `401 Unauthorized`: Missing or invalid token
/// - `500 Internal Server Error`: Database error
#[utoipa::path(
    get,
    path = "/catways",
    tag = CATWAY_TAG,
    responses(
        (status = 200, description = "All catways", body = [CatwayDto]),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_all_catways(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<impl IntoResponse, AppError> {
    let auth_guard = AuthGuard::new(&state.db, &state.tokens, &headers);
    auth_guard.require(&[]).await?;

    let catway_service = CatwayService::new(&state.db);
    let catways = catway_service.get_all().await?;

    let catways_dto: Vec<CatwayDto> = catways.into_iter().map(|c| c.into_dto()).collect();

    Ok((StatusCode::OK, Json(catways_dto)))
}

/// POST /catways - Create a catway
///
/// The catway number is the business identity and must be unused; the type
/// must be one of the accepted tokens and is fixed after creation.
///
/// # Authentication
/// Requires a valid bearer token
///
/// # Returns
/// - `201 Created`: The created catway
/// - `400 Bad Request`: Validation failures, all violations listed
/// - `401 Unauthorized`: Missing or invalid token
/// - `409 Conflict`: Catway number already in use
/// - `500 Internal Server Error`: Database error
#[utoipa::path(
    post,
    path = "/catways",
    tag = CATWAY_TAG,
    request_body = CreateCatwayDto,
    responses(
        (status = 201, description = "Catway created", body = CatwayDto),
        (status = 400, description = "Invalid catway data", body = ValidationErrorDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 409, description = "Catway number already in use", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_catway(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(payload): Json<CreateCatwayDto>,
) -> Result<impl IntoResponse, AppError> {
    let auth_guard = AuthGuard::new(&state.db, &state.tokens, &headers);
    auth_guard.require(&[]).await?;

    let catway_service = CatwayService::new(&state.db);
    let catway = catway_service.create(payload).await?;

    Ok((StatusCode::CREATED, Json(catway.into_dto())))
}

/// GET /catways/{catway_number} - Fetch one catway
///
/// # Authentication
/// Requires a valid bearer token
///
/// # Path Parameters
/// - `catway_number`: Business number of the catway
///
/// # Returns
/// - `200 OK`: The catway
/// - `401 Unauthorized`: Missing or invalid token
/// - `404 Not Found`: No catway with that number
/// - `500 Internal Server Error`: Database error
#[utoipa::path(
    get,
    path = "/catways/{catway_number}",
    tag = CATWAY_TAG,
    params(
        ("catway_number" = i32, Path, description = "Business number of the catway")
    ),
    responses(
        (status = 200, description = "The catway", body = CatwayDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 404, description = "Catway not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_catway(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(catway_number): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let auth_guard = AuthGuard::new(&state.db, &state.tokens, &headers);
    auth_guard.require(&[]).await?;

    let catway_service = CatwayService::new(&state.db);
    let catway = catway_service.get_by_number(catway_number).await?;

    Ok((StatusCode::OK, Json(catway.into_dto())))
}

/// PUT /catways/{catway_number} - Update the state of a catway
///
/// The state description is the only mutable field; number and type are
/// fixed for the lifetime of the catway.
///
/// # Authentication
/// Requires a valid bearer token
///
/// # Path Parameters
/// - `catway_number`: Business number of the catway to update
///
/// # Returns
/// - `200 OK`: The updated catway
/// - `400 Bad Request`: Blank state
/// - `401 Unauthorized`: Missing or invalid token
/// - `404 Not Found`: No catway with that number
/// - `500 Internal Server Error`: Database error
#[utoipa::path(
    put,
    path = "/catways/{catway_number}",
    tag = CATWAY_TAG,
    params(
        ("catway_number" = i32, Path, description = "Business number of the catway to update")
    ),
    request_body = UpdateCatwayDto,
    responses(
        (status = 200, description = "Catway updated", body = CatwayDto),
        (status = 400, description = "Invalid catway data", body = ValidationErrorDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 404, description = "Catway not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_catway(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(catway_number): Path<i32>,
    Json(payload): Json<UpdateCatwayDto>,
) -> Result<impl IntoResponse, AppError> {
    let auth_guard = AuthGuard::new(&state.db, &state.tokens, &headers);
    auth_guard.require(&[]).await?;

    let catway_service = CatwayService::new(&state.db);
    let catway = catway_service.update_state(catway_number, payload).await?;

    Ok((StatusCode::OK, Json(catway.into_dto())))
}

/// DELETE /catways/{catway_number} - Delete a catway
///
/// Refused while reservations still reference the catway, so bookings never
/// point at a berth that no longer exists.
///
/// # Authentication
/// Requires a valid bearer token
///
/// # Path Parameters
/// - `catway_number`: Business number of the catway to delete
///
/// # Returns
/// - `200 OK`: Confirmation message
/// - `401 Unauthorized`: Missing or invalid token
/// - `404 Not Found`: No catway with that number
/// - `409 Conflict`: Reservations still reference the catway
/// - `500 Internal Server Error`: Database error
#[utoipa::path(
    delete,
    path = "/catways/{catway_number}",
    tag = CATWAY_TAG,
    params(
        ("catway_number" = i32, Path, description = "Business number of the catway to delete")
    ),
    responses(
        (status = 200, description = "Catway deleted", body = MessageDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 404, description = "Catway not found", body = ErrorDto),
        (status = 409, description = "Catway still has reservations", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_catway(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(catway_number): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let auth_guard = AuthGuard::new(&state.db, &state.tokens, &headers);
    auth_guard.require(&[]).await?;

    let catway_service = CatwayService::new(&state.db);
    catway_service.delete(catway_number).await?;

    Ok((
        StatusCode::OK,
        Json(MessageDto {
            message: "Catway deleted".to_string(),
        }),
    ))
}
