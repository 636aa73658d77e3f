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
        reservation::{CreateReservationDto, ReservationDto, UpdateReservationDto},
    },
    service::reservation::ReservationService,
    state::AppState,
};

pub static RESERVATION_TAG: &str = "reservations";

/// GET /reservations - List all reservations
///
/// Returns every reservation across all catways, ordered by start date.
///
/// # Authentication
/// Requires a valid bearer token
///
/// # Returns
/// - `200 OK`: JSON array of ReservationDto
/// - `401 Unauthorized`: Missing or invalid token
/// - `500 Internal Server Error`: Database error
#[utoipa::path(
    get,
    path = "/reservations",
    tag = RESERVATION_TAG,
    responses(
        (status = 200, description = "All reservations", body = [ReservationDto]),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_all_reservations(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<impl IntoResponse, AppError> {
    let auth_guard = AuthGuard::new(&state.db, &state.tokens, &headers);
    auth_guard.require(&[]).await?;

    let reservation_service = ReservationService::new(&state.db);
    let reservations = reservation_service.get_all().await?;

    let reservations_dto: Vec<ReservationDto> =
        reservations.into_iter().map(|r| r.into_dto()).collect();

    Ok((StatusCode::OK, Json(reservations_dto)))
}

/// GET /reservations/current - List reservations active right now
///
/// A reservation is active when its half-open interval contains the current
/// instant: it has started and has not yet ended.
///
/// # Authentication
/// Requires a valid bearer token
///
/// # Returns
/// - `200 OK`: JSON array of ReservationDto
/// - `401 Unauthorized`: Missing or invalid token
/// - `500 Internal Server Error`: Database error
#[utoipa::path(
    get,
    path = "/reservations/current",
    tag = RESERVATION_TAG,
    responses(
        (status = 200, description = "Reservations active now", body = [ReservationDto]),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_current_reservations(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<impl IntoResponse, AppError> {
    let auth_guard = AuthGuard::new(&state.db, &state.tokens, &headers);
    auth_guard.require(&[]).await?;

    let reservation_service = ReservationService::new(&state.db);
    let reservations = reservation_service.get_current().await?;

    let reservations_dto: Vec<ReservationDto> =
        reservations.into_iter().map(|r| r.into_dto()).collect();

    Ok((StatusCode::OK, Json(reservations_dto)))
}

/// GET /catways/{catway_number}/reservations - List reservations of one catway
///
/// # Authentication
/// Requires a valid bearer token
///
/// # Path Parameters
/// - `catway_number`: Business number of the catway
///
/// # Returns
/// - `200 OK`: JSON array of ReservationDto ordered by start date
/// - `401 Unauthorized`: Missing or invalid token
/// - `404 Not Found`: No catway with that number
/// - `500 Internal Server Error`: Database error
#[utoipa::path(
    get,
    path = "/catways/{catway_number}/reservations",
    tag = RESERVATION_TAG,
    params(
        ("catway_number" = i32, Path, description = "Business number of the catway")
    ),
    responses(
        (status = 200, description = "Reservations of the catway", body = [ReservationDto]),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 404, description = "Catway not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_catway_reservations(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(catway_number): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let auth_guard = AuthGuard::new(&state.db, &state.tokens, &headers);
    auth_guard.require(&[]).await?;

    let reservation_service = ReservationService::new(&state.db);
    let reservations = reservation_service.get_for_catway(catway_number).await?;

    let reservations_dto: Vec<ReservationDto> =
        reservations.into_iter().map(|r| r.into_dto()).collect();

    Ok((StatusCode::OK, Json(reservations_dto)))
}

/// GET /catways/{catway_number}/reservations/{id} - Fetch one reservation
///
/// The reservation must belong to the catway named in the path.
///
/// # Authentication
/// Requires a valid bearer token
///
/// # Path Parameters
/// - `catway_number`: Business number of the catway
/// - `id`: Reservation id
///
/// # Returns
/// - `200 OK`: The reservation
/// - `400 Bad Request`: Reservation belongs to a different catway
/// - `401 Unauthorized`: Missing or invalid token
/// - `404 Not Found`: Unknown reservation id
/// - `500 Internal Server Error`: Database error
#[utoipa::path(
    get,
    path = "/catways/{catway_number}/reservations/{id}",
    tag = RESERVATION_TAG,
    params(
        ("catway_number" = i32, Path, description = "Business number of the catway"),
        ("id" = i32, Path, description = "Reservation id")
    ),
    responses(
        (status = 200, description = "The reservation", body = ReservationDto),
        (status = 400, description = "Reservation belongs to another catway", body = ErrorDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 404, description = "Reservation not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_catway_reservation(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path((catway_number, id)): Path<(i32, i32)>,
) -> Result<impl IntoResponse, AppError> {
    let auth_guard = AuthGuard::new(&state.db, &state.tokens, &headers);
    auth_guard.require(&[]).await?;

    let reservation_service = ReservationService::new(&state.db);
    let reservation = reservation_service
        .get_for_catway_by_id(catway_number, id)
        .await?;

    Ok((StatusCode::OK, Json(reservation.into_dto())))
}

/// POST /catways/{catway_number}/reservations - Book a reservation
///
/// The catway number in the path is authoritative; the body carries only
/// client, boat, and the requested interval. Booking fails if the interval
/// overlaps an existing reservation on the same catway.
///
/// # Authentication
/// Requires a valid bearer token
///
/// # Path Parameters
/// - `catway_number`: Business number of the catway to book
///
/// # Returns
/// - `201 Created`: The booked reservation
/// - `400 Bad Request`: Validation failures, all violations listed
/// - `401 Unauthorized`: Missing or invalid token
/// - `404 Not Found`: No catway with that number
/// - `409 Conflict`: Interval overlaps an existing reservation
/// - `500 Internal Server Error`: Database error
#[utoipa::path(
    post,
    path = "/catways/{catway_number}/reservations",
    tag = RESERVATION_TAG,
    params(
        ("catway_number" = i32, Path, description = "Business number of the catway to book")
    ),
    request_body = CreateReservationDto,
    responses(
        (status = 201, description = "Reservation booked", body = ReservationDto),
        (status = 400, description = "Invalid reservation data", body = ValidationErrorDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 404, description = "Catway not found", body = ErrorDto),
        (status = 409, description = "Interval already reserved", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_reservation(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(catway_number): Path<i32>,
    Json(payload): Json<CreateReservationDto>,
) -> Result<impl IntoResponse, AppError> {
    let auth_guard = AuthGuard::new(&state.db, &state.tokens, &headers);
    auth_guard.require(&[]).await?;

    let reservation_service = ReservationService::new(&state.db);
    let reservation = reservation_service.create(catway_number, payload).await?;

    Ok((StatusCode::CREATED, Json(reservation.into_dto())))
}

/// PUT /catways/{catway_number}/reservations/{id} - Update a reservation
///
/// Applies the supplied fields only. The merged interval is re-validated and
/// re-checked for conflicts, with the reservation itself excluded from the
/// scan. A reservation cannot be moved to another catway.
///
/// # Authentication
/// Requires a valid bearer token
///
/// # Path Parameters
/// - `catway_number`: Business number of the catway
/// - `id`: Reservation to update
///
/// # Returns
/// - `200 OK`: The updated reservation
/// - `400 Bad Request`: Validation failure or wrong catway path
/// - `401 Unauthorized`: Missing or invalid token
/// - `404 Not Found`: Unknown reservation id
/// - `409 Conflict`: Merged interval overlaps another reservation
/// - `500 Internal Server Error`: Database error
#[utoipa::path(
    put,
    path = "/catways/{catway_number}/reservations/{id}",
    tag = RESERVATION_TAG,
    params(
        ("catway_number" = i32, Path, description = "Business number of the catway"),
        ("id" = i32, Path, description = "Reservation to update")
    ),
    request_body = UpdateReservationDto,
    responses(
        (status = 200, description = "Reservation updated", body = ReservationDto),
        (status = 400, description = "Invalid reservation data", body = ValidationErrorDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 404, description = "Reservation not found", body = ErrorDto),
        (status = 409, description = "Interval already reserved", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_reservation(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path((catway_number, id)): Path<(i32, i32)>,
    Json(payload): Json<UpdateReservationDto>,
) -> Result<impl IntoResponse, AppError> {
    let auth_guard = AuthGuard::new(&state.db, &state.tokens, &headers);
    auth_guard.require(&[]).await?;

    let reservation_service = ReservationService::new(&state.db);
    let reservation = reservation_service
        .update(catway_number, id, payload)
        .await?;

    Ok((StatusCode::OK, Json(reservation.into_dto())))
}

/// DELETE /catways/{catway_number}/reservations/{id} - Delete a reservation
///
/// The reservation must belong to the catway named in the path.
///
/// # Authentication
/// Requires a valid bearer token
///
/// # Path Parameters
/// - `catway_number`: Business number of the catway
/// - `id`: Reservation to delete
///
/// # Returns
/// - `200 OK`: Confirmation message
/// - `400 Bad Request`: Reservation belongs to a different catway
/// - `401 Unauthorized`: Missing or invalid token
/// - `404 Not Found`: Unknown reservation id
/// - `500 Internal Server Error`: Database error
#[utoipa::path(
    delete,
    path = "/catways/{catway_number}/reservations/{id}",
    tag = RESERVATION_TAG,
    params(
        ("catway_number" = i32, Path, description = "Business number of the catway"),
        ("id" = i32, Path, description = "Reservation to delete")
    ),
    responses(
        (status = 200, description = "Reservation deleted", body = MessageDto),
        (status = 400, description = "Reservation belongs to another catway", body = ErrorDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 404, description = "Reservation not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_reservation(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path((catway_number, id)): Path<(i32, i32)>,
) -> Result<impl IntoResponse, AppError> {
    let auth_guard = AuthGuard::new(&state.db, &state.tokens, &headers);
    auth_guard.require(&[]).await?;

    let reservation_service = ReservationService::new(&state.db);
    reservation_service.delete(catway_number, id).await?;

    Ok((
        StatusCode::OK,
        Json(MessageDto {
            message: "Reservation deleted".to_string(),
        }),
    ))
}
