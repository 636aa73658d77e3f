use axum::{
    routing::{get, post},
    Json, Router,
};
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use utoipa::OpenApi;

use crate::{
    controller::{auth, catway, reservation, user},
    model::api::{ErrorDto, MessageDto, ValidationErrorDto},
    state::AppState,
};

/// OpenAPI documentation for the marina API.
///
/// Served as raw JSON under `/api-docs/openapi.json`; point any Swagger UI
/// instance at that URL for interactive docs.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Marina Management API",
        description = "CRUD API for users, catways and reservations of a pleasure port"
    ),
    paths(
        auth::login,
        auth::logout,
        user::get_all_users,
        user::create_user,
        user::get_user,
        user::update_user,
        user::delete_user,
        catway::get_all_catways,
        catway::create_catway,
        catway::get_catway,
        catway::update_catway,
        catway::delete_catway,
        reservation::get_all_reservations,
        reservation::get_current_reservations,
        reservation::get_catway_reservations,
        reservation::get_catway_reservation,
        reservation::create_reservation,
        reservation::update_reservation,
        reservation::delete_reservation,
    ),
    components(schemas(ErrorDto, MessageDto, ValidationErrorDto))
)]
struct ApiDoc;

async fn openapi_spec() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/auth/login", post(auth::login))
        .route("/auth/logout", get(auth::logout))
        .route("/users", get(user::get_all_users).post(user::create_user))
        .route(
            "/users/{email}",
            get(user::get_user)
                .put(user::update_user)
                .delete(user::delete_user),
        )
        .route(
            "/catways",
            get(catway::get_all_catways).post(catway::create_catway),
        )
        .route(
            "/catways/{catway_number}",
            get(catway::get_catway)
                .put(catway::update_catway)
                .delete(catway::delete_catway),
        )
        .route(
            "/catways/{catway_number}/reservations",
            get(reservation::get_catway_reservations).post(reservation::create_reservation),
        )
        .route(
            "/catways/{catway_number}/reservations/{id}",
            get(reservation::get_catway_reservation)
                .put(reservation::update_reservation)
                .delete(reservation::delete_reservation),
        )
        .route("/reservations", get(reservation::get_all_reservations))
        .route(
            "/reservations/current",
            get(reservation::get_current_reservations),
        )
        .route("/api-docs/openapi.json", get(openapi_spec))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
}
