use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Canonical error body for all non-validation failures.
#[derive(Serialize, Deserialize, ToSchema)]
pub struct ErrorDto {
    pub error: String,
}

/// Confirmation body for operations that return no record (logout, deletes).
#[derive(Serialize, Deserialize, ToSchema)]
pub struct MessageDto {
    pub message: String,
}

/// Body for validation failures, carrying the full ordered list of violated
/// rules rather than just the first one.
#[derive(Serialize, Deserialize, ToSchema)]
pub struct ValidationErrorDto {
    pub errors: Vec<String>,
}
