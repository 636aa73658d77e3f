//! Synchronous field validation for inbound payloads.
//!
//! Pure functions mapping a request payload to either `Ok(())` or the full
//! ordered list of violated rules. Every rule is checked — no fail-fast
//! short-circuiting — so a caller gets complete feedback in one round trip.
//! No side effects, no I/O; validators run after authentication and before
//! any store access.

use chrono::{DateTime, Utc};

use crate::model::{
    catway::{CreateCatwayDto, UpdateCatwayDto, CATWAY_TYPES},
    reservation::{CreateReservationDto, UpdateReservationDto},
    user::{CreateUserDto, LoginDto, UpdateUserDto},
};

const MIN_PASSWORD_LEN: usize = 6;
const MIN_USERNAME_LEN: usize = 3;
const MIN_NAME_LEN: usize = 2;

fn valid_email(email: &str) -> bool {
    email.contains('@')
}

/// Validates a login payload: plausible email, minimum password length.
pub fn validate_login(payload: &LoginDto) -> Result<(), Vec<String>> {
    let mut errors = Vec::new();

    if !valid_email(&payload.email) {
        errors.push("Valid email required".to_string());
    }

    if payload.password.chars().count() < MIN_PASSWORD_LEN {
        errors.push("Password required (minimum 6 characters)".to_string());
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

/// Validates a registration payload.
pub fn validate_user_create(payload: &CreateUserDto) -> Result<(), Vec<String>> {
    let mut errors = Vec::new();

    if payload.username.chars().count() < MIN_USERNAME_LEN {
        errors.push("Username required (minimum 3 characters)".to_string());
    }

    if !valid_email(&payload.email) {
        errors.push("Valid email required".to_string());
    }

    if payload.password.chars().count() < MIN_PASSWORD_LEN {
        errors.push("Password required (minimum 6 characters)".to_string());
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

/// Validates a profile update payload. Only supplied fields are checked.
pub fn validate_user_update(payload: &UpdateUserDto) -> Result<(), Vec<String>> {
    let mut errors = Vec::new();

    if let Some(username) = &payload.username {
        if username.chars().count() < MIN_USERNAME_LEN {
            errors.push("Invalid username (minimum 3 characters)".to_string());
        }
    }

    if let Some(email) = &payload.email {
        if !valid_email(email) {
            errors.push("Valid email required".to_string());
        }
    }

    if let Some(password) = &payload.password {
        if password.chars().count() < MIN_PASSWORD_LEN {
            errors.push("Invalid password (minimum 6 characters)".to_string());
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

/// Validates a catway creation payload against the accepted type tokens.
pub fn validate_catway_create(payload: &CreateCatwayDto) -> Result<(), Vec<String>> {
    let mut errors = Vec::new();

    if !CATWAY_TYPES.contains(&payload.catway_type.as_str()) {
        errors.push(format!(
            "Catway type must be one of: {}",
            CATWAY_TYPES.join(", ")
        ));
    }

    if payload.catway_state.trim().is_empty() {
        errors.push("Catway state required".to_string());
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

/// Validates a catway update payload; only the state is mutable.
pub fn validate_catway_update(payload: &UpdateCatwayDto) -> Result<(), Vec<String>> {
    let mut errors = Vec::new();

    if payload.catway_state.trim().is_empty() {
        errors.push("Catway state required".to_string());
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

fn check_names(client_name: Option<&str>, boat_name: Option<&str>, errors: &mut Vec<String>) {
    if let Some(client_name) = client_name {
        if client_name.chars().count() < MIN_NAME_LEN {
            errors.push("Client name required (minimum 2 characters)".to_string());
        }
    }

    if let Some(boat_name) = boat_name {
        if boat_name.chars().count() < MIN_NAME_LEN {
            errors.push("Boat name required (minimum 2 characters)".to_string());
        }
    }
}

fn check_date_order(start: DateTime<Utc>, end: DateTime<Utc>, errors: &mut Vec<String>) {
    if start >= end {
        errors.push("End date must be after start date".to_string());
    }
}

/// Validates a reservation creation payload: names and strict date ordering.
pub fn validate_reservation_create(payload: &CreateReservationDto) -> Result<(), Vec<String>> {
    let mut errors = Vec::new();

    check_names(
        Some(&payload.client_name),
        Some(&payload.boat_name),
        &mut errors,
    );
    check_date_order(payload.start_date, payload.end_date, &mut errors);

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

/// Validates a reservation update payload.
///
/// Only supplied fields are checked. Date ordering is re-checked against the
/// merge of stored and incoming dates, so moving a single bound cannot
/// silently invert the interval.
pub fn validate_reservation_update(
    payload: &UpdateReservationDto,
    stored_start: DateTime<Utc>,
    stored_end: DateTime<Utc>,
) -> Result<(), Vec<String>> {
    let mut errors = Vec::new();

    check_names(
        payload.client_name.as_deref(),
        payload.boat_name.as_deref(),
        &mut errors,
    );

    let merged_start = payload.start_date.unwrap_or(stored_start);
    let merged_end = payload.end_date.unwrap_or(stored_end);
    check_date_order(merged_start, merged_end, &mut errors);

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
