//! Handlers for the public `/registrations` resource.
//!
//! Anyone may submit a registration or run the pre-flight duplicate check;
//! everything else lives under `/admin` and requires a session.

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use evreg_core::error::CoreError;
use evreg_core::registration::RegistrationDraft;
use evreg_db::models::registration::Registration;
use evreg_db::repositories::{DuplicateMatch, RegistrationRepo};
use serde::{Deserialize, Serialize};
use sqlx::PgPool;

use crate::error::{AppError, AppResult};
use crate::response::DataResponse;
use crate::state::AppState;

/// Request body for `POST /registrations/check-existing`.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CheckExistingRequest {
    pub email: Option<String>,
    pub phone_number: Option<String>,
}

/// Response for the pre-flight duplicate check.
///
/// Deliberately carries only the boolean and a status string -- never any
/// field of the conflicting record.
#[derive(Debug, Serialize)]
pub struct CheckExistingResponse {
    pub exists: bool,
    pub message: String,
}

/// POST /api/v1/registrations
///
/// Public submission. Validates, runs the duplicate guard, then inserts.
pub async fn create_registration(
    State(state): State<AppState>,
    Json(input): Json<RegistrationDraft>,
) -> AppResult<impl IntoResponse> {
    let registration = create_record(&state.pool, input).await?;

    tracing::info!(id = registration.id, "Registration created");

    Ok((
        StatusCode::CREATED,
        Json(DataResponse { data: registration }),
    ))
}

/// POST /api/v1/registrations/check-existing
///
/// Pre-flight query: does a registration with this email or phone already
/// exist? Returns only `{exists, message}`.
pub async fn check_existing(
    State(state): State<AppState>,
    Json(input): Json<CheckExistingRequest>,
) -> AppResult<Json<CheckExistingResponse>> {
    let email = input
        .email
        .as_deref()
        .map(|e| e.trim().to_lowercase())
        .filter(|e| !e.is_empty());
    let phone = input
        .phone_number
        .as_deref()
        .map(str::trim)
        .filter(|p| !p.is_empty());

    let conflict =
        RegistrationRepo::find_conflict(&state.pool, email.as_deref(), phone).await?;

    let exists = conflict.any();
    let message = if exists {
        "User already registered".to_string()
    } else {
        "User not registered".to_string()
    };

    Ok(Json(CheckExistingResponse { exists, message }))
}

/// Validate, guard, and insert a candidate registration.
///
/// Shared by the public submission endpoint and the admin create endpoint.
/// The guard runs immediately before the insert to keep the race window
/// small; the unique indexes catch anything that slips through.
pub(crate) async fn create_record(
    pool: &PgPool,
    input: RegistrationDraft,
) -> AppResult<Registration> {
    let draft = input.into_valid()?;

    let conflict = RegistrationRepo::find_conflict(
        pool,
        Some(&draft.email),
        Some(&draft.phone_number),
    )
    .await?;
    if conflict.any() {
        return Err(AppError::Core(CoreError::Duplicate(duplicate_message(
            &conflict,
        ))));
    }

    Ok(RegistrationRepo::create(pool, &draft).await?)
}

/// Name the colliding field(s) without leaking anything else.
fn duplicate_message(conflict: &DuplicateMatch) -> String {
    match (conflict.email_match, conflict.phone_match) {
        (true, true) => "A registration already exists with this email and phone number",
        (true, false) => "A registration already exists with this email",
        _ => "A registration already exists with this phone number",
    }
    .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_duplicate_message_names_colliding_fields() {
        let both = DuplicateMatch {
            email_match: true,
            phone_match: true,
        };
        assert!(duplicate_message(&both).contains("email and phone number"));

        let email_only = DuplicateMatch {
            email_match: true,
            phone_match: false,
        };
        let msg = duplicate_message(&email_only);
        assert!(msg.contains("email"));
        assert!(!msg.contains("phone"));

        let phone_only = DuplicateMatch {
            email_match: false,
            phone_match: true,
        };
        assert!(duplicate_message(&phone_only).contains("phone number"));
    }
}
