//! Handlers for the admin registration CRUD endpoints.
//!
//! Every handler requires a verified [`AdminSession`]; the extractor rejects
//! with 401 before any work happens.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use evreg_core::error::CoreError;
use evreg_core::registration::RegistrationDraft;
use evreg_core::types::DbId;
use evreg_db::models::registration::UpdateRegistration;
use evreg_db::repositories::RegistrationRepo;
use serde_json::json;

use crate::error::{AppError, AppResult};
use crate::handlers::registrations::create_record;
use crate::middleware::auth::AdminSession;
use crate::response::DataResponse;
use crate::state::AppState;

/// GET /api/v1/admin/registrations
///
/// List every registration, most recent submission first. No pagination;
/// the record set is expected to stay in the low thousands.
pub async fn list_registrations(
    _session: AdminSession,
    State(state): State<AppState>,
) -> AppResult<impl IntoResponse> {
    let registrations = RegistrationRepo::list_all(&state.pool).await?;

    Ok(Json(DataResponse {
        data: registrations,
    }))
}

/// GET /api/v1/admin/registrations/{id}
pub async fn get_registration(
    _session: AdminSession,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let registration = RegistrationRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Registration",
            id,
        }))?;

    Ok(Json(DataResponse { data: registration }))
}

/// POST /api/v1/admin/registrations
///
/// Admin-initiated create. Same validation and duplicate guard as the
/// public submission path.
pub async fn create_registration(
    session: AdminSession,
    State(state): State<AppState>,
    Json(input): Json<RegistrationDraft>,
) -> AppResult<impl IntoResponse> {
    let registration = create_record(&state.pool, input).await?;

    tracing::info!(
        id = registration.id,
        jti = %session.token_id,
        "Registration created by admin",
    );

    Ok((
        StatusCode::CREATED,
        Json(DataResponse { data: registration }),
    ))
}

/// PUT /api/v1/admin/registrations/{id}
///
/// Partial or full field replacement. The merged field set is re-validated
/// before anything is written; absent fields keep their stored value.
///
/// The duplicate guard is intentionally not re-run here -- the unique
/// indexes still reject an update that would introduce a duplicate email
/// or phone number, surfacing as 409.
pub async fn update_registration(
    session: AdminSession,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateRegistration>,
) -> AppResult<impl IntoResponse> {
    let existing = RegistrationRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Registration",
            id,
        }))?;

    let merged = input.merge_into(&existing).into_valid()?;

    let updated = RegistrationRepo::update(&state.pool, id, &merged)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Registration",
            id,
        }))?;

    tracing::info!(id, jti = %session.token_id, "Registration updated");

    Ok(Json(DataResponse { data: updated }))
}

/// DELETE /api/v1/admin/registrations/{id}
///
/// Irreversible. Returns 200 with an empty data payload on success,
/// 404 if the record is already absent.
pub async fn delete_registration(
    session: AdminSession,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let deleted = RegistrationRepo::delete(&state.pool, id).await?;

    if !deleted {
        return Err(AppError::Core(CoreError::NotFound {
            entity: "Registration",
            id,
        }));
    }

    tracing::info!(id, jti = %session.token_id, "Registration deleted");

    Ok(Json(DataResponse { data: json!({}) }))
}
