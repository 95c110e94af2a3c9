//! Handler for the admin analytics endpoint.
//!
//! Aggregations are recomputed from the full record set on every call; the
//! bucketing itself lives in [`evreg_core::analytics`] so it can be tested
//! without a database.

use axum::extract::State;
use axum::response::IntoResponse;
use axum::Json;
use evreg_core::analytics::{
    self, AgeGroupCount, PincodeCount, RecordView, StateCount, Summary, TOP_PINCODE_LIMIT,
};
use evreg_db::repositories::RegistrationRepo;
use serde::Serialize;

use crate::error::AppResult;
use crate::middleware::auth::AdminSession;
use crate::response::DataResponse;
use crate::state::AppState;

/// Full analytics payload for the admin dashboard.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalyticsResponse {
    pub by_state: Vec<StateCount>,
    pub by_age_group: Vec<AgeGroupCount>,
    pub top_pincodes: Vec<PincodeCount>,
    pub summary: Summary,
}

/// GET /api/v1/admin/analytics
///
/// Read-only; has no side effects on the store.
pub async fn get_analytics(
    _session: AdminSession,
    State(state): State<AppState>,
) -> AppResult<impl IntoResponse> {
    let registrations = RegistrationRepo::list_all(&state.pool).await?;

    let views: Vec<RecordView<'_>> = registrations
        .iter()
        .map(|r| RecordView {
            state: &r.state,
            pincode: &r.pincode,
            age: r.age,
        })
        .collect();

    let response = AnalyticsResponse {
        by_state: analytics::count_by_state(&views),
        by_age_group: analytics::count_by_age_group(&views),
        top_pincodes: analytics::top_pincodes(&views, TOP_PINCODE_LIMIT),
        summary: analytics::summarize(&views),
    };

    Ok(Json(DataResponse { data: response }))
}
