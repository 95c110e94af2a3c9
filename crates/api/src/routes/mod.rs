pub mod admin;
pub mod health;
pub mod registrations;

use axum::Router;

use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /registrations                   public create (POST)
/// /registrations/check-existing    pre-flight duplicate check (POST)
///
/// /admin/login                     issue session token (POST, public)
/// /admin/registrations             list (GET), create (POST)   -- admin only
/// /admin/registrations/{id}        get, update, delete         -- admin only
/// /admin/analytics                 aggregations (GET)          -- admin only
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/registrations", registrations::router())
        .nest("/admin", admin::router())
}
