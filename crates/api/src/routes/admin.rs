//! Route definitions for the `/admin` resource.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::{admin, analytics, auth};
use crate::state::AppState;

/// Routes mounted at `/admin`.
///
/// `/login` is public; everything else requires a valid session token
/// (enforced by the [`crate::middleware::auth::AdminSession`] extractor).
///
/// ```text
/// POST   /login                -> login
/// GET    /registrations        -> list_registrations
/// POST   /registrations        -> create_registration
/// GET    /registrations/{id}   -> get_registration
/// PUT    /registrations/{id}   -> update_registration
/// DELETE /registrations/{id}   -> delete_registration
/// GET    /analytics            -> get_analytics
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/login", post(auth::login))
        .route(
            "/registrations",
            get(admin::list_registrations).post(admin::create_registration),
        )
        .route(
            "/registrations/{id}",
            get(admin::get_registration)
                .put(admin::update_registration)
                .delete(admin::delete_registration),
        )
        .route("/analytics", get(analytics::get_analytics))
}
