//! Route definitions for the public `/registrations` resource.

use axum::routing::post;
use axum::Router;

use crate::handlers::registrations;
use crate::state::AppState;

/// Routes mounted at `/registrations`. Both are public.
///
/// ```text
/// POST /                -> create_registration
/// POST /check-existing  -> check_existing
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", post(registrations::create_registration))
        .route("/check-existing", post(registrations::check_existing))
}
