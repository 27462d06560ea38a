//! Route definitions for the `/waitings` resource.

use axum::routing::{delete, get};
use axum::Router;

use crate::handlers::waiting;
use crate::state::AppState;

/// Routes mounted at `/waitings`.
///
/// ```text
/// GET    /      -> list_waitings (admin)
/// DELETE /{id}  -> cancel_waiting (owner or admin)
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(waiting::list_waitings))
        .route("/{id}", delete(waiting::cancel_waiting))
}
