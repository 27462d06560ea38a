//! Route definitions for `/admin`.

use axum::routing::post;
use axum::Router;

use crate::handlers::reservation;
use crate::state::AppState;

/// Routes mounted at `/admin`. Every handler requires the `ADMIN` role.
///
/// ```text
/// POST /reservations  -> admin_create_reservation
/// ```
pub fn router() -> Router<AppState> {
    Router::new().route("/reservations", post(reservation::admin_create_reservation))
}
