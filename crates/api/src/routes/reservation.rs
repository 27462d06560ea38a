//! Route definitions for the `/reservations` resource.

use axum::routing::{delete, get};
use axum::Router;

use crate::handlers::reservation;
use crate::state::AppState;

/// Routes mounted at `/reservations`.
///
/// ```text
/// GET    /       -> list_reservations
/// POST   /       -> create_reservation (member)
/// GET    /mine   -> list_my_bookings (member)
/// DELETE /{id}   -> delete_reservation
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route(
            "/",
            get(reservation::list_reservations).post(reservation::create_reservation),
        )
        .route("/mine", get(reservation::list_my_bookings))
        .route("/{id}", delete(reservation::delete_reservation))
}
