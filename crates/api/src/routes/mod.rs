pub mod admin;
pub mod auth;
pub mod health;
pub mod reservation;
pub mod waiting;

use axum::Router;

use crate::state::AppState;

/// Build the application route tree.
///
/// Route hierarchy:
///
/// ```text
/// /login                      login (public)
/// /login/check                current member (member)
/// /logout                     logout (public)
///
/// /reservations               list (public), create (member)
/// /reservations/mine          caller's bookings (member)
/// /reservations/{id}          delete + promote (public)
///
/// /waitings                   list (admin)
/// /waitings/{id}              cancel (owner or admin)
///
/// /admin/reservations         create for a member (admin)
/// ```
pub fn app_routes() -> Router<AppState> {
    Router::new()
        .merge(auth::router())
        .nest("/reservations", reservation::router())
        .nest("/waitings", waiting::router())
        .nest("/admin", admin::router())
}
