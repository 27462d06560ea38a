//! Route definitions for session management.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::auth;
use crate::state::AppState;

/// ```text
/// POST /login        -> login
/// GET  /login/check  -> check (requires session)
/// POST /logout       -> logout
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/login", post(auth::login))
        .route("/login/check", get(auth::check))
        .route("/logout", post(auth::logout))
}
