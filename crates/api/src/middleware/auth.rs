//! Cookie-based authentication extractor for Axum handlers.

use axum::extract::FromRequestParts;
use axum::http::request::Parts;
use axum_extra::extract::cookie::CookieJar;
use roomescape_core::error::CoreError;
use roomescape_core::messages;
use roomescape_core::roles;
use roomescape_core::types::DbId;

use crate::auth::cookie::TOKEN_COOKIE;
use crate::auth::jwt::validate_token;
use crate::error::AppError;
use crate::state::AppState;

/// The caller resolved from the `token` session cookie.
///
/// Handlers that take this extractor reject anonymous requests with 401
/// before any service code runs.
#[derive(Debug, Clone)]
pub struct AuthMember {
    /// The member's database id (from `claims.sub`).
    pub member_id: DbId,
    /// The member's role name (`USER` or `ADMIN`).
    pub role: String,
}

impl AuthMember {
    pub fn is_admin(&self) -> bool {
        roles::is_admin(&self.role)
    }
}

impl FromRequestParts<AppState> for AuthMember {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let jar = CookieJar::from_headers(&parts.headers);
        let token = jar
            .get(TOKEN_COOKIE)
            .map(|cookie| cookie.value().to_owned())
            .ok_or_else(not_logged_in)?;

        let claims = validate_token(&token, &state.config.jwt).map_err(|e| {
            tracing::debug!(error = %e, "Rejected session token");
            not_logged_in()
        })?;

        Ok(AuthMember {
            member_id: claims.sub,
            role: claims.role,
        })
    }
}

fn not_logged_in() -> AppError {
    AppError::Core(CoreError::Unauthorized(messages::NOT_LOGGED_IN.into()))
}
