//! Role-based access control extractors.

use axum::extract::FromRequestParts;
use axum::http::request::Parts;
use roomescape_core::error::CoreError;
use roomescape_core::messages;

use super::auth::AuthMember;
use crate::error::AppError;
use crate::state::AppState;

/// Requires the `ADMIN` role. Anonymous callers get 401, members get 403.
///
/// ```ignore
/// async fn admin_only(RequireAdmin(admin): RequireAdmin) -> AppResult<StatusCode> {
///     // admin is guaranteed to hold the ADMIN role here
///     Ok(StatusCode::NO_CONTENT)
/// }
/// ```
pub struct RequireAdmin(pub AuthMember);

impl FromRequestParts<AppState> for RequireAdmin {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let member = AuthMember::from_request_parts(parts, state).await?;
        if !member.is_admin() {
            return Err(AppError::Core(CoreError::Forbidden(
                messages::ADMIN_REQUIRED.into(),
            )));
        }
        Ok(RequireAdmin(member))
    }
}
