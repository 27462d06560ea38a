//! Handlers for login, session check and logout.

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use axum_extra::extract::cookie::CookieJar;
use axum_extra::extract::WithRejection;
use roomescape_core::error::CoreError;
use roomescape_core::messages;
use roomescape_core::types::DbId;
use roomescape_db::repositories::MemberRepo;
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::auth::cookie::{removal_cookie, session_cookie};
use crate::auth::jwt::generate_access_token;
use crate::auth::password::verify_password;
use crate::error::{AppError, AppResult};
use crate::middleware::auth::AuthMember;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Request / response types
// ---------------------------------------------------------------------------

/// Request body for `POST /login`.
#[derive(Debug, Deserialize, Validate)]
pub struct LoginRequest {
    #[validate(email)]
    pub email: String,
    #[validate(length(min = 1))]
    pub password: String,
}

/// Public member info returned by login and the session check.
#[derive(Debug, Serialize)]
pub struct MemberInfo {
    pub id: DbId,
    pub name: String,
    pub role: String,
}

// ---------------------------------------------------------------------------
// Handlers
// ---------------------------------------------------------------------------

/// POST /login
///
/// Verify email + password and set the session cookie.
pub async fn login(
    State(state): State<AppState>,
    jar: CookieJar,
    WithRejection(Json(input), _): WithRejection<Json<LoginRequest>, AppError>,
) -> AppResult<(CookieJar, Json<MemberInfo>)> {
    input
        .validate()
        .map_err(|e| AppError::Core(CoreError::Validation(e.to_string())))?;

    let invalid = || AppError::Core(CoreError::Unauthorized(messages::INVALID_CREDENTIALS.into()));

    let member = MemberRepo::find_by_email(&state.pool, &input.email)
        .await?
        .ok_or_else(invalid)?;

    let password_valid = verify_password(&input.password, &member.password_hash)
        .map_err(|e| AppError::InternalError(format!("Password verification error: {e}")))?;
    if !password_valid {
        tracing::info!(member_id = member.id, "Login rejected: wrong password");
        return Err(invalid());
    }

    let token = generate_access_token(member.id, &member.role, &state.config.jwt)
        .map_err(|e| AppError::InternalError(format!("Token generation error: {e}")))?;
    tracing::info!(member_id = member.id, "Member logged in");

    let jar = jar.add(session_cookie(token, state.config.secure_cookies));
    Ok((
        jar,
        Json(MemberInfo {
            id: member.id,
            name: member.name,
            role: member.role,
        }),
    ))
}

/// GET /login/check
///
/// Resolve the session cookie to the current member.
pub async fn check(
    auth: AuthMember,
    State(state): State<AppState>,
) -> AppResult<Json<MemberInfo>> {
    let member = MemberRepo::find_by_id(&state.pool, auth.member_id)
        .await?
        .ok_or_else(|| AppError::Core(CoreError::Unauthorized(messages::NOT_LOGGED_IN.into())))?;

    Ok(Json(MemberInfo {
        id: member.id,
        name: member.name,
        role: member.role,
    }))
}

/// POST /logout
///
/// Expire the session cookie. Succeeds whether or not one was present.
pub async fn logout(jar: CookieJar) -> (CookieJar, StatusCode) {
    (jar.remove(removal_cookie()), StatusCode::NO_CONTENT)
}
