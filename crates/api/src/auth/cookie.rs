//! The session cookie.

use axum_extra::extract::cookie::{Cookie, SameSite};

/// Name of the cookie holding the session token.
pub const TOKEN_COOKIE: &str = "token";

/// Build the session cookie for a freshly issued token.
pub fn session_cookie(token: String, secure: bool) -> Cookie<'static> {
    Cookie::build((TOKEN_COOKIE, token))
        .path("/")
        .http_only(true)
        .secure(secure)
        .same_site(SameSite::Lax)
        .build()
}

/// A cookie that, when removed from a jar, expires the session cookie.
pub fn removal_cookie() -> Cookie<'static> {
    Cookie::build(TOKEN_COOKIE).path("/").build()
}
