//! HTTP-level tests for login, session check, logout and role gates.

mod common;

use axum::http::header::SET_COOKIE;
use axum::http::StatusCode;
use common::{
    body_json, get, get_with_cookie, login_cookie, post_json, post_json_with_cookie,
};
use roomescape_core::messages;
use sqlx::PgPool;

#[sqlx::test(migrations = "../../db/migrations")]
async fn login_sets_http_only_session_cookie(pool: PgPool) {
    let fx = common::seed(&pool).await;
    let app = common::build_test_app(pool);

    let body = serde_json::json!({ "email": fx.alice.email, "password": common::PASSWORD });
    let response = post_json(app, "/login", body).await;

    assert_eq!(response.status(), StatusCode::OK);
    let set_cookie = response
        .headers()
        .get(SET_COOKIE)
        .unwrap()
        .to_str()
        .unwrap()
        .to_string();
    assert!(set_cookie.starts_with("token="));
    assert!(set_cookie.contains("HttpOnly"));

    let json = body_json(response).await;
    assert_eq!(json["id"], fx.alice.id);
    assert_eq!(json["name"], "alice");
    assert_eq!(json["role"], "USER");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn login_with_wrong_password_returns_401(pool: PgPool) {
    let fx = common::seed(&pool).await;
    let app = common::build_test_app(pool);

    let body = serde_json::json!({ "email": fx.alice.email, "password": "nope" });
    let response = post_json(app, "/login", body).await;

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    let json = body_json(response).await;
    assert_eq!(json["errorMessage"], messages::INVALID_CREDENTIALS);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn login_with_unknown_email_returns_401(pool: PgPool) {
    common::seed(&pool).await;
    let app = common::build_test_app(pool);

    let body = serde_json::json!({ "email": "ghost@test.com", "password": common::PASSWORD });
    let response = post_json(app, "/login", body).await;

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn login_with_malformed_email_returns_400(pool: PgPool) {
    let app = common::build_test_app(pool);

    let body = serde_json::json!({ "email": "not-an-email", "password": "x" });
    let response = post_json(app, "/login", body).await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert!(body_json(response).await["errorMessage"].is_string());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn login_check_resolves_cookie(pool: PgPool) {
    let fx = common::seed(&pool).await;
    let cookie = login_cookie(common::build_test_app(pool.clone()), &fx.bob).await;

    let response =
        get_with_cookie(common::build_test_app(pool), "/login/check", &cookie).await;

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["name"], "bob");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn login_check_without_cookie_returns_401(pool: PgPool) {
    let app = common::build_test_app(pool);

    let response = get(app, "/login/check").await;

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    let json = body_json(response).await;
    assert_eq!(json["errorMessage"], messages::NOT_LOGGED_IN);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn forged_cookie_returns_401(pool: PgPool) {
    let app = common::build_test_app(pool);

    let response = get_with_cookie(app, "/login/check", "token=forged.jwt.value").await;

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn logout_expires_cookie(pool: PgPool) {
    let fx = common::seed(&pool).await;
    let cookie = login_cookie(common::build_test_app(pool.clone()), &fx.alice).await;

    let response = post_json_with_cookie(
        common::build_test_app(pool),
        "/logout",
        &cookie,
        serde_json::json!({}),
    )
    .await;

    assert_eq!(response.status(), StatusCode::NO_CONTENT);
    let set_cookie = response.headers().get(SET_COOKIE).unwrap().to_str().unwrap();
    assert!(set_cookie.starts_with("token="));
    assert!(set_cookie.contains("Max-Age=0"));
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn member_cannot_use_admin_routes(pool: PgPool) {
    let fx = common::seed(&pool).await;
    let cookie = login_cookie(common::build_test_app(pool.clone()), &fx.alice).await;

    let response =
        get_with_cookie(common::build_test_app(pool.clone()), "/waitings", &cookie).await;
    assert_eq!(response.status(), StatusCode::FORBIDDEN);
    let json = body_json(response).await;
    assert_eq!(json["errorMessage"], messages::ADMIN_REQUIRED);

    let body = serde_json::json!({
        "memberId": fx.bob.id,
        "date": "2040-08-05",
        "timeId": fx.time_id,
        "themeId": fx.theme_id,
    });
    let response =
        post_json_with_cookie(common::build_test_app(pool), "/admin/reservations", &cookie, body)
            .await;
    assert_eq!(response.status(), StatusCode::FORBIDDEN);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn anonymous_caller_gets_401_on_admin_routes(pool: PgPool) {
    let app = common::build_test_app(pool);

    let response = get(app, "/waitings").await;

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}
