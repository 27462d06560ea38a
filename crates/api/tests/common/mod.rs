#![allow(dead_code)]

use std::sync::Arc;

use axum::body::Body;
use axum::http::header::{CONTENT_TYPE, COOKIE, SET_COOKIE};
use axum::http::{Method, Request, Response, StatusCode};
use axum::Router;
use chrono::{NaiveDate, NaiveTime};
use http_body_util::BodyExt;
use sqlx::PgPool;
use tower::ServiceExt;

use roomescape_api::auth::jwt::JwtConfig;
use roomescape_api::auth::password::hash_password;
use roomescape_api::config::ServerConfig;
use roomescape_api::router::build_app_router;
use roomescape_api::state::AppState;
use roomescape_core::roles::{ROLE_ADMIN, ROLE_USER};
use roomescape_core::types::DbId;
use roomescape_db::models::catalog::CreateTheme;
use roomescape_db::models::member::{CreateMember, Member};
use roomescape_db::repositories::{MemberRepo, ReservationTimeRepo, ThemeRepo};

/// Plaintext password given to every seeded member.
pub const PASSWORD: &str = "test_password_123!";

/// Build a test `ServerConfig` with safe defaults.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec!["http://localhost:5173".to_string()],
        request_timeout_secs: 30,
        database_url: String::new(),
        database_max_connections: 5,
        secure_cookies: false,
        jwt: JwtConfig {
            secret: "integration-test-secret-long-enough".to_string(),
            access_token_expiry_mins: 60,
        },
    }
}

/// Build the full application router, with the production middleware
/// stack, over the given pool.
pub fn build_test_app(pool: PgPool) -> Router {
    let config = test_config();
    let state = AppState {
        pool,
        config: Arc::new(config.clone()),
    };
    build_app_router(state, &config)
}

// ---------------------------------------------------------------------------
// Fixtures
// ---------------------------------------------------------------------------

/// A far-future day so the past-slot check never interferes.
pub fn future_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2040, 8, 5).unwrap()
}

/// Reference rows shared by most tests.
pub struct Fixture {
    pub admin: Member,
    pub alice: Member,
    pub bob: Member,
    pub carol: Member,
    pub time_id: DbId,
    pub other_time_id: DbId,
    pub theme_id: DbId,
}

pub async fn seed(pool: &PgPool) -> Fixture {
    let admin = create_member(pool, "admin", ROLE_ADMIN).await;
    let alice = create_member(pool, "alice", ROLE_USER).await;
    let bob = create_member(pool, "bob", ROLE_USER).await;
    let carol = create_member(pool, "carol", ROLE_USER).await;

    let time = ReservationTimeRepo::create(pool, NaiveTime::from_hms_opt(10, 0, 0).unwrap())
        .await
        .unwrap();
    let other_time = ReservationTimeRepo::create(pool, NaiveTime::from_hms_opt(13, 0, 0).unwrap())
        .await
        .unwrap();
    let theme = ThemeRepo::create(
        pool,
        &CreateTheme {
            name: "Haunted Library".to_string(),
            description: "Find the lost manuscript".to_string(),
            thumbnail: "https://example.com/library.png".to_string(),
        },
    )
    .await
    .unwrap();

    Fixture {
        admin,
        alice,
        bob,
        carol,
        time_id: time.id,
        other_time_id: other_time.id,
        theme_id: theme.id,
    }
}

pub async fn create_member(pool: &PgPool, name: &str, role: &str) -> Member {
    let input = CreateMember {
        name: name.to_string(),
        email: format!("{name}@test.com"),
        password_hash: hash_password(PASSWORD).expect("hashing should succeed"),
        role: role.to_string(),
    };
    MemberRepo::create(pool, &input)
        .await
        .expect("member creation should succeed")
}

// ---------------------------------------------------------------------------
// Request helpers
// ---------------------------------------------------------------------------

pub async fn send(app: Router, request: Request<Body>) -> Response<Body> {
    app.oneshot(request).await.unwrap()
}

pub async fn get(app: Router, uri: &str) -> Response<Body> {
    send(app, Request::get(uri).body(Body::empty()).unwrap()).await
}

pub async fn get_with_cookie(app: Router, uri: &str, cookie: &str) -> Response<Body> {
    let request = Request::get(uri)
        .header(COOKIE, cookie)
        .body(Body::empty())
        .unwrap();
    send(app, request).await
}

pub async fn post_json(app: Router, uri: &str, body: serde_json::Value) -> Response<Body> {
    let request = Request::post(uri)
        .header(CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap();
    send(app, request).await
}

pub async fn post_json_with_cookie(
    app: Router,
    uri: &str,
    cookie: &str,
    body: serde_json::Value,
) -> Response<Body> {
    let request = Request::post(uri)
        .header(CONTENT_TYPE, "application/json")
        .header(COOKIE, cookie)
        .body(Body::from(body.to_string()))
        .unwrap();
    send(app, request).await
}

pub async fn delete(app: Router, uri: &str) -> Response<Body> {
    let request = Request::builder()
        .method(Method::DELETE)
        .uri(uri)
        .body(Body::empty())
        .unwrap();
    send(app, request).await
}

pub async fn delete_with_cookie(app: Router, uri: &str, cookie: &str) -> Response<Body> {
    let request = Request::builder()
        .method(Method::DELETE)
        .uri(uri)
        .header(COOKIE, cookie)
        .body(Body::empty())
        .unwrap();
    send(app, request).await
}

pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

/// Log in through the API and return the `token=...` pair to send back
/// in a `Cookie` header.
pub async fn login_cookie(app: Router, member: &Member) -> String {
    let body = serde_json::json!({ "email": member.email, "password": PASSWORD });
    let response = post_json(app, "/login", body).await;
    assert_eq!(response.status(), StatusCode::OK);

    let set_cookie = response
        .headers()
        .get(SET_COOKIE)
        .expect("login must set a cookie")
        .to_str()
        .unwrap();
    set_cookie
        .split(';')
        .next()
        .expect("cookie pair")
        .to_string()
}
