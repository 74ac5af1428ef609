#![allow(dead_code)]

use std::sync::Arc;

use axum::body::Body;
use axum::http::{header, Method, Request, StatusCode};
use axum::response::Response;
use axum::Router;
use http_body_util::BodyExt;
use sqlx::PgPool;
use tower::ServiceExt;

use realmkeep_api::config::ServerConfig;
use realmkeep_api::router::build_app_router;
use realmkeep_api::state::AppState;
use realmkeep_db::DbConfig;

pub const SUCCESS: &str = "OPERATION SUCCESSFUL";

/// Build a test `ServerConfig` with safe defaults.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec!["http://localhost:5173".to_string()],
        request_timeout_secs: 30,
        shutdown_timeout_secs: 30,
        db: DbConfig::default(),
    }
}

/// Build the full application router, with production middleware, over the
/// given pool.
pub fn build_test_app(pool: PgPool) -> Router {
    let config = test_config();
    let state = AppState {
        pool,
        config: Arc::new(config.clone()),
    };
    build_app_router(state, &config)
}

/// Send a request carrying a JSON body. Used for every method, since GET and
/// DELETE routes also read their input from the body.
pub async fn send_json(
    app: Router,
    method: Method,
    uri: &str,
    body: serde_json::Value,
) -> Response {
    let request = Request::builder()
        .method(method)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap();
    app.oneshot(request).await.unwrap()
}

pub async fn get_json(app: Router, uri: &str, body: serde_json::Value) -> Response {
    send_json(app, Method::GET, uri, body).await
}

pub async fn post_json(app: Router, uri: &str, body: serde_json::Value) -> Response {
    send_json(app, Method::POST, uri, body).await
}

pub async fn delete_json(app: Router, uri: &str, body: serde_json::Value) -> Response {
    send_json(app, Method::DELETE, uri, body).await
}

/// `GET /inventory/all` for one character.
pub async fn get_inventory(pool: &PgPool, server_id: i64, name: &str) -> Response {
    get_json(
        build_test_app(pool.clone()),
        "/inventory/all",
        serde_json::json!({"server_id": server_id, "name": name}),
    )
    .await
}

/// Send a body-less GET.
pub async fn get(app: Router, uri: &str) -> Response {
    let request = Request::builder()
        .method(Method::GET)
        .uri(uri)
        .body(Body::empty())
        .unwrap();
    app.oneshot(request).await.unwrap()
}

/// Collect a response body and parse it as JSON.
pub async fn body_json(response: Response) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

/// Assert a status and return the parsed body.
pub async fn expect_status(response: Response, status: StatusCode) -> serde_json::Value {
    assert_eq!(response.status(), status);
    body_json(response).await
}

// ---------------------------------------------------------------------------
// Fixtures. There is no server-creation route, so servers are seeded directly.
// ---------------------------------------------------------------------------

pub async fn seed_server(pool: &PgPool, id: i64, name: &str, status: Option<&str>) {
    sqlx::query("INSERT INTO server (id, name, status) VALUES ($1, $2, $3)")
        .bind(id)
        .bind(name)
        .bind(status)
        .execute(pool)
        .await
        .unwrap();
}

pub async fn create_account(pool: &PgPool, email: &str, password: &str) {
    let response = post_json(
        build_test_app(pool.clone()),
        "/account/new",
        serde_json::json!({"email": email, "password": password, "status": "active"}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);
}

pub async fn create_character(pool: &PgPool, server_id: i64, name: &str, email: &str) {
    let response = post_json(
        build_test_app(pool.clone()),
        "/character/new",
        serde_json::json!({"server_id": server_id, "name": name, "account_email": email}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);
}
