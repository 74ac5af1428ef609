//! HTTP-level integration tests for the `/server` routes.

mod common;

use axum::http::StatusCode;
use common::{expect_status, get_json, post_json, seed_server, SUCCESS};
use serde_json::json;
use sqlx::PgPool;

#[sqlx::test(migrations = "../db/migrations")]
async fn get_status_returns_scalar(pool: PgPool) {
    seed_server(&pool, 1, "Ashfall", Some("online")).await;

    let app = common::build_test_app(pool);
    let response = get_json(app, "/server/status", json!({"id": 1})).await;
    let json = expect_status(response, StatusCode::OK).await;
    assert_eq!(json, "online");
}

#[sqlx::test(migrations = "../db/migrations")]
async fn status_round_trip(pool: PgPool) {
    seed_server(&pool, 7, "Ashfall", Some("online")).await;

    let app = common::build_test_app(pool.clone());
    let response = post_json(
        app,
        "/server/status",
        json!({"id": 7, "status": "maintenance"}),
    )
    .await;
    let json = expect_status(response, StatusCode::OK).await;
    assert_eq!(json, SUCCESS);

    let app = common::build_test_app(pool);
    let response = get_json(app, "/server/status", json!({"id": 7})).await;
    let json = expect_status(response, StatusCode::OK).await;
    assert_eq!(json, "maintenance");
}

#[sqlx::test(migrations = "../db/migrations")]
async fn unknown_server_status_is_404(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = get_json(app, "/server/status", json!({"id": 999})).await;

    let json = expect_status(response, StatusCode::NOT_FOUND).await;
    assert_eq!(json["code"], "NOT_FOUND");
    assert_eq!(json["error"], "Server 999 not found");
}

#[sqlx::test(migrations = "../db/migrations")]
async fn characters_on_empty_server_is_empty(pool: PgPool) {
    seed_server(&pool, 3, "Quiet", None).await;

    let app = common::build_test_app(pool);
    let response = get_json(app, "/server/characters", json!({"id": 3})).await;
    let json = expect_status(response, StatusCode::OK).await;
    assert_eq!(json, json!([]));
}

#[sqlx::test(migrations = "../db/migrations")]
async fn numeric_string_id_is_accepted(pool: PgPool) {
    seed_server(&pool, 4, "Ashfall", Some("online")).await;

    let app = common::build_test_app(pool);
    let response = get_json(app, "/server/status", json!({"id": "4"})).await;
    let json = expect_status(response, StatusCode::OK).await;
    assert_eq!(json, "online");
}
