//! Pool acquisition and statement timeouts surface as `503 STORE_UNAVAILABLE`.

mod common;

use std::time::Duration;

use assert_matches::assert_matches;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use common::{expect_status, get};
use realmkeep_api::error::{classify_sqlx_error, AppError};
use realmkeep_core::error::CoreError;
use realmkeep_db::DbConfig;
use sqlx::postgres::{PgConnectOptions, PgPoolOptions};
use sqlx::PgPool;

/// Build a pool the way `create_pool` does, pointed at the test database.
async fn pool_with(config: &DbConfig, connect_opts: PgConnectOptions) -> PgPool {
    config
        .pool_options()
        .connect_with(config.with_session_options(connect_opts))
        .await
        .unwrap()
}

#[sqlx::test(migrations = "../db/migrations")]
async fn exhausted_pool_times_out_with_503(_pool_opts: PgPoolOptions, connect_opts: PgConnectOptions) {
    let config = DbConfig {
        max_connections: 1,
        acquire_timeout_secs: 1,
        ..DbConfig::default()
    };
    let pool = pool_with(&config, connect_opts).await;
    let held = pool.acquire().await.unwrap();

    let app = common::build_test_app(pool.clone());
    let response = tokio::time::timeout(Duration::from_secs(10), get(app, "/item/all"))
        .await
        .expect("acquire_timeout should end the request");

    let json = expect_status(response, StatusCode::SERVICE_UNAVAILABLE).await;
    assert_eq!(json["code"], "STORE_UNAVAILABLE");

    drop(held);
    pool.close().await;
}

#[sqlx::test(migrations = "../db/migrations")]
async fn slow_statement_is_cancelled_by_statement_timeout(_pool_opts: PgPoolOptions, connect_opts: PgConnectOptions) {
    let config = DbConfig {
        statement_timeout_ms: 200,
        ..DbConfig::default()
    };
    let pool = pool_with(&config, connect_opts).await;

    let err = sqlx::query("SELECT pg_sleep(5)")
        .execute(&pool)
        .await
        .unwrap_err();

    let sqlstate = err
        .as_database_error()
        .and_then(|db_err| db_err.code())
        .map(|code| code.into_owned());
    assert_eq!(sqlstate.as_deref(), Some("57014"));
    assert_matches!(classify_sqlx_error(&err), CoreError::Unavailable(_));

    let response = AppError::Database(err).into_response();
    let json = expect_status(response, StatusCode::SERVICE_UNAVAILABLE).await;
    assert_eq!(json["code"], "STORE_UNAVAILABLE");

    pool.close().await;
}
