//! Persistence layer: connection pool lifecycle, row models, and one
//! repository per game table.

pub mod config;
pub mod models;
pub mod repositories;

pub use config::DbConfig;

pub type DbPool = sqlx::PgPool;

/// Create a connection pool from the given configuration.
///
/// Connections are established eagerly up to `min_connections`; the first
/// connection is opened before this returns so a bad descriptor fails fast.
pub async fn create_pool(config: &DbConfig) -> Result<DbPool, sqlx::Error> {
    let options = config.connect_options()?;
    config.pool_options().connect_with(options).await
}

/// Run a trivial round-trip to verify the database is reachable.
pub async fn health_check(pool: &DbPool) -> Result<(), sqlx::Error> {
    sqlx::query_scalar::<_, i32>("SELECT 1")
        .fetch_one(pool)
        .await
        .map(|_| ())
}

/// Close every pooled connection.
///
/// Waits for checked-out connections to be returned; acquisitions started
/// after this call fail with [`sqlx::Error::PoolClosed`].
pub async fn close_pool(pool: &DbPool) {
    tracing::info!(
        size = pool.size(),
        idle = pool.num_idle(),
        "Closing database connection pool"
    );
    pool.close().await;
}
