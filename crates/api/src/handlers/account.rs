//! Handlers for the `/account` resource.

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use realmkeep_core::error::CoreError;
use realmkeep_db::models::account::{AccountKey, CreateAccount, LoginRequest, SetAccountStatus};
use realmkeep_db::models::character::Character;
use realmkeep_db::repositories::AccountRepo;

use crate::error::{AppError, AppResult};
use crate::extract::AppJson;
use crate::response::{created, success};
use crate::state::AppState;

/// POST /account/new
///
/// A second account with the same email fails with `409 CONSTRAINT_VIOLATION`.
pub async fn create(
    State(state): State<AppState>,
    AppJson(input): AppJson<CreateAccount>,
) -> AppResult<(StatusCode, Json<&'static str>)> {
    let mut conn = state.pool.acquire().await?;
    AccountRepo::create(&mut conn, &input).await?;
    tracing::info!(email = %input.email, "Account created");
    Ok(created())
}

/// GET /account/login
///
/// INSECURE, demo only: compares the submitted password with the stored
/// plaintext column. Answers `true` iff a row matches both fields and
/// `false` otherwise, including for unknown emails.
pub async fn login(
    State(state): State<AppState>,
    AppJson(input): AppJson<LoginRequest>,
) -> AppResult<Json<bool>> {
    let mut conn = state.pool.acquire().await?;
    let matched = AccountRepo::credentials_match(&mut conn, &input.email, &input.password).await?;
    Ok(Json(matched))
}

/// GET /account/status
///
/// Returns the status string, or `null` if the column is unset. An unknown
/// email is `404 NOT_FOUND`.
pub async fn get_status(
    State(state): State<AppState>,
    AppJson(input): AppJson<AccountKey>,
) -> AppResult<Json<Option<String>>> {
    let mut conn = state.pool.acquire().await?;
    let status = AccountRepo::find_status(&mut conn, &input.email)
        .await?
        .ok_or_else(|| AppError::Core(CoreError::not_found("Account", &input.email)))?;
    Ok(Json(status))
}

/// POST /account/status
///
/// Succeeds even when no account matched.
pub async fn set_status(
    State(state): State<AppState>,
    AppJson(input): AppJson<SetAccountStatus>,
) -> AppResult<Json<&'static str>> {
    let mut conn = state.pool.acquire().await?;
    let rows_affected =
        AccountRepo::set_status(&mut conn, &input.email, input.status.as_deref()).await?;
    tracing::debug!(email = %input.email, rows_affected, "Account status updated");
    Ok(success())
}

/// GET /account/characters
pub async fn list_characters(
    State(state): State<AppState>,
    AppJson(input): AppJson<AccountKey>,
) -> AppResult<Json<Vec<Character>>> {
    let mut conn = state.pool.acquire().await?;
    let characters = AccountRepo::list_characters(&mut conn, &input.email).await?;
    Ok(Json(characters))
}
