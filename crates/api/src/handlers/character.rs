//! Handlers for the `/character` resource.

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use realmkeep_db::models::character::CharacterIdentity;
use realmkeep_db::repositories::CharacterRepo;

use crate::error::AppResult;
use crate::extract::AppJson;
use crate::response::{created, success};
use crate::state::AppState;

/// POST /character/new
///
/// Starts the character with empty stacks, an empty loadout, and zero
/// experience. Unknown account or server is a `409 CONSTRAINT_VIOLATION`.
pub async fn create(
    State(state): State<AppState>,
    AppJson(input): AppJson<CharacterIdentity>,
) -> AppResult<(StatusCode, Json<&'static str>)> {
    let mut conn = state.pool.acquire().await?;
    CharacterRepo::create(&mut conn, &input).await?;
    tracing::info!(
        server_id = input.server_id,
        name = %input.name,
        account_email = %input.account_email,
        "Character created",
    );
    Ok(created())
}

/// DELETE /character/delete
///
/// Only deletes when the account email also matches. A miss still reports
/// success.
pub async fn delete(
    State(state): State<AppState>,
    AppJson(input): AppJson<CharacterIdentity>,
) -> AppResult<Json<&'static str>> {
    let mut conn = state.pool.acquire().await?;
    let rows_affected = CharacterRepo::delete(&mut conn, &input).await?;
    tracing::info!(
        server_id = input.server_id,
        name = %input.name,
        rows_affected,
        "Character delete requested",
    );
    Ok(success())
}
