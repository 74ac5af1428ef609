//! Handlers for the `/server` resource.

use axum::extract::State;
use axum::Json;
use realmkeep_core::error::CoreError;
use realmkeep_db::models::character::Character;
use realmkeep_db::models::server::{ServerKey, SetServerStatus};
use realmkeep_db::repositories::ServerRepo;

use crate::error::{AppError, AppResult};
use crate::extract::AppJson;
use crate::response::success;
use crate::state::AppState;

/// GET /server/status
///
/// An unknown server id is `404 NOT_FOUND`.
pub async fn get_status(
    State(state): State<AppState>,
    AppJson(input): AppJson<ServerKey>,
) -> AppResult<Json<Option<String>>> {
    let mut conn = state.pool.acquire().await?;
    let status = ServerRepo::find_status(&mut conn, input.id)
        .await?
        .ok_or(AppError::Core(CoreError::not_found("Server", input.id)))?;
    Ok(Json(status))
}

/// POST /server/status
pub async fn set_status(
    State(state): State<AppState>,
    AppJson(input): AppJson<SetServerStatus>,
) -> AppResult<Json<&'static str>> {
    let mut conn = state.pool.acquire().await?;
    let rows_affected = ServerRepo::set_status(&mut conn, input.id, input.status.as_deref()).await?;
    tracing::debug!(server_id = input.id, rows_affected, "Server status updated");
    Ok(success())
}

/// GET /server/characters
pub async fn list_characters(
    State(state): State<AppState>,
    AppJson(input): AppJson<ServerKey>,
) -> AppResult<Json<Vec<Character>>> {
    let mut conn = state.pool.acquire().await?;
    let characters = ServerRepo::list_characters(&mut conn, input.id).await?;
    Ok(Json(characters))
}
