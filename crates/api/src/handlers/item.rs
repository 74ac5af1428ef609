//! Handlers for the `/item` resource.

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use realmkeep_db::models::item::{CreateItem, Item, ItemKey};
use realmkeep_db::repositories::ItemRepo;

use crate::error::AppResult;
use crate::extract::AppJson;
use crate::response::created;
use crate::state::AppState;

/// POST /item
pub async fn create(
    State(state): State<AppState>,
    AppJson(input): AppJson<CreateItem>,
) -> AppResult<(StatusCode, Json<&'static str>)> {
    let mut conn = state.pool.acquire().await?;
    ItemRepo::create(&mut conn, &input).await?;
    tracing::info!(name = %input.name, "Item created");
    Ok(created())
}

/// GET /item
///
/// Answers a list of zero or one items rather than a 404.
pub async fn get_by_id(
    State(state): State<AppState>,
    AppJson(input): AppJson<ItemKey>,
) -> AppResult<Json<Vec<Item>>> {
    let mut conn = state.pool.acquire().await?;
    let items = ItemRepo::find_by_id(&mut conn, input.id).await?;
    Ok(Json(items))
}

/// GET /item/all
pub async fn list(State(state): State<AppState>) -> AppResult<Json<Vec<Item>>> {
    let mut conn = state.pool.acquire().await?;
    let items = ItemRepo::list(&mut conn).await?;
    Ok(Json(items))
}
