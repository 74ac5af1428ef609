//! Handlers for a character's inventory.

use axum::extract::State;
use axum::Json;
use realmkeep_db::models::character::CharacterKey;
use realmkeep_db::models::inventory::{ItemStack, SetInventory};
use realmkeep_db::repositories::InventoryRepo;

use crate::error::AppResult;
use crate::extract::AppJson;
use crate::response::success;
use crate::state::AppState;

/// GET /inventory/all
pub async fn list(
    State(state): State<AppState>,
    AppJson(input): AppJson<CharacterKey>,
) -> AppResult<Json<Vec<ItemStack>>> {
    let mut conn = state.pool.acquire().await?;
    let stacks = InventoryRepo::list(&mut conn, input.server_id, &input.name).await?;
    Ok(Json(stacks))
}

/// POST /inventory/all
///
/// Replaces the whole array; concurrent writers race and the last one wins.
pub async fn replace(
    State(state): State<AppState>,
    AppJson(input): AppJson<SetInventory>,
) -> AppResult<Json<&'static str>> {
    let mut conn = state.pool.acquire().await?;
    let rows_affected =
        InventoryRepo::replace(&mut conn, input.server_id, &input.name, &input.inventory).await?;
    tracing::debug!(
        server_id = input.server_id,
        name = %input.name,
        stacks = input.inventory.len(),
        rows_affected,
        "Inventory replaced",
    );
    Ok(success())
}
