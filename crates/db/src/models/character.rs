//! Character entity model and DTOs.

use realmkeep_core::types::DbId;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use crate::models::inventory::{Equipment, ItemStack};

/// A row from the `character` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Character {
    pub server_id: DbId,
    pub name: String,
    pub account_email: String,
    pub inventory: Vec<ItemStack>,
    /// Secondary stack array. Created empty and not writable through the API.
    pub vault: Vec<ItemStack>,
    pub equipment: Equipment,
    pub experience: i64,
}

/// Full character identity: composite key plus owning account.
///
/// Body of `POST /character/new` and `DELETE /character/delete`.
#[derive(Debug, Clone, Deserialize)]
pub struct CharacterIdentity {
    #[serde(deserialize_with = "crate::models::id::deserialize_id")]
    pub server_id: DbId,
    pub name: String,
    pub account_email: String,
}

/// Composite primary key of a character.
#[derive(Debug, Clone, Deserialize)]
pub struct CharacterKey {
    #[serde(deserialize_with = "crate::models::id::deserialize_id")]
    pub server_id: DbId,
    pub name: String,
}
