//! Item entity model and DTOs.

use realmkeep_core::types::DbId;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `item` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Item {
    pub id: DbId,
    pub name: Option<String>,
    pub rarity: Option<String>,
    pub description: Option<String>,
    pub cost: Option<i32>,
    pub is_stackable: Option<bool>,
    pub icon: Option<String>,
}

/// Body of `POST /item`. There is no upload path, so `icon` is not accepted.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateItem {
    pub name: String,
    pub rarity: Option<String>,
    pub description: Option<String>,
    pub cost: Option<i32>,
    pub is_stackable: Option<bool>,
}

/// Body of `GET /item`.
#[derive(Debug, Clone, Deserialize)]
pub struct ItemKey {
    #[serde(deserialize_with = "crate::models::id::deserialize_id")]
    pub id: DbId,
}
