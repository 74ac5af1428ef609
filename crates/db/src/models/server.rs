//! Server request DTOs.

use realmkeep_core::types::DbId;
use serde::Deserialize;

/// Body of routes that only identify a server.
#[derive(Debug, Clone, Deserialize)]
pub struct ServerKey {
    #[serde(deserialize_with = "crate::models::id::deserialize_id")]
    pub id: DbId,
}

/// Body of `POST /server/status`. A `null` status clears the column.
#[derive(Debug, Clone, Deserialize)]
pub struct SetServerStatus {
    #[serde(deserialize_with = "crate::models::id::deserialize_id")]
    pub id: DbId,
    pub status: Option<String>,
}
