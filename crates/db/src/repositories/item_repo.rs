//! Repository for the `item` table.

use realmkeep_core::types::DbId;
use sqlx::PgConnection;

use crate::models::item::{CreateItem, Item};

const COLUMNS: &str = "id, name, rarity, description, cost, is_stackable, icon";

pub struct ItemRepo;

impl ItemRepo {
    /// Insert a new item. `icon` is always stored as NULL.
    pub async fn create(conn: &mut PgConnection, input: &CreateItem) -> Result<(), sqlx::Error> {
        sqlx::query(
            "INSERT INTO item (name, rarity, description, cost, is_stackable, icon)
             VALUES ($1, $2, $3, $4, $5, NULL)",
        )
        .bind(&input.name)
        .bind(&input.rarity)
        .bind(&input.description)
        .bind(input.cost)
        .bind(input.is_stackable)
        .execute(conn)
        .await?;
        Ok(())
    }

    /// Select an item by id as a list of zero or one rows.
    pub async fn find_by_id(conn: &mut PgConnection, id: DbId) -> Result<Vec<Item>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM item WHERE id = $1");
        sqlx::query_as::<_, Item>(&query)
            .bind(id)
            .fetch_all(conn)
            .await
    }

    /// List every item ordered by id. Unpaginated.
    pub async fn list(conn: &mut PgConnection) -> Result<Vec<Item>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM item ORDER BY id");
        sqlx::query_as::<_, Item>(&query).fetch_all(conn).await
    }
}
