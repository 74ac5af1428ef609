//! Repository for the `inventory` array column of `character`.

use realmkeep_core::types::DbId;
use sqlx::PgConnection;

use crate::models::inventory::ItemStack;

pub struct InventoryRepo;

impl InventoryRepo {
    /// Expand a character's inventory into one row per stack, in array order.
    ///
    /// An unknown character yields an empty list.
    pub async fn list(
        conn: &mut PgConnection,
        server_id: DbId,
        name: &str,
    ) -> Result<Vec<ItemStack>, sqlx::Error> {
        sqlx::query_as::<_, ItemStack>(
            "SELECT s.item_id, s.quantity
             FROM character c
             CROSS JOIN LATERAL UNNEST(c.inventory)
                 WITH ORDINALITY AS s(item_id, quantity, position)
             WHERE c.server_id = $1 AND c.name = $2
             ORDER BY s.position",
        )
        .bind(server_id)
        .bind(name)
        .fetch_all(conn)
        .await
    }

    /// Overwrite a character's inventory. Returns the number of rows updated.
    pub async fn replace(
        conn: &mut PgConnection,
        server_id: DbId,
        name: &str,
        inventory: &[ItemStack],
    ) -> Result<u64, sqlx::Error> {
        let result = sqlx::query(
            "UPDATE character SET inventory = $1 WHERE server_id = $2 AND name = $3",
        )
        .bind(inventory)
        .bind(server_id)
        .bind(name)
        .execute(conn)
        .await?;
        Ok(result.rows_affected())
    }
}
