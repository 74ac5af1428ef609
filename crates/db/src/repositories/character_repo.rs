//! Repository for the `character` table.

use sqlx::PgConnection;

use crate::models::character::CharacterIdentity;
use crate::models::inventory::{Equipment, ItemStack};

/// Qualified column list for selecting characters through a join.
pub(crate) const COLUMNS: &str =
    "c.server_id, c.name, c.account_email, c.inventory, c.vault, c.equipment, c.experience";

pub struct CharacterRepo;

impl CharacterRepo {
    /// Insert a character with an empty inventory and vault, an empty
    /// loadout, and zero experience.
    ///
    /// Fails with a foreign-key violation if the account or server does not
    /// exist, and with a primary-key violation if the name is taken on that
    /// server.
    pub async fn create(
        conn: &mut PgConnection,
        input: &CharacterIdentity,
    ) -> Result<(), sqlx::Error> {
        let empty: Vec<ItemStack> = Vec::new();
        sqlx::query(
            "INSERT INTO character
                 (server_id, name, account_email, inventory, vault, equipment, experience)
             VALUES ($1, $2, $3, $4, $5, $6, 0)",
        )
        .bind(input.server_id)
        .bind(&input.name)
        .bind(&input.account_email)
        .bind(&empty)
        .bind(&empty)
        .bind(Equipment::default())
        .execute(conn)
        .await?;
        Ok(())
    }

    /// Delete a character by composite key, only if owned by the given
    /// account. Returns the number of rows removed.
    pub async fn delete(
        conn: &mut PgConnection,
        input: &CharacterIdentity,
    ) -> Result<u64, sqlx::Error> {
        let result = sqlx::query(
            "DELETE FROM character WHERE server_id = $1 AND name = $2 AND account_email = $3",
        )
        .bind(input.server_id)
        .bind(&input.name)
        .bind(&input.account_email)
        .execute(conn)
        .await?;
        Ok(result.rows_affected())
    }
}
