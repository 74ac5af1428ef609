//! Repository for the `server` table.

use realmkeep_core::types::DbId;
use sqlx::PgConnection;

use crate::models::character::Character;
use crate::repositories::character_repo::COLUMNS as CHARACTER_COLUMNS;

pub struct ServerRepo;

impl ServerRepo {
    /// Look up a server's status. Outer `Option` is the row.
    pub async fn find_status(
        conn: &mut PgConnection,
        id: DbId,
    ) -> Result<Option<Option<String>>, sqlx::Error> {
        sqlx::query_scalar::<_, Option<String>>("SELECT status FROM server WHERE id = $1")
            .bind(id)
            .fetch_optional(conn)
            .await
    }

    /// Set a server's status. Returns the number of rows updated.
    pub async fn set_status(
        conn: &mut PgConnection,
        id: DbId,
        status: Option<&str>,
    ) -> Result<u64, sqlx::Error> {
        let result = sqlx::query("UPDATE server SET status = $1 WHERE id = $2")
            .bind(status)
            .bind(id)
            .execute(conn)
            .await?;
        Ok(result.rows_affected())
    }

    /// List every character on a server, ordered by name.
    pub async fn list_characters(
        conn: &mut PgConnection,
        id: DbId,
    ) -> Result<Vec<Character>, sqlx::Error> {
        let query = format!(
            "SELECT {CHARACTER_COLUMNS} FROM server s
             JOIN character c ON s.id = c.server_id
             WHERE s.id = $1
             ORDER BY c.name"
        );
        sqlx::query_as::<_, Character>(&query)
            .bind(id)
            .fetch_all(conn)
            .await
    }
}
