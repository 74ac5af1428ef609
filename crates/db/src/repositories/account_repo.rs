//! Repository for the `account` table.

use sqlx::PgConnection;

use crate::models::account::CreateAccount;
use crate::models::character::Character;
use crate::repositories::character_repo::COLUMNS as CHARACTER_COLUMNS;

pub struct AccountRepo;

impl AccountRepo {
    /// Insert a new account. A duplicate email violates `account_pkey`.
    pub async fn create(conn: &mut PgConnection, input: &CreateAccount) -> Result<(), sqlx::Error> {
        sqlx::query("INSERT INTO account (email, password, status) VALUES ($1, $2, $3)")
            .bind(&input.email)
            .bind(&input.password)
            .bind(&input.status)
            .execute(conn)
            .await?;
        Ok(())
    }

    /// Whether a row matches both email and password.
    ///
    /// Plaintext comparison against the stored column. Not a real
    /// authentication check.
    pub async fn credentials_match(
        conn: &mut PgConnection,
        email: &str,
        password: &str,
    ) -> Result<bool, sqlx::Error> {
        sqlx::query_scalar::<_, bool>(
            "SELECT EXISTS (SELECT 1 FROM account WHERE email = $1 AND password = $2)",
        )
        .bind(email)
        .bind(password)
        .fetch_one(conn)
        .await
    }

    /// Look up an account's status.
    ///
    /// The outer `Option` is the row, the inner one is the nullable column.
    pub async fn find_status(
        conn: &mut PgConnection,
        email: &str,
    ) -> Result<Option<Option<String>>, sqlx::Error> {
        sqlx::query_scalar::<_, Option<String>>("SELECT status FROM account WHERE email = $1")
            .bind(email)
            .fetch_optional(conn)
            .await
    }

    /// Set an account's status. Returns the number of rows updated.
    pub async fn set_status(
        conn: &mut PgConnection,
        email: &str,
        status: Option<&str>,
    ) -> Result<u64, sqlx::Error> {
        let result = sqlx::query("UPDATE account SET status = $1 WHERE email = $2")
            .bind(status)
            .bind(email)
            .execute(conn)
            .await?;
        Ok(result.rows_affected())
    }

    /// List every character owned by an account, ordered by server then name.
    pub async fn list_characters(
        conn: &mut PgConnection,
        email: &str,
    ) -> Result<Vec<Character>, sqlx::Error> {
        let query = format!(
            "SELECT {CHARACTER_COLUMNS} FROM account a
             JOIN character c ON a.email = c.account_email
             WHERE a.email = $1
             ORDER BY c.server_id, c.name"
        );
        sqlx::query_as::<_, Character>(&query)
            .bind(email)
            .fetch_all(conn)
            .await
    }
}
