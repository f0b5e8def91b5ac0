//! Database repository for API tokens.

use chrono::{DateTime, Utc};
use sqlx::MySqlConnection;
use tracing::instrument;

use crate::db::{errors::Result, models::users::ApiKeyUser};

pub struct Tokens<'c> {
    db: &'c mut MySqlConnection,
}

impl<'c> Tokens<'c> {
    pub fn new(db: &'c mut MySqlConnection) -> Self {
        Self { db }
    }

    /// Resolve a hashed API key to its owning user.
    #[instrument(skip(self, hashed_key), err)]
    pub async fn user_for_key(&mut self, hashed_key: &str) -> Result<Option<ApiKeyUser>> {
        let user = sqlx::query_as::<_, ApiKeyUser>(
            "SELECT u.id, u.name, u.email FROM User u \
             INNER JOIN Token t ON u.id = t.userId \
             WHERE t.hashedKey = ? LIMIT 1",
        )
        .bind(hashed_key)
        .fetch_optional(&mut *self.db)
        .await?;

        Ok(user)
    }

    /// Overwrite the token's last-used timestamp.
    ///
    /// Unconditional single-row update keyed by the hashed key; last write
    /// wins. Returns the number of rows affected (0 or 1).
    #[instrument(skip(self, hashed_key), err)]
    pub async fn touch(&mut self, hashed_key: &str, last_used: DateTime<Utc>) -> Result<u64> {
        let result = sqlx::query("UPDATE Token SET lastUsed = ? WHERE hashedKey = ?")
            .bind(last_used)
            .bind(hashed_key)
            .execute(&mut *self.db)
            .await?;

        Ok(result.rows_affected())
    }
}
