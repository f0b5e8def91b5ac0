//! Database repository for users.

use sqlx::MySqlConnection;
use tracing::instrument;

use crate::db::errors::Result;

pub struct Users<'c> {
    db: &'c mut MySqlConnection,
}

impl<'c> Users<'c> {
    pub fn new(db: &'c mut MySqlConnection) -> Self {
        Self { db }
    }

    /// Check whether a user with the given id exists.
    #[instrument(skip(self), err)]
    pub async fn exists(&mut self, user_id: &str) -> Result<bool> {
        let row = sqlx::query("SELECT 1 FROM User WHERE id = ? LIMIT 1")
            .bind(user_id)
            .fetch_optional(&mut *self.db)
            .await?;

        Ok(row.is_some())
    }
}
