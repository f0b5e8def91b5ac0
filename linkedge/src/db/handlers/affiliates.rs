//! Database repository for affiliates.

use sqlx::MySqlConnection;
use tracing::instrument;

use crate::db::{errors::Result, models::affiliates::Affiliate};

pub struct Affiliates<'c> {
    db: &'c mut MySqlConnection,
}

impl<'c> Affiliates<'c> {
    pub fn new(db: &'c mut MySqlConnection) -> Self {
        Self { db }
    }

    /// Fetch an affiliate by workspace and username.
    #[instrument(skip(self), err)]
    pub async fn get_by_username(
        &mut self,
        project_id: &str,
        username: &str,
    ) -> Result<Option<Affiliate>> {
        let affiliate = sqlx::query_as::<_, Affiliate>(
            "SELECT id, username, email, projectId, userId, createdAt \
             FROM Affiliate WHERE projectId = ? AND username = ?",
        )
        .bind(project_id)
        .bind(username)
        .fetch_optional(&mut *self.db)
        .await?;

        Ok(affiliate)
    }
}
