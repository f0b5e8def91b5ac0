//! Database repository for workspaces.

use sqlx::MySqlConnection;
use tracing::instrument;

use crate::{
    db::{errors::Result, models::workspaces::Workspace},
    types::strip_workspace_prefix,
};

pub struct Workspaces<'c> {
    db: &'c mut MySqlConnection,
}

impl<'c> Workspaces<'c> {
    pub fn new(db: &'c mut MySqlConnection) -> Self {
        Self { db }
    }

    /// Fetch a workspace by its external id. The `ws_` prefix is stripped
    /// before the id is used as the `Project` primary key.
    #[instrument(skip(self), err)]
    pub async fn get_by_id(&mut self, workspace_id: &str) -> Result<Option<Workspace>> {
        let workspace = sqlx::query_as::<_, Workspace>(
            "SELECT id, name, slug, plan, aiUsage, aiLimit, createdAt FROM Project WHERE id = ?",
        )
        .bind(strip_workspace_prefix(workspace_id))
        .fetch_optional(&mut *self.db)
        .await?;

        Ok(workspace)
    }

    /// Increment the workspace's AI usage counter by exactly 1.
    ///
    /// Unconditional single-row update: no row is created when the workspace
    /// does not exist. Returns the number of rows affected (0 or 1).
    #[instrument(skip(self), err)]
    pub async fn increment_ai_usage(&mut self, workspace_id: &str) -> Result<u64> {
        let result = sqlx::query("UPDATE Project SET aiUsage = aiUsage + 1 WHERE id = ?")
            .bind(strip_workspace_prefix(workspace_id))
            .execute(&mut *self.db)
            .await?;

        Ok(result.rows_affected())
    }
}
