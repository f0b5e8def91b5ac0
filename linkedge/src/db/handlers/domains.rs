//! Database repository for custom domains.

use sqlx::MySqlConnection;
use tracing::instrument;

use crate::db::{errors::Result, models::domains::Domain};

pub struct Domains<'c> {
    db: &'c mut MySqlConnection,
}

impl<'c> Domains<'c> {
    pub fn new(db: &'c mut MySqlConnection) -> Self {
        Self { db }
    }

    /// Fetch a domain by its slug (the domain name itself).
    #[instrument(skip(self), err)]
    pub async fn get_by_slug(&mut self, slug: &str) -> Result<Option<Domain>> {
        let domain = sqlx::query_as::<_, Domain>(
            "SELECT id, slug, verified, `primary`, archived, target, `type`, projectId, createdAt \
             FROM Domain WHERE slug = ?",
        )
        .bind(slug)
        .fetch_optional(&mut *self.db)
        .await?;

        Ok(domain)
    }
}
