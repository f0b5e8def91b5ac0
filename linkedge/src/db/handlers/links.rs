//! Database repository for short links.

use sqlx::MySqlConnection;
use tracing::instrument;

use crate::{
    db::{errors::Result, models::links::Link},
    keys::normalize_key,
};

const LINK_COLUMNS: &str = "id, domain, `key`, url, archived, expiresAt, password, proxy, title, \
                            description, image, rewrite, ios, android, geo, userId, projectId, \
                            publicStats, createdAt";

pub struct Links<'c> {
    db: &'c mut MySqlConnection,
}

impl<'c> Links<'c> {
    pub fn new(db: &'c mut MySqlConnection) -> Self {
        Self { db }
    }

    /// Fetch a link by `(domain, key)`.
    ///
    /// The key is canonicalized (URI-decoded, punycode-encoded) before it is
    /// bound, because that is the form keys are stored in.
    #[instrument(skip(self), err)]
    pub async fn get_by_domain_and_key(&mut self, domain: &str, key: &str) -> Result<Option<Link>> {
        let link = sqlx::query_as::<_, Link>(&format!(
            "SELECT {LINK_COLUMNS} FROM Link WHERE domain = ? AND `key` = ?"
        ))
        .bind(domain)
        .bind(normalize_key(key))
        .fetch_optional(&mut *self.db)
        .await?;

        Ok(link)
    }

    /// Fetch the first link pointing at the given destination URL.
    #[instrument(skip(self, url), err)]
    pub async fn get_by_url(&mut self, url: &str) -> Result<Option<Link>> {
        let link =
            sqlx::query_as::<_, Link>(&format!("SELECT {LINK_COLUMNS} FROM Link WHERE url = ?"))
                .bind(url)
                .fetch_optional(&mut *self.db)
                .await?;

        Ok(link)
    }

    /// Check whether `(domain, key)` is taken, with the same key
    /// canonicalization as [`Self::get_by_domain_and_key`].
    #[instrument(skip(self), err)]
    pub async fn exists(&mut self, domain: &str, key: &str) -> Result<bool> {
        let row = sqlx::query("SELECT 1 FROM Link WHERE domain = ? AND `key` = ? LIMIT 1")
            .bind(domain)
            .bind(normalize_key(key))
            .fetch_optional(&mut *self.db)
            .await?;

        Ok(row.is_some())
    }
}
