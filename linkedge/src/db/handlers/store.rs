//! The access-layer seam: [`LinkStore`] and its SQL-backed implementation.
//!
//! [`LinkStore`] is the full function surface of this crate as a trait, so
//! the composite operations (domain-or-link resolution, random key
//! generation) and any embedding application can be exercised against a fake
//! store. [`EdgeDb`] is the production implementation: it owns an
//! [`EdgePool`] and dispatches each operation to the per-entity repositories.
//!
//! Every method honors the disabled-mode contract: on a disabled pool it
//! returns its empty value (`None`, `false`, `0`) without any I/O.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
#[cfg(test)]
use mockall::automock;

use crate::{
    config::Config,
    db::{
        errors::Result,
        handlers::{
            affiliates::Affiliates, domains::Domains, links::Links, tokens::Tokens, users::Users,
            workspaces::Workspaces,
        },
        models::{
            affiliates::Affiliate, domains::Domain, links::Link, users::ApiKeyUser,
            workspaces::Workspace,
        },
        pool::EdgePool,
    },
    errors::Error,
    keygen::{self, RandomKeyOptions},
    types::ROOT_KEY,
};

/// The function surface of the edge data-access layer.
///
/// Lookup methods return `None`/`false` for absent rows; the two write
/// methods return the number of rows affected. Transport and database errors
/// propagate as [`crate::db::errors::DbError`] without retry.
#[cfg_attr(test, automock)]
#[async_trait]
pub trait LinkStore: Send + Sync {
    /// Workspace by external id (`ws_` prefix stripped).
    async fn get_workspace(&self, workspace_id: &str) -> Result<Option<Workspace>>;

    /// Increment the workspace's AI usage counter by 1.
    async fn increment_ai_usage(&self, workspace_id: &str) -> Result<u64>;

    /// Domain by slug.
    async fn get_domain(&self, slug: &str) -> Result<Option<Domain>>;

    /// Whether `(domain, key)` is taken. The key is canonicalized first.
    async fn key_exists(&self, domain: &str, key: &str) -> Result<bool>;

    /// Whether a user with this id exists.
    async fn user_exists(&self, user_id: &str) -> Result<bool>;

    /// Link by `(domain, key)`. The key is canonicalized first.
    async fn get_link(&self, domain: &str, key: &str) -> Result<Option<Link>>;

    /// First link pointing at the given destination URL.
    async fn get_link_by_url(&self, url: &str) -> Result<Option<Link>>;

    /// Affiliate by workspace and username.
    async fn get_affiliate(&self, project_id: &str, username: &str) -> Result<Option<Affiliate>>;

    /// Owning user of a hashed API key.
    async fn get_user_by_api_key(&self, hashed_key: &str) -> Result<Option<ApiKeyUser>>;

    /// Overwrite the API token's last-used timestamp.
    async fn touch_api_key(&self, hashed_key: &str, last_used: DateTime<Utc>) -> Result<u64>;
}

/// Resolve a `(domain, optional key)` pair to either the domain's root entry
/// or a stored link.
///
/// A missing or empty key, or the root sentinel, addresses the domain itself:
/// the result is the synthesized root entry ([`Link::root_of`]) whose `url`
/// is the domain's target, or `None` when the domain does not exist. Any
/// other key delegates to [`LinkStore::get_link`].
pub async fn resolve_entry<S: LinkStore + ?Sized>(
    store: &S,
    domain: &str,
    key: Option<&str>,
) -> Result<Option<Link>> {
    match key {
        None => Ok(store.get_domain(domain).await?.map(Link::root_of)),
        Some(key) if key.is_empty() || key == ROOT_KEY => {
            Ok(store.get_domain(domain).await?.map(Link::root_of))
        }
        Some(key) => store.get_link(domain, key).await,
    }
}

/// SQL-backed [`LinkStore`] over an injected [`EdgePool`].
#[derive(Clone, Debug)]
pub struct EdgeDb {
    pool: EdgePool,
}

impl EdgeDb {
    pub fn new(pool: EdgePool) -> Self {
        Self { pool }
    }

    /// Build a store from configuration; an absent database URL yields a
    /// disabled store.
    pub fn from_config(config: &Config) -> std::result::Result<Self, Error> {
        Ok(Self::new(EdgePool::connect(&config.database)?))
    }

    pub fn pool(&self) -> &EdgePool {
        &self.pool
    }

    /// See [`resolve_entry`].
    pub async fn resolve_entry(&self, domain: &str, key: Option<&str>) -> Result<Option<Link>> {
        resolve_entry(self, domain, key).await
    }

    /// Generate a key unique within `domain`; see
    /// [`keygen::generate_random_key`].
    pub async fn generate_random_key(
        &self,
        domain: &str,
        options: &RandomKeyOptions,
    ) -> std::result::Result<String, Error> {
        keygen::generate_random_key(self, domain, options).await
    }
}

#[async_trait]
impl LinkStore for EdgeDb {
    async fn get_workspace(&self, workspace_id: &str) -> Result<Option<Workspace>> {
        let Some(pool) = self.pool.get() else {
            return Ok(None);
        };
        let mut conn = pool.acquire().await?;
        Workspaces::new(&mut conn).get_by_id(workspace_id).await
    }

    async fn increment_ai_usage(&self, workspace_id: &str) -> Result<u64> {
        let Some(pool) = self.pool.get() else {
            return Ok(0);
        };
        let mut conn = pool.acquire().await?;
        Workspaces::new(&mut conn)
            .increment_ai_usage(workspace_id)
            .await
    }

    async fn get_domain(&self, slug: &str) -> Result<Option<Domain>> {
        let Some(pool) = self.pool.get() else {
            return Ok(None);
        };
        let mut conn = pool.acquire().await?;
        Domains::new(&mut conn).get_by_slug(slug).await
    }

    async fn key_exists(&self, domain: &str, key: &str) -> Result<bool> {
        let Some(pool) = self.pool.get() else {
            return Ok(false);
        };
        let mut conn = pool.acquire().await?;
        Links::new(&mut conn).exists(domain, key).await
    }

    async fn user_exists(&self, user_id: &str) -> Result<bool> {
        let Some(pool) = self.pool.get() else {
            return Ok(false);
        };
        let mut conn = pool.acquire().await?;
        Users::new(&mut conn).exists(user_id).await
    }

    async fn get_link(&self, domain: &str, key: &str) -> Result<Option<Link>> {
        let Some(pool) = self.pool.get() else {
            return Ok(None);
        };
        let mut conn = pool.acquire().await?;
        Links::new(&mut conn).get_by_domain_and_key(domain, key).await
    }

    async fn get_link_by_url(&self, url: &str) -> Result<Option<Link>> {
        let Some(pool) = self.pool.get() else {
            return Ok(None);
        };
        let mut conn = pool.acquire().await?;
        Links::new(&mut conn).get_by_url(url).await
    }

    async fn get_affiliate(&self, project_id: &str, username: &str) -> Result<Option<Affiliate>> {
        let Some(pool) = self.pool.get() else {
            return Ok(None);
        };
        let mut conn = pool.acquire().await?;
        Affiliates::new(&mut conn)
            .get_by_username(project_id, username)
            .await
    }

    async fn get_user_by_api_key(&self, hashed_key: &str) -> Result<Option<ApiKeyUser>> {
        let Some(pool) = self.pool.get() else {
            return Ok(None);
        };
        let mut conn = pool.acquire().await?;
        Tokens::new(&mut conn).user_for_key(hashed_key).await
    }

    async fn touch_api_key(&self, hashed_key: &str, last_used: DateTime<Utc>) -> Result<u64> {
        let Some(pool) = self.pool.get() else {
            return Ok(0);
        };
        let mut conn = pool.acquire().await?;
        Tokens::new(&mut conn).touch(hashed_key, last_used).await
    }
}
