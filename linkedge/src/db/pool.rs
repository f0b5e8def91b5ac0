//! Database pool abstraction with a deliberate disabled mode.
//!
//! [`EdgePool`] wraps an optional SQLx MySQL pool. When no database URL is
//! configured the pool is *disabled*: every accessor built on top of it
//! short-circuits to its empty value without attempting any I/O. This is how
//! preview deployments and CI environments run without database access.
//!
//! The pool is an explicitly-owned handle injected into [`EdgeDb`], not a
//! process-wide global, so tests can substitute their own pool (or a
//! disabled one).
//!
//! Connections are established lazily: constructing the pool performs no
//! network I/O, only connection-string validation.
//!
//! [`EdgeDb`]: crate::db::handlers::store::EdgeDb

use std::time::Duration;

use sqlx::MySqlPool;
use sqlx::mysql::MySqlPoolOptions;
use url::Url;

use crate::{
    config::{DatabaseConfig, PoolSettings},
    db::errors::DbError,
    errors::Error,
};

/// An optional MySQL connection pool.
#[derive(Clone, Debug)]
pub struct EdgePool {
    inner: Option<MySqlPool>,
}

impl EdgePool {
    /// Build a pool from configuration.
    ///
    /// A missing URL yields a disabled pool. A present URL is validated
    /// (must parse, must use the `mysql` scheme) and turned into a lazy
    /// pool; the first connection is opened on first use.
    pub fn connect(config: &DatabaseConfig) -> Result<Self, Error> {
        let Some(url) = config.url.as_deref() else {
            return Ok(Self::disabled());
        };

        let parsed = Url::parse(url).map_err(|e| Error::InvalidDatabaseUrl {
            reason: e.to_string(),
        })?;
        if parsed.scheme() != "mysql" {
            return Err(Error::InvalidDatabaseUrl {
                reason: format!("unsupported scheme `{}`, expected `mysql`", parsed.scheme()),
            });
        }

        let pool = pool_options(&config.pool)
            .connect_lazy(url)
            .map_err(|e| Error::Database(DbError::from(e)))?;

        Ok(Self { inner: Some(pool) })
    }

    /// A pool with no backing database.
    pub fn disabled() -> Self {
        Self { inner: None }
    }

    /// Wrap an existing pool (integration tests, embedded setups).
    pub fn from_pool(pool: MySqlPool) -> Self {
        Self { inner: Some(pool) }
    }

    /// The underlying pool, or `None` when disabled.
    pub fn get(&self) -> Option<&MySqlPool> {
        self.inner.as_ref()
    }

    pub fn is_disabled(&self) -> bool {
        self.inner.is_none()
    }

    /// Close all database connections. No-op when disabled.
    pub async fn close(&self) {
        if let Some(pool) = &self.inner {
            pool.close().await;
        }
    }
}

fn pool_options(settings: &PoolSettings) -> MySqlPoolOptions {
    let mut options = MySqlPoolOptions::new()
        .max_connections(settings.max_connections)
        .min_connections(settings.min_connections)
        .acquire_timeout(Duration::from_secs(settings.acquire_timeout_secs));
    if settings.idle_timeout_secs > 0 {
        options = options.idle_timeout(Duration::from_secs(settings.idle_timeout_secs));
    }
    if settings.max_lifetime_secs > 0 {
        options = options.max_lifetime(Duration::from_secs(settings.max_lifetime_secs));
    }
    options
}
