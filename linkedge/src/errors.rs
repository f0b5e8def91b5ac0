use crate::db::errors::DbError;
use thiserror::Error as ThisError;

/// Top-level error type for the edge data-access layer.
///
/// Not-found and disabled-mode outcomes are values (`None`, `false`, `0`),
/// never errors; this type only covers configuration problems, transport and
/// database failures, and key-space saturation during key generation.
#[derive(ThisError, Debug)]
pub enum Error {
    /// Configuration could not be loaded or parsed
    #[error(transparent)]
    Config(#[from] figment::Error),

    /// The configured database URL is not a usable MySQL connection string
    #[error("invalid database URL: {reason}")]
    InvalidDatabaseUrl { reason: String },

    /// Database operation error
    #[error(transparent)]
    Database(#[from] DbError),

    /// Random key generation exhausted its attempt budget without finding a
    /// free key
    #[error("no available key for domain {domain} after {attempts} attempts")]
    KeySpaceSaturated { domain: String, attempts: u32 },
}
