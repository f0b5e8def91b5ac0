//! Database models for API-token user lookups.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// The user projection returned by hashed-API-key authentication: the result
/// of joining `User` against `Token` on the hashed key.
///
/// Full `User` rows are never fetched by this crate; existence checks and
/// this projection are the only reads against the `User` table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct ApiKeyUser {
    pub id: String,
    pub name: Option<String>,
    pub email: Option<String>,
}
