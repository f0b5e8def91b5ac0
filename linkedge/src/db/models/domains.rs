//! Database models for custom domains.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A registered custom domain.
///
/// `target` is the destination the bare domain redirects to; `kind` is the
/// redirect mode for that root destination (`"redirect"` or `"rewrite"`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct Domain {
    pub id: String,
    pub slug: String,
    pub verified: bool,
    #[sqlx(rename = "primary")]
    pub primary: bool,
    pub archived: bool,
    pub target: Option<String>,
    #[sqlx(rename = "type")]
    pub kind: String,
    #[sqlx(rename = "projectId")]
    pub project_id: String,
    #[sqlx(rename = "createdAt")]
    pub created_at: DateTime<Utc>,
}
