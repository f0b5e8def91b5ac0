//! Database models for workspaces.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A workspace (tenant) record, stored in the `Project` table.
///
/// The `aiUsage` counter is the only field this crate ever mutates, via
/// [`crate::db::handlers::Workspaces::increment_ai_usage`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct Workspace {
    pub id: String,
    pub name: String,
    pub slug: String,
    pub plan: String,
    #[sqlx(rename = "aiUsage")]
    pub ai_usage: i32,
    #[sqlx(rename = "aiLimit")]
    pub ai_limit: i32,
    #[sqlx(rename = "createdAt")]
    pub created_at: DateTime<Utc>,
}
