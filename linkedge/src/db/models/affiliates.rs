//! Database models for affiliates.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// An affiliate registration within a workspace.
///
/// `(projectId, username)` is unique; `user_id` links the affiliate to a
/// platform user once they have claimed the registration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct Affiliate {
    pub id: String,
    pub username: String,
    pub email: String,
    #[sqlx(rename = "projectId")]
    pub project_id: String,
    #[sqlx(rename = "userId")]
    pub user_id: Option<String>,
    #[sqlx(rename = "createdAt")]
    pub created_at: DateTime<Utc>,
}
