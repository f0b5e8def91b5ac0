//! Database models for short links.

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use sqlx::types::Json;

use crate::types::ROOT_KEY;

use super::domains::Domain;

/// Geo-targeting rules: ISO country code to destination URL.
pub type GeoTargets = HashMap<String, String>;

/// A short link.
///
/// `(domain, key)` is unique; `key` is stored URI-decoded and
/// punycode-encoded (see [`crate::keys::normalize_key`]).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct Link {
    pub id: String,
    pub domain: String,
    pub key: String,
    pub url: String,
    pub archived: bool,
    #[sqlx(rename = "expiresAt")]
    pub expires_at: Option<DateTime<Utc>>,
    pub password: Option<String>,
    pub proxy: bool,
    pub title: Option<String>,
    pub description: Option<String>,
    pub image: Option<String>,
    pub rewrite: bool,
    /// iOS-specific destination override
    pub ios: Option<String>,
    /// Android-specific destination override
    pub android: Option<String>,
    pub geo: Option<Json<GeoTargets>>,
    #[sqlx(rename = "userId")]
    pub user_id: Option<String>,
    #[sqlx(rename = "projectId")]
    pub project_id: Option<String>,
    #[sqlx(rename = "publicStats")]
    pub public_stats: bool,
    #[sqlx(rename = "createdAt")]
    pub created_at: DateTime<Utc>,
}

impl Link {
    /// Synthesize the root entry of a domain: the record returned when a
    /// lookup addresses the bare domain rather than a stored link row. The
    /// key is forced to the root sentinel and the URL comes from the domain's
    /// target (empty when the domain has no target configured).
    pub fn root_of(domain: Domain) -> Self {
        Self {
            id: domain.id,
            domain: domain.slug,
            key: ROOT_KEY.to_string(),
            url: domain.target.unwrap_or_default(),
            archived: domain.archived,
            expires_at: None,
            password: None,
            proxy: false,
            title: None,
            description: None,
            image: None,
            rewrite: domain.kind == "rewrite",
            ios: None,
            android: None,
            geo: None,
            user_id: None,
            project_id: Some(domain.project_id),
            public_stats: false,
            created_at: domain.created_at,
        }
    }
}
