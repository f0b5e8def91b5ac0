//! Database record structures matching the shared application schema.
//!
//! The schema is owned by the surrounding web application and uses camelCase
//! column names and PascalCase table names; the structs here map those onto
//! snake_case Rust fields with `#[sqlx(rename)]`. Decoding a row into one of
//! these structs is the schema-validation boundary: a row that does not match
//! the declared shape fails the query loudly instead of propagating
//! silently-wrong data.

pub mod affiliates;
pub mod domains;
pub mod links;
pub mod users;
pub mod workspaces;

pub use affiliates::Affiliate;
pub use domains::Domain;
pub use links::{GeoTargets, Link};
pub use users::ApiKeyUser;
pub use workspaces::Workspace;
