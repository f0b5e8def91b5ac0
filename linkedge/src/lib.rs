//! # linkedge: Edge Data Access for the Short-Link Platform
//!
//! `linkedge` is the data-access layer used by the platform's edge runtime.
//! It issues parameterized SQL statements against the shared MySQL database
//! (users, workspaces, domains, short links, API tokens, affiliates) and
//! shapes the rows into typed records, plus one generative piece:
//! collision-checked random short-key generation.
//!
//! ## Overview
//!
//! Every operation is a single round-trip query, or a bounded
//! generate-and-check loop in the case of key generation. There is no
//! protocol layer, no caching, and no retry logic here: connection pooling
//! is delegated to SQLx, and failure policy to the caller. The crate's job
//! is fidelity — canonicalizing identifiers the way the schema stores them
//! and decoding rows into honest types.
//!
//! Three conventions run through the whole surface:
//!
//! - **Disabled mode.** When no database URL is configured (preview
//!   deployments, CI), every operation returns its empty value (`None`,
//!   `false`, `0`) without attempting any I/O.
//! - **Key canonicalization.** Link keys are stored URI-decoded and
//!   punycode-encoded; every key-driven lookup normalizes its input the same
//!   way ([`keys::normalize_key`]), so percent-encoded and non-ASCII forms
//!   of the same key hit the same row.
//! - **Absence is a value.** Zero matching rows is `None` or `false`, never
//!   an error. Errors are reserved for transport and database failures,
//!   which propagate to the caller untouched.
//!
//! ## Architecture
//!
//! The **database layer** ([`db`]) uses the repository pattern: each entity
//! has a repository handling its queries, the [`db::models`] structs decode
//! rows at the boundary, and [`db::handlers::store::EdgeDb`] ties the
//! repositories together behind the [`LinkStore`] trait with the
//! disabled-mode short-circuit. The trait seam exists so the composite
//! operations — domain-or-link resolution and random key generation — and
//! embedding applications can run against a fake store in tests.
//!
//! **Key generation** ([`keygen`]) draws alphanumeric candidates and checks
//! them for collisions, widening to a longer identifier after repeated
//! collisions and failing with a saturation error at the attempt cap.
//!
//! ## Quick Start
//!
//! ```no_run
//! use linkedge::{Config, EdgeDb};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     linkedge::telemetry::init_telemetry();
//!
//!     // DATABASE_URL absent -> disabled mode, lookups return None
//!     let config = Config::load()?;
//!     let db = EdgeDb::from_config(&config)?;
//!
//!     if let Some(link) = db.resolve_entry("acme.sh", Some("launch")).await? {
//!         println!("{} -> {}", link.key, link.url);
//!     }
//!     Ok(())
//! }
//! ```
//!
//! ## Database Setup
//!
//! The production schema is owned by the surrounding web application. For
//! integration tests and local development the bundled migrations recreate
//! the relevant surface:
//!
//! ```ignore
//! linkedge::migrator().run(&pool).await?;
//! ```

pub mod config;
pub mod db;
pub mod errors;
pub mod keygen;
pub mod keys;
pub mod telemetry;
pub mod types;

pub use config::Config;
pub use db::handlers::store::{EdgeDb, LinkStore, resolve_entry};
pub use db::models::{Affiliate, ApiKeyUser, Domain, GeoTargets, Link, Workspace};
pub use db::pool::EdgePool;
pub use errors::Error;
pub use keygen::{RandomKeyOptions, generate_random_key};
pub use types::ROOT_KEY;

/// Get the linkedge database migrator
pub fn migrator() -> sqlx::migrate::Migrator {
    sqlx::migrate!("./migrations")
}
