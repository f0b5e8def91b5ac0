//! Database layer for the edge data-access surface.
//!
//! This module implements the data access layer using SQLx with MySQL.
//! It follows the Repository pattern to provide clean abstractions over
//! database operations.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────┐
//! │  EdgeDb     │  (LinkStore implementation, disabled-mode short-circuit)
//! └──────┬──────┘
//!        │
//!        ↓
//! ┌─────────────┐
//! │ Repositories│  (db::handlers - per-entity queries)
//! └──────┬──────┘
//!        │
//!        ↓
//! ┌─────────────┐
//! │   Models    │  (db::models - database records)
//! └──────┬──────┘
//!        │
//!        ↓
//! ┌─────────────┐
//! │    MySQL    │
//! └─────────────┘
//! ```
//!
//! # Modules
//!
//! - [`handlers`]: Repository implementations for the lookup and update
//!   operations, plus the [`handlers::store`] seam
//! - [`models`]: Database record structures matching the shared schema
//! - [`errors`]: Database-specific error types
//! - [`pool`]: The injected, optionally-disabled connection handle
//!
//! # Connections
//!
//! Every operation is a single round-trip query, so repositories are created
//! from a plain pool connection rather than a transaction:
//!
//! ```ignore
//! let mut conn = pool.acquire().await?;
//! let mut links = Links::new(&mut conn);
//! let link = links.get_by_domain_and_key("acme.sh", "launch").await?;
//! ```
//!
//! The schema itself is owned by the surrounding web application; the
//! migrations shipped with this crate ([`crate::migrator`]) recreate the
//! relevant surface for integration tests and local development.

pub mod errors;
pub mod handlers;
pub mod models;
pub mod pool;
