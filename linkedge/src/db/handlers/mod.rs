//! Repository implementations for database access.
//!
//! Each repository wraps a SQLx connection, binds identifiers into one
//! parameterized statement, and maps the first matching row into a model
//! from [`crate::db::models`]. Absence is a value (`None`/`false`), and the
//! two write operations report rows affected.
//!
//! # Available Repositories
//!
//! - [`Workspaces`]: workspace lookup and AI-usage increment
//! - [`Domains`]: domain lookup by slug
//! - [`Links`]: link lookups and key-existence checks
//! - [`Users`]: user existence checks
//! - [`Tokens`]: hashed-API-key lookups and last-used updates
//! - [`Affiliates`]: affiliate lookup by workspace and username
//!
//! The [`store`] module ties the repositories together behind the
//! [`store::LinkStore`] trait and its pool-holding implementation
//! [`store::EdgeDb`].

pub mod affiliates;
pub mod domains;
pub mod links;
pub mod store;
pub mod tokens;
pub mod users;
pub mod workspaces;

pub use affiliates::Affiliates;
pub use domains::Domains;
pub use links::Links;
pub use store::{EdgeDb, LinkStore};
pub use tokens::Tokens;
pub use users::Users;
pub use workspaces::Workspaces;
