//! Shared identifier conventions.
//!
//! Workspace ids circulate outside the application with a `ws_` prefix
//! (e.g. `ws_cl7pj5kq4006835rbjlt2ofka`), while the database stores the raw
//! cuid as the `Project` primary key. Link keys use the sentinel `"_root"`
//! to address a domain's root destination rather than a stored link row.

/// External prefix carried by workspace ids.
pub const WORKSPACE_ID_PREFIX: &str = "ws_";

/// Sentinel key addressing a domain's root destination.
pub const ROOT_KEY: &str = "_root";

/// Strip the external `ws_` prefix from a workspace id, yielding the raw
/// database primary key. Ids without the prefix pass through unchanged.
pub fn strip_workspace_prefix(workspace_id: &str) -> &str {
    workspace_id
        .strip_prefix(WORKSPACE_ID_PREFIX)
        .unwrap_or(workspace_id)
}
