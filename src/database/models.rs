//! Contains the data structures that map to ledger tables or query results.

/// One stored media item: a title plus the opaque platform file reference.
/// Titles are not unique; duplicates are permitted by design.
#[derive(sqlx::FromRow, Debug, Clone)]
pub struct CatalogEntry {
    pub title: String,
    pub file_ref: String,
}

/// One row of the append-only movie-request log.
#[derive(sqlx::FromRow, Debug, Clone)]
pub struct RequestLogEntry {
    pub user_id: i64,
    pub username: Option<String>,
    pub query: String,
}
