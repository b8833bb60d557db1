//! This module contains all functions for the media catalog collection.
//! It is the single source of truth for inserting, listing, matching, and
//! deleting catalog entries. Matching is case-insensitive substring
//! containment against the title; insertion order (`entry_id`) is the only
//! ordering anywhere in the catalog.

use super::init::DbPool;
use super::models::CatalogEntry;

/// Escapes LIKE wildcards so a user-supplied term matches literally, then
/// wraps it for substring containment. Postgres treats backslash as the
/// default LIKE escape character.
pub fn contains_pattern(term: &str) -> String {
    let mut escaped = String::with_capacity(term.len());
    for ch in term.chars() {
        if matches!(ch, '%' | '_' | '\\') {
            escaped.push('\\');
        }
        escaped.push(ch);
    }
    format!("%{escaped}%")
}

pub async fn insert_entry(pool: &DbPool, title: &str, file_ref: &str) -> sqlx::Result<()> {
    sqlx::query("INSERT INTO catalog_entries (title, file_ref) VALUES ($1, $2)")
        .bind(title)
        .bind(file_ref)
        .execute(pool)
        .await?;
    Ok(())
}

/// Entries in insertion order. `limit` and `offset` page the most recent
/// window for administrator review.
pub async fn list_entries(pool: &DbPool, limit: i64, offset: i64) -> sqlx::Result<Vec<CatalogEntry>> {
    sqlx::query_as(
        "SELECT title, file_ref FROM catalog_entries ORDER BY entry_id LIMIT $1 OFFSET $2",
    )
    .bind(limit)
    .bind(offset)
    .fetch_all(pool)
    .await
}

pub async fn count_entries(pool: &DbPool) -> sqlx::Result<i64> {
    sqlx::query_scalar("SELECT COUNT(*) FROM catalog_entries")
        .fetch_one(pool)
        .await
}

/// All entries whose title contains `term`, case-insensitively, in
/// insertion order. An empty result is a valid, non-error outcome.
pub async fn find_entries(pool: &DbPool, term: &str) -> sqlx::Result<Vec<CatalogEntry>> {
    sqlx::query_as(
        "SELECT title, file_ref FROM catalog_entries WHERE title ILIKE $1 ORDER BY entry_id",
    )
    .bind(contains_pattern(term))
    .fetch_all(pool)
    .await
}

/// Deletes every entry whose title contains `term` (case-insensitive
/// substring, so a short term can remove several entries at once).
/// Returns the number of rows removed, which may be zero.
pub async fn delete_entries(pool: &DbPool, term: &str) -> sqlx::Result<u64> {
    let result = sqlx::query("DELETE FROM catalog_entries WHERE title ILIKE $1")
        .bind(contains_pattern(term))
        .execute(pool)
        .await?;
    Ok(result.rows_affected())
}
