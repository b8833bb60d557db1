//! This module contains all functions for the append-only request log.
//! Rows are never mutated or deleted; reads come back newest-first.

use super::init::DbPool;
use super::models::RequestLogEntry;

pub async fn append(
    pool: &DbPool,
    user_id: i64,
    username: Option<&str>,
    query: &str,
) -> sqlx::Result<()> {
    sqlx::query("INSERT INTO request_logs (user_id, username, query) VALUES ($1, $2, $3)")
        .bind(user_id)
        .bind(username)
        .bind(query)
        .execute(pool)
        .await?;
    Ok(())
}

/// The `limit` most recent rows, most recent first.
pub async fn recent(pool: &DbPool, limit: i64) -> sqlx::Result<Vec<RequestLogEntry>> {
    sqlx::query_as(
        "SELECT user_id, username, query FROM request_logs ORDER BY log_id DESC LIMIT $1",
    )
    .bind(limit)
    .fetch_all(pool)
    .await
}
