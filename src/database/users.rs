//! This module contains all functions for the known-users collection.
//! The user set is monotonically non-decreasing: ids are recorded on first
//! interaction and never mutated or deleted.

use super::init::DbPool;

/// Records a user id iff it is not already known. Safe to call on every
/// interaction; a duplicate call is a no-op, not an error.
pub async fn ensure_user(pool: &DbPool, user_id: i64) -> sqlx::Result<()> {
    sqlx::query("INSERT INTO users (user_id) VALUES ($1) ON CONFLICT (user_id) DO NOTHING")
        .bind(user_id)
        .execute(pool)
        .await?;
    Ok(())
}

pub async fn count_users(pool: &DbPool) -> sqlx::Result<i64> {
    sqlx::query_scalar("SELECT COUNT(*) FROM users")
        .fetch_one(pool)
        .await
}

/// Every known user id, for broadcast fan-out.
pub async fn list_user_ids(pool: &DbPool) -> sqlx::Result<Vec<i64>> {
    sqlx::query_scalar("SELECT user_id FROM users ORDER BY user_id")
        .fetch_all(pool)
        .await
}
