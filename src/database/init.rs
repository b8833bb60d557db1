//! This module defines shared database types.
//! The connection pool itself is created once in `main.rs` and handed to
//! handlers through `AppState`.

use sqlx::{Pool, Postgres};

/// A type alias for the database connection pool (`Pool<Postgres>`).
/// This is used throughout the data-access layer to provide a consistent,
/// clear name for the shared connection state.
pub type DbPool = Pool<Postgres>;
