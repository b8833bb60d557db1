//! This module defines the shared state and policy types used throughout
//! the application. An `Arc<AppState>` is injected into every dispatcher
//! endpoint instead of living in a process-wide global, so components can
//! be exercised in isolation.

use sqlx::PgPool;
use teloxide::types::{ChatId, UserId};

use crate::services::notify::{BotDeliver, Notifier};

/// Authorization policy for admin-only commands.
///
/// The bot recognizes exactly one privileged identity, supplied via
/// configuration. Wrapping it in a policy type keeps a multi-admin
/// extension a contained change.
#[derive(Debug, Clone, Copy)]
pub struct AdminPolicy {
    admin_id: UserId,
}

impl AdminPolicy {
    pub fn new(admin_id: UserId) -> Self {
        Self { admin_id }
    }

    pub fn is_authorized(&self, user_id: UserId) -> bool {
        user_id == self.admin_id
    }

    /// Chat id for direct notifications to the administrator.
    pub fn chat_id(&self) -> ChatId {
        ChatId(self.admin_id.0 as i64)
    }
}

/// The central, shared state of the application.
pub struct AppState {
    /// The connection pool for the PostgreSQL ledger store.
    pub db: PgPool,
    /// Who may run catalog and broadcast commands.
    pub admin: AdminPolicy,
    /// Outbound message delivery to users and the administrator.
    pub notifier: Notifier<BotDeliver>,
}
