//! Outbound message delivery to individual users and to the whole user set.
//!
//! Delivery goes through the `Deliver` trait so tests can substitute a
//! failing transport; production uses `BotDeliver`, a thin wrapper around
//! `teloxide::Bot`. There is exactly one attempt per recipient: no retry,
//! no confirmation, no dead-letter handling.

use async_trait::async_trait;
use teloxide::prelude::*;
use teloxide::types::ChatId;
use teloxide::RequestError;
use tracing::warn;

/// Single-attempt message transport.
#[async_trait]
pub trait Deliver: Send + Sync {
    async fn deliver(&self, chat: ChatId, text: &str) -> Result<(), RequestError>;
}

/// Production transport backed by the Telegram Bot API.
pub struct BotDeliver {
    bot: Bot,
}

impl BotDeliver {
    pub fn new(bot: Bot) -> Self {
        Self { bot }
    }
}

#[async_trait]
impl Deliver for BotDeliver {
    async fn deliver(&self, chat: ChatId, text: &str) -> Result<(), RequestError> {
        self.bot.send_message(chat, text.to_owned()).await?;
        Ok(())
    }
}

/// What happened to a broadcast: every id was attempted exactly once, and
/// the ones that failed are collected rather than silently discarded so
/// partial-failure behavior stays observable.
#[derive(Debug)]
pub struct BroadcastReport {
    pub attempted: usize,
    pub failed: Vec<i64>,
}

pub struct Notifier<D = BotDeliver> {
    transport: D,
}

impl<D: Deliver> Notifier<D> {
    pub fn new(transport: D) -> Self {
        Self { transport }
    }

    /// One delivery attempt to one chat; the error propagates to the caller.
    pub async fn send_to(&self, chat: ChatId, text: &str) -> Result<(), RequestError> {
        self.transport.deliver(chat, text).await
    }

    /// Delivers `text` to every recipient, tolerating individual failures:
    /// one blocked or vanished recipient must not abort the batch.
    pub async fn broadcast(&self, recipients: &[i64], text: &str) -> BroadcastReport {
        let mut failed = Vec::new();
        for &id in recipients {
            if let Err(e) = self.transport.deliver(ChatId(id), text).await {
                warn!(target: "notify.broadcast", chat_id = id, error = ?e, "delivery failed; continuing");
                failed.push(id);
            }
        }
        BroadcastReport {
            attempted: recipients.len(),
            failed,
        }
    }
}
