//! Routes inbound Telegram updates to the right command handler.
//!
//! Each update is classified exactly once: media messages go to the upload
//! handler, `/command` texts are parsed into a `Command` and dispatched,
//! everything else is ignored. Handlers are stateless per invocation; the
//! only cross-event state is what they read from the ledger store.

use std::str::FromStr;
use std::sync::Arc;

use teloxide::prelude::*;
use teloxide::types::InlineQuery;

use crate::commands;
use crate::constants::INLINE_CACHE_TIME_SECS;
use crate::services;
use crate::AppState;

/// Endpoint result type: a handler error is logged by the dispatcher's
/// error handler and never takes down the polling loop.
pub type HandlerResult = Result<(), Box<dyn std::error::Error + Send + Sync>>;

#[derive(Debug, PartialEq, Eq)]
pub enum Command {
    Start,
    Help,
    Search,
    Request,
    Upload,
    Files,
    Delete,
    Broadcast,
    Reply,
    Users,
    Logs,
    Unknown,
}

impl FromStr for Command {
    type Err = ();
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        // In group chats commands arrive as `name@botname`; strip the suffix.
        let name = s.split('@').next().unwrap_or(s);
        Ok(match name {
            "start" => Command::Start,
            "help" => Command::Help,
            "search" => Command::Search,
            "request" => Command::Request,
            "upload" => Command::Upload,
            "files" => Command::Files,
            "delete" => Command::Delete,
            "broadcast" => Command::Broadcast,
            "reply" => Command::Reply,
            "users" => Command::Users,
            "logs" => Command::Logs,
            _ => Command::Unknown,
        })
    }
}

pub async fn on_message(bot: Bot, state: Arc<AppState>, msg: Message) -> HandlerResult {
    if msg.from().map_or(true, |u| u.is_bot) {
        return Ok(());
    }

    // A file-bearing message is the second half of the /upload flow.
    if msg.video().is_some() || msg.document().is_some() {
        return commands::upload::handle_media(&bot, &state, &msg).await;
    }

    let Some(text) = msg.text() else {
        return Ok(());
    };
    let Some(body) = text.strip_prefix('/') else {
        return Ok(());
    };
    let mut parts = body.splitn(2, char::is_whitespace);
    let Some(name) = parts.next() else {
        return Ok(());
    };
    let args = parts.next().unwrap_or("").trim();

    match Command::from_str(name).unwrap_or(Command::Unknown) {
        Command::Start => commands::start::run(&bot, &state, &msg).await,
        Command::Help => commands::help::run(&bot, &msg).await,
        Command::Search => commands::search::run(&bot, &msg).await,
        Command::Request => commands::request::run(&bot, &state, &msg, args).await,
        Command::Upload => commands::upload::run(&bot, &state, &msg).await,
        Command::Files => commands::files::run(&bot, &state, &msg).await,
        Command::Delete => commands::delete::run(&bot, &state, &msg, args).await,
        Command::Broadcast => commands::broadcast::run(&bot, &state, &msg, args).await,
        Command::Reply => commands::reply::run(&bot, &state, &msg, args).await,
        Command::Users => commands::users::run(&bot, &state, &msg).await,
        Command::Logs => commands::logs::run(&bot, &state, &msg).await,
        Command::Unknown => Ok(()),
    }
}

pub async fn on_inline_query(bot: Bot, state: Arc<AppState>, q: InlineQuery) -> HandlerResult {
    let outcome =
        services::search::search_catalog(&state.db, &state.notifier, &state.admin, &q.from, &q.query)
            .await?;
    let results = services::search::build_inline_results(&outcome);
    bot.answer_inline_query(q.id, results)
        .cache_time(INLINE_CACHE_TIME_SECS)
        .await?;
    Ok(())
}
