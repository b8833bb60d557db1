//! The two-step upload flow: `/upload` replies with instructions, and the
//! next file-bearing message from the admin is stored as a catalog entry.
//! Authorization UX differs on purpose between the two entry points: the
//! command refuses loudly, the media handler ignores non-admin senders.

use teloxide::prelude::*;

use crate::database;
use crate::handler::HandlerResult;
use crate::AppState;

pub async fn run(bot: &Bot, state: &AppState, msg: &Message) -> HandlerResult {
    let Some(user) = msg.from() else {
        return Ok(());
    };
    if !state.admin.is_authorized(user.id) {
        bot.send_message(msg.chat.id, "⛔ Admin only.").await?;
        return Ok(());
    }
    bot.send_message(msg.chat.id, "📤 Send movie file with caption as title")
        .await?;
    Ok(())
}

/// Stores a media message as a catalog entry. Silent no-op for anyone but
/// the admin; a message without a video or document attachment is rejected
/// and nothing is written.
pub async fn handle_media(bot: &Bot, state: &AppState, msg: &Message) -> HandlerResult {
    let Some(user) = msg.from() else {
        return Ok(());
    };
    if !state.admin.is_authorized(user.id) {
        return Ok(());
    }

    let file_ref = msg
        .video()
        .map(|v| v.file.id.clone())
        .or_else(|| msg.document().map(|d| d.file.id.clone()));
    let Some(file_ref) = file_ref else {
        bot.send_message(msg.chat.id, "⚠️ Send video/document").await?;
        return Ok(());
    };

    let title = msg.caption().unwrap_or("Untitled");
    database::catalog::insert_entry(&state.db, title, &file_ref).await?;
    bot.send_message(msg.chat.id, "✅ Movie uploaded").await?;
    Ok(())
}
