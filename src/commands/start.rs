use teloxide::prelude::*;
use teloxide::types::ParseMode;

use crate::database;
use crate::handler::HandlerResult;
use crate::AppState;

// Registers the caller as a known user (idempotent) and sends the welcome.
pub async fn run(bot: &Bot, state: &AppState, msg: &Message) -> HandlerResult {
    let Some(user) = msg.from() else {
        return Ok(());
    };
    database::users::ensure_user(&state.db, user.id.0 as i64).await?;
    bot.send_message(
        msg.chat.id,
        "🎬 Welcome! Use inline: `@bot MovieName` or /help",
    )
    .parse_mode(ParseMode::Markdown)
    .await?;
    Ok(())
}
