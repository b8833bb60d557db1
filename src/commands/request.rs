use teloxide::prelude::*;

use crate::database;
use crate::handler::HandlerResult;
use crate::util::display_name;
use crate::AppState;

/// `/request <movie>`: append a row to the request log, alert the admin,
/// acknowledge the requester. An empty request is a usage error and writes
/// nothing.
pub async fn run(bot: &Bot, state: &AppState, msg: &Message, args: &str) -> HandlerResult {
    let Some(user) = msg.from() else {
        return Ok(());
    };
    let text = args.trim();
    if text.is_empty() {
        bot.send_message(msg.chat.id, "⚠️ Usage: /request <movie>")
            .await?;
        return Ok(());
    }

    database::requests::append(
        &state.db,
        user.id.0 as i64,
        user.username.as_deref(),
        text,
    )
    .await?;
    state
        .notifier
        .send_to(
            state.admin.chat_id(),
            &format!("🎬 Request: {}\n👤 {} ({})", text, display_name(user), user.id),
        )
        .await?;
    bot.send_message(msg.chat.id, "✅ Request sent to admin!")
        .await?;
    Ok(())
}
