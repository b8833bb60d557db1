use teloxide::prelude::*;
use teloxide::types::ChatId;

use crate::handler::HandlerResult;
use crate::AppState;

/// `/reply <id> <msg>` (admin, silent otherwise): one direct send to the
/// given user id. A non-numeric id is a fatal error for this invocation;
/// the parse failure propagates instead of being dressed up.
pub async fn run(bot: &Bot, state: &AppState, msg: &Message, args: &str) -> HandlerResult {
    let Some(user) = msg.from() else {
        return Ok(());
    };
    if !state.admin.is_authorized(user.id) {
        return Ok(());
    }

    let mut parts = args.splitn(2, char::is_whitespace);
    let target: i64 = parts.next().unwrap_or("").parse()?;
    let text = parts.next().unwrap_or("").trim();

    state.notifier.send_to(ChatId(target), text).await?;
    bot.send_message(msg.chat.id, "✅ Sent").await?;
    Ok(())
}
