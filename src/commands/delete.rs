use teloxide::prelude::*;
use tracing::info;

use crate::database;
use crate::handler::HandlerResult;
use crate::AppState;

/// `/delete <title>` (admin, silent otherwise). The argument is a
/// case-insensitive substring, not an exact title, so one call can remove
/// several entries. The reply is the same generic acknowledgement whether
/// zero or many rows matched.
pub async fn run(bot: &Bot, state: &AppState, msg: &Message, args: &str) -> HandlerResult {
    let Some(user) = msg.from() else {
        return Ok(());
    };
    if !state.admin.is_authorized(user.id) {
        return Ok(());
    }
    let term = args.trim();
    if term.is_empty() {
        // An empty term would match every title; treat it as a usage error.
        bot.send_message(msg.chat.id, "⚠️ Usage: /delete <title>")
            .await?;
        return Ok(());
    }

    let removed = database::catalog::delete_entries(&state.db, term).await?;
    info!(target: "catalog.delete", term, removed, "catalog entries deleted");
    bot.send_message(msg.chat.id, "✅ Deleted entries").await?;
    Ok(())
}
