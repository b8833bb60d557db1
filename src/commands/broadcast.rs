use teloxide::prelude::*;
use tracing::warn;

use crate::database;
use crate::handler::HandlerResult;
use crate::AppState;

/// `/broadcast <msg>` (admin, silent otherwise): one delivery attempt per
/// known user. The acknowledgement reports how many recipients were
/// attempted, not how many deliveries succeeded.
pub async fn run(bot: &Bot, state: &AppState, msg: &Message, args: &str) -> HandlerResult {
    let Some(user) = msg.from() else {
        return Ok(());
    };
    if !state.admin.is_authorized(user.id) {
        return Ok(());
    }
    let text = args.trim();
    if text.is_empty() {
        bot.send_message(msg.chat.id, "⚠️ Usage: /broadcast <msg>")
            .await?;
        return Ok(());
    }

    let ids = database::users::list_user_ids(&state.db).await?;
    let report = state.notifier.broadcast(&ids, text).await;
    if !report.failed.is_empty() {
        warn!(
            target: "broadcast",
            failed = report.failed.len(),
            attempted = report.attempted,
            "some broadcast deliveries failed"
        );
    }
    bot.send_message(
        msg.chat.id,
        format!("✅ Broadcasted to {} users", report.attempted),
    )
    .await?;
    Ok(())
}
