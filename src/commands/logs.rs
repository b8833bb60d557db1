use teloxide::prelude::*;

use crate::constants::RECENT_LOGS_LIMIT;
use crate::database;
use crate::database::models::RequestLogEntry;
use crate::handler::HandlerResult;
use crate::AppState;

/// Renders request rows newest-first as `username (userId): query`.
pub fn format_request_logs(rows: &[RequestLogEntry]) -> String {
    if rows.is_empty() {
        return "No requests".to_string();
    }
    rows.iter()
        .map(|r| {
            format!(
                "{} ({}): {}",
                r.username.as_deref().unwrap_or("unknown"),
                r.user_id,
                r.query
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}

// `/logs` (admin, silent otherwise): the most recent request-log rows.
pub async fn run(bot: &Bot, state: &AppState, msg: &Message) -> HandlerResult {
    let Some(user) = msg.from() else {
        return Ok(());
    };
    if !state.admin.is_authorized(user.id) {
        return Ok(());
    }
    let rows = database::requests::recent(&state.db, RECENT_LOGS_LIMIT).await?;
    bot.send_message(msg.chat.id, format_request_logs(&rows))
        .await?;
    Ok(())
}
