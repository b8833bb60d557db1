use teloxide::prelude::*;

use crate::constants::FILES_PAGE_SIZE;
use crate::database;
use crate::database::models::CatalogEntry;
use crate::handler::HandlerResult;
use crate::AppState;

/// Renders titles 1-indexed, one per line, in insertion order.
pub fn format_catalog_list(entries: &[CatalogEntry]) -> String {
    if entries.is_empty() {
        return "No movies".to_string();
    }
    entries
        .iter()
        .enumerate()
        .map(|(i, e)| format!("{}. {}", i + 1, e.title))
        .collect::<Vec<_>>()
        .join("\n")
}

/// `/files` (admin, silent otherwise): the newest `FILES_PAGE_SIZE` titles.
pub async fn run(bot: &Bot, state: &AppState, msg: &Message) -> HandlerResult {
    let Some(user) = msg.from() else {
        return Ok(());
    };
    if !state.admin.is_authorized(user.id) {
        return Ok(());
    }

    let total = database::catalog::count_entries(&state.db).await?;
    let offset = (total - FILES_PAGE_SIZE).max(0);
    let entries = database::catalog::list_entries(&state.db, FILES_PAGE_SIZE, offset).await?;
    bot.send_message(msg.chat.id, format_catalog_list(&entries))
        .await?;
    Ok(())
}
