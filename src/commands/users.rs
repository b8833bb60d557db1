use teloxide::prelude::*;

use crate::database;
use crate::handler::HandlerResult;
use crate::AppState;

// `/users` (admin, silent otherwise): total count of known users.
pub async fn run(bot: &Bot, state: &AppState, msg: &Message) -> HandlerResult {
    let Some(user) = msg.from() else {
        return Ok(());
    };
    if !state.admin.is_authorized(user.id) {
        return Ok(());
    }
    let count = database::users::count_users(&state.db).await?;
    bot.send_message(msg.chat.id, format!("👥 Users: {count}"))
        .await?;
    Ok(())
}
