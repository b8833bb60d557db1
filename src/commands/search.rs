use teloxide::prelude::*;
use teloxide::types::ParseMode;

use crate::handler::HandlerResult;

// Guide command only: the real search happens through inline queries.
pub async fn run(bot: &Bot, msg: &Message) -> HandlerResult {
    bot.send_message(msg.chat.id, "🔎 Use inline: `@bot MovieName 2023 1080p`")
        .parse_mode(ParseMode::Markdown)
        .await?;
    Ok(())
}
