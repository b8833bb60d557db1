//! The static help menu, plus the single command table that keeps the help
//! text, the router, and the platform-side command registration in sync.

use teloxide::prelude::*;
use teloxide::types::BotCommand;

use crate::handler::HandlerResult;

pub struct CommandInfo {
    pub name: &'static str,
    /// The `/name <args>` form shown in the help text.
    pub usage: &'static str,
    /// One-line description shown in the help text.
    pub description: &'static str,
    /// Short label used for platform-side command registration.
    pub menu: &'static str,
    pub admin_only: bool,
}

pub const COMMANDS: &[CommandInfo] = &[
    CommandInfo {
        name: "start",
        usage: "/start",
        description: "Start the bot",
        menu: "Start",
        admin_only: false,
    },
    CommandInfo {
        name: "help",
        usage: "/help",
        description: "Show commands",
        menu: "Help",
        admin_only: false,
    },
    CommandInfo {
        name: "search",
        usage: "/search",
        description: "Inline guide",
        menu: "Inline Guide",
        admin_only: false,
    },
    CommandInfo {
        name: "request",
        usage: "/request <movie>",
        description: "Request a movie",
        menu: "Request",
        admin_only: false,
    },
    CommandInfo {
        name: "upload",
        usage: "/upload",
        description: "Upload movie",
        menu: "Admin Upload",
        admin_only: true,
    },
    CommandInfo {
        name: "files",
        usage: "/files",
        description: "List movies",
        menu: "Admin Files",
        admin_only: true,
    },
    CommandInfo {
        name: "delete",
        usage: "/delete <title>",
        description: "Delete movie",
        menu: "Admin Delete",
        admin_only: true,
    },
    CommandInfo {
        name: "broadcast",
        usage: "/broadcast <msg>",
        description: "Message all users",
        menu: "Admin MsgAll",
        admin_only: true,
    },
    CommandInfo {
        name: "reply",
        usage: "/reply <id> <msg>",
        description: "Reply to user",
        menu: "Admin Reply",
        admin_only: true,
    },
    CommandInfo {
        name: "users",
        usage: "/users",
        description: "User count",
        menu: "Admin Users",
        admin_only: true,
    },
    CommandInfo {
        name: "logs",
        usage: "/logs",
        description: "Recent requests",
        menu: "Admin Logs",
        admin_only: true,
    },
];

/// All command names, for consistency checks in tests.
pub fn all_command_names() -> Vec<&'static str> {
    COMMANDS.iter().map(|c| c.name).collect()
}

/// The full help text: public commands first, then the admin section.
pub fn render_help() -> String {
    let mut lines: Vec<String> = COMMANDS
        .iter()
        .filter(|c| !c.admin_only)
        .map(|c| format!("{} – {}", c.usage, c.description))
        .collect();
    lines.push("🔒 Admin only:".to_string());
    lines.extend(
        COMMANDS
            .iter()
            .filter(|c| c.admin_only)
            .map(|c| format!("{} – {}", c.usage, c.description)),
    );
    lines.join("\n")
}

/// The command list registered with Telegram at startup.
pub fn bot_commands() -> Vec<BotCommand> {
    COMMANDS
        .iter()
        .map(|c| BotCommand::new(c.name, c.menu))
        .collect()
}

pub async fn run(bot: &Bot, msg: &Message) -> HandlerResult {
    bot.send_message(msg.chat.id, render_help()).await?;
    Ok(())
}
