//! Process configuration, read once at startup from the environment.
//! A missing required variable aborts startup with an explicit message;
//! everything after bootstrap treats the values as immutable.

use std::env;

pub struct Config {
    /// Telegram Bot API token.
    pub bot_token: String,
    /// The single privileged user id allowed to run catalog and broadcast commands.
    pub admin_id: u64,
    /// Postgres connection string for the ledger store.
    pub database_url: String,
    /// Port for the keep-alive HTTP endpoint.
    pub port: u16,
}

impl Config {
    pub fn from_env() -> Self {
        Self {
            bot_token: env::var("BOT_TOKEN").expect("Expected BOT_TOKEN in the environment."),
            admin_id: env::var("ADMIN_ID")
                .expect("Expected ADMIN_ID in the environment.")
                .parse()
                .expect("ADMIN_ID must be a valid number."),
            database_url: env::var("DATABASE_URL")
                .expect("Expected DATABASE_URL in the environment."),
            port: env::var("PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(8080),
        }
    }
}
