use std::sync::Arc;

use sqlx::postgres::PgPoolOptions;
use teloxide::error_handlers::LoggingErrorHandler;
use teloxide::prelude::*;
use teloxide::types::UserId;
use tracing::{info, warn};
use tracing_subscriber::{fmt, EnvFilter};

use cinevault_bot::commands;
use cinevault_bot::config::Config;
use cinevault_bot::handler;
use cinevault_bot::model::{AdminPolicy, AppState};
use cinevault_bot::services::notify::{BotDeliver, Notifier};
use cinevault_bot::web;

#[tokio::main]
async fn main() {
    dotenv::dotenv().ok();
    fmt().with_env_filter(EnvFilter::from_default_env()).init();

    let config = Config::from_env();

    let db = PgPoolOptions::new()
        .max_connections(5)
        .connect(&config.database_url)
        .await
        .expect("Error connecting to the database.");
    sqlx::migrate!("./migrations")
        .run(&db)
        .await
        .expect("Error running database migrations.");

    // The liveness endpoint runs independently of the bot loop.
    tokio::spawn(web::serve(config.port));

    let bot = Bot::new(&config.bot_token);
    let state = Arc::new(AppState {
        db,
        admin: AdminPolicy::new(UserId(config.admin_id)),
        notifier: Notifier::new(BotDeliver::new(bot.clone())),
    });

    if let Err(e) = bot.set_my_commands(commands::help::bot_commands()).await {
        warn!(error = ?e, "failed to register bot commands with Telegram");
    }

    info!("✅ Bot started");

    let routes = dptree::entry()
        .branch(Update::filter_message().endpoint(handler::on_message))
        .branch(Update::filter_inline_query().endpoint(handler::on_inline_query));

    Dispatcher::builder(bot, routes)
        .dependencies(dptree::deps![state])
        .default_handler(|_| async {})
        .error_handler(LoggingErrorHandler::with_custom_text(
            "Error while handling update",
        ))
        .enable_ctrlc_handler()
        .build()
        .dispatch()
        .await;
}
