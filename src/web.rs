//! Keep-alive HTTP endpoint for hosting platforms that probe the process.
//! Runs as an independent task and shares no state with the bot logic.

use axum::{routing::get, Router};
use tokio::net::TcpListener;
use tracing::{error, info};

pub async fn serve(port: u16) {
    let app = Router::new().route("/", get(alive));
    let address = format!("0.0.0.0:{port}");

    let listener = match TcpListener::bind(&address).await {
        Ok(listener) => listener,
        Err(e) => {
            error!(%address, error = ?e, "failed to bind keep-alive listener");
            return;
        }
    };
    info!("Keep-alive endpoint running on {address}");

    if let Err(e) = axum::serve(listener, app).await {
        error!(error = ?e, "keep-alive server exited");
    }
}

async fn alive() -> &'static str {
    "✅ Bot is alive!"
}
