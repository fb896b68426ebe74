use dotenvy::dotenv;
use std::net::SocketAddr;
use std::sync::Arc;
use teloxide::Bot;
use tokio::net::TcpListener;
use tower_http::cors::CorsLayer;
use tracing::info;

use common::logger;
use dispatch::BroadcastDispatcher;
use market_data::{BinanceTickerClient, TickerSource};
use storage::repositories::{SignalRepository, SubscriberRepository};
use storage::{SignalStore, SubscriberRegistry};
use strategy::SignalPolicy;

use crate::config::Config;
use crate::pipeline::SignalPipeline;
use crate::services::telegram_service::{self, TelegramSender};
use crate::state::AppState;

mod config;
mod error;
mod pipeline;
mod routes;
mod services;
mod state;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    logger::setup_logger();
    dotenv().ok();

    let config = Config::from_env()?;
    let pool = storage::db::connect(&config.database_url).await?;

    let store: Arc<dyn SignalStore> = Arc::new(SignalRepository::new(pool.clone()));
    let registry: Arc<dyn SubscriberRegistry> = Arc::new(SubscriberRepository::new(pool));
    let ticker: Arc<dyn TickerSource> = Arc::new(BinanceTickerClient::new());

    let bot = Bot::new(config.telegram_token.clone());
    let dispatcher = BroadcastDispatcher::new(Arc::new(TelegramSender::new(bot.clone())));

    let pipeline = SignalPipeline::new(
        ticker,
        store.clone(),
        registry.clone(),
        dispatcher,
        SignalPolicy::default(),
    );
    let state = Arc::new(AppState { pipeline });

    // The command listener and the HTTP server run as independent
    // units of work sharing only the storage pool.
    tokio::spawn(telegram_service::run_commands(bot, registry, store));

    let app = routes::router(state).layer(CorsLayer::permissive());
    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));

    info!("{} listening on http://{}", routes::SERVICE_NAME, addr);

    let listener = TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to install Ctrl+C handler: {}", e);
        return;
    }
    info!("Shutdown signal received, stopping");
}
