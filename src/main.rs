use std::sync::Arc;
use std::time::Duration;

use teloxide::prelude::*;
use teloxide::utils::command::BotCommands;
use tracing_subscriber::EnvFilter;

mod api;
mod bot;
mod config;

use api::cat::CatApiClient;
use bot::commands::BotCommand;
use config::AppConfig;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env
    dotenvy::dotenv().ok();

    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    tracing::info!("🐱 Starting cat/echo bot...");

    let config = AppConfig::from_env();
    if config.has_placeholder_token() {
        tracing::warn!("TELEGRAM_BOT_TOKEN is not set; Telegram will reject the placeholder token");
    }
    tracing::info!(
        "Config loaded. Username: {}, webhook URL: {}",
        config.telegram_bot_username,
        config.webhook_url
    );

    let images = CatApiClient::new(&config)?;
    tracing::info!("Cat pictures from {}", images.endpoint());

    let state = Arc::new(bot::AppState { images });

    // Create the Telegram bot
    let bot = Bot::new(&config.telegram_bot_token);

    if let Err(e) = bot.set_my_commands(BotCommand::bot_commands()).await {
        tracing::warn!("Could not register the command list with Telegram: {}", e);
    }

    let listener =
        bot::polling_listener(bot.clone(), Duration::from_secs(config.poll_timeout_secs)).await;

    // Build the dispatcher
    let handler = bot::build_handler();

    Dispatcher::builder(bot, handler)
        .dependencies(dptree::deps![state])
        .default_handler(|upd| async move {
            tracing::debug!("No handler for update {:?}", upd.id);
        })
        .error_handler(LoggingErrorHandler::with_custom_text(
            "An error has occurred in a handler",
        ))
        .enable_ctrlc_handler()
        .build()
        .dispatch_with_listener(
            listener,
            LoggingErrorHandler::with_custom_text("An error from the update listener"),
        )
        .await;

    tracing::info!("Bot stopped.");
    Ok(())
}
