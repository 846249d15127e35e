pub mod commands;
pub mod inline;
pub mod reply;

#[cfg(test)]
pub(crate) mod test_support;

use std::future::Future;
use std::panic::AssertUnwindSafe;
use std::time::Duration;

use futures::FutureExt;
use teloxide::dispatching::{UpdateFilterExt, UpdateHandler};
use teloxide::dptree;
use teloxide::prelude::*;
use teloxide::update_listeners::Polling;

use crate::api::cat::CatApiClient;

pub type HandlerResult = Result<(), Box<dyn std::error::Error + Send + Sync>>;

/// Shared application state, accessible from all handlers. Read-only after startup.
pub struct AppState {
    pub images: CatApiClient,
}

/// Build the teloxide update handler tree. Anything neither branch accepts,
/// including unknown commands, falls through to the dispatcher's default handler.
pub fn build_handler() -> UpdateHandler<Box<dyn std::error::Error + Send + Sync + 'static>> {
    let command_handler = Update::filter_message()
        .filter_command::<commands::BotCommand>()
        .endpoint(commands::handle_command);

    let inline_handler = Update::filter_inline_query().endpoint(inline::handle_inline_query);

    dptree::entry()
        .branch(command_handler)
        .branch(inline_handler)
}

/// Long-polling listener. Any webhook left registered on the bot is removed first,
/// otherwise Telegram answers every getUpdates with a conflict.
pub async fn polling_listener(bot: Bot, poll_timeout: Duration) -> Polling<Bot> {
    Polling::builder(bot)
        .timeout(poll_timeout)
        .delete_webhook()
        .await
        .build()
}

/// Runs a handler body, turning a panic into a logged, dropped update so the
/// dispatch loop keeps going.
pub async fn guarded<F>(label: &'static str, fut: F) -> HandlerResult
where
    F: Future<Output = HandlerResult>,
{
    match AssertUnwindSafe(fut).catch_unwind().await {
        Ok(res) => res,
        Err(panic) => {
            let reason = panic
                .downcast_ref::<&str>()
                .map(|s| s.to_string())
                .or_else(|| panic.downcast_ref::<String>().cloned())
                .unwrap_or_else(|| "unknown panic".to_string());
            tracing::error!("{} handler panicked, update dropped: {}", label, reason);
            Ok(())
        }
    }
}
