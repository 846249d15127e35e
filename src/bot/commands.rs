use std::sync::Arc;

use reqwest::Url;
use teloxide::prelude::*;
use teloxide::utils::command::BotCommands;

use crate::api::cat::{FetchError, ImageFetcher};
use crate::bot::reply::{Reply, ReplySink};
use crate::bot::{guarded, AppState, HandlerResult};

pub const CAT_APOLOGY: &str =
    "Sorry, I couldn't fetch a cat picture right now. Please try again later.";

#[derive(BotCommands, Clone, Debug, PartialEq)]
#[command(rename_rule = "lowercase", description = "Available commands:")]
pub enum BotCommand {
    #[command(description = "Greet you and point you here")]
    Start,
    #[command(description = "Show this list of commands")]
    Help,
    #[command(description = "Send a random cat picture")]
    Cat,
    #[command(description = "Say hello")]
    Hello,
}

pub async fn handle_command(
    bot: Bot,
    msg: Message,
    cmd: BotCommand,
    state: Arc<AppState>,
) -> HandlerResult {
    let first_name = msg
        .from
        .as_ref()
        .map(|u| u.first_name.clone())
        .unwrap_or_else(|| "there".to_string());

    tracing::debug!("Command {:?} from {} in chat {}", cmd, first_name, msg.chat.id.0);

    guarded(
        "command",
        run_command(cmd, &first_name, msg.chat.id, &state.images, &bot),
    )
    .await
}

pub async fn run_command<S>(
    cmd: BotCommand,
    first_name: &str,
    chat_id: ChatId,
    fetcher: &dyn ImageFetcher,
    sink: &S,
) -> HandlerResult
where
    S: ReplySink + ?Sized,
{
    let reply = respond(&cmd, first_name, fetcher).await;
    sink.deliver(chat_id, reply).await?;
    Ok(())
}

pub async fn respond(cmd: &BotCommand, first_name: &str, fetcher: &dyn ImageFetcher) -> Reply {
    match cmd {
        BotCommand::Start => Reply::Text(format!(
            "Hello {}! Use /help to see what I can do.",
            first_name
        )),
        BotCommand::Help => Reply::Text(BotCommand::descriptions().to_string()),
        BotCommand::Hello => Reply::Text(format!("Hello {}", first_name)),
        BotCommand::Cat => match cat_picture(fetcher).await {
            Ok(url) => Reply::Photo(url),
            Err(e) => {
                tracing::error!("Cat picture fetch failed: {}", e);
                Reply::Text(CAT_APOLOGY.to_string())
            }
        },
    }
}

async fn cat_picture(fetcher: &dyn ImageFetcher) -> Result<Url, FetchError> {
    let raw = fetcher.fetch_random_image().await?;
    Url::parse(&raw).map_err(|e| FetchError::UnexpectedShape(format!("bad url {:?}: {}", raw, e)))
}
