use async_trait::async_trait;
use reqwest::Url;
use teloxide::prelude::*;
use teloxide::types::{
    InlineQueryResult, InlineQueryResultArticle, InputFile, InputMessageContent,
    InputMessageContentText,
};

/// What a command handler wants sent back to the chat.
#[derive(Debug, Clone, PartialEq)]
pub enum Reply {
    Text(String),
    Photo(Url),
}

#[derive(Debug, Clone, PartialEq)]
pub struct InlineResult {
    pub id: String,
    pub title: String,
    pub content: String,
}

impl From<InlineResult> for InlineQueryResult {
    fn from(r: InlineResult) -> Self {
        InlineQueryResult::Article(InlineQueryResultArticle::new(
            r.id,
            r.title,
            InputMessageContent::Text(InputMessageContentText::new(r.content)),
        ))
    }
}

/// Outbound side of the bot. `Bot` talks to Telegram; tests record calls instead.
#[async_trait]
pub trait ReplySink: Send + Sync {
    async fn send_text(&self, chat_id: ChatId, text: String) -> anyhow::Result<()>;
    async fn send_photo(&self, chat_id: ChatId, url: Url) -> anyhow::Result<()>;
    async fn answer_inline(&self, query_id: String, results: Vec<InlineResult>)
        -> anyhow::Result<()>;

    async fn deliver(&self, chat_id: ChatId, reply: Reply) -> anyhow::Result<()> {
        match reply {
            Reply::Text(text) => self.send_text(chat_id, text).await,
            Reply::Photo(url) => self.send_photo(chat_id, url).await,
        }
    }
}

#[async_trait]
impl ReplySink for Bot {
    async fn send_text(&self, chat_id: ChatId, text: String) -> anyhow::Result<()> {
        self.send_message(chat_id, text).await?;
        Ok(())
    }

    async fn send_photo(&self, chat_id: ChatId, url: Url) -> anyhow::Result<()> {
        Requester::send_photo(self, chat_id, InputFile::url(url)).await?;
        Ok(())
    }

    async fn answer_inline(
        &self,
        query_id: String,
        results: Vec<InlineResult>,
    ) -> anyhow::Result<()> {
        let results: Vec<InlineQueryResult> = results.into_iter().map(Into::into).collect();
        self.answer_inline_query(query_id, results).await?;
        Ok(())
    }
}
