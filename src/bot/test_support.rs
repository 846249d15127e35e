use std::sync::Mutex;

use async_trait::async_trait;
use reqwest::Url;
use teloxide::types::ChatId;

use crate::api::cat::{FetchError, ImageFetcher};
use crate::bot::reply::{InlineResult, ReplySink};

#[derive(Debug, Clone, PartialEq)]
pub enum Sent {
    Text(ChatId, String),
    Photo(ChatId, Url),
    Inline(String, Vec<InlineResult>),
}

#[derive(Default)]
pub struct RecordingSink {
    sent: Mutex<Vec<Sent>>,
}

impl RecordingSink {
    pub fn sent(&self) -> Vec<Sent> {
        self.sent.lock().unwrap().clone()
    }
}

#[async_trait]
impl ReplySink for RecordingSink {
    async fn send_text(&self, chat_id: ChatId, text: String) -> anyhow::Result<()> {
        self.sent.lock().unwrap().push(Sent::Text(chat_id, text));
        Ok(())
    }

    async fn send_photo(&self, chat_id: ChatId, url: Url) -> anyhow::Result<()> {
        self.sent.lock().unwrap().push(Sent::Photo(chat_id, url));
        Ok(())
    }

    async fn answer_inline(
        &self,
        query_id: String,
        results: Vec<InlineResult>,
    ) -> anyhow::Result<()> {
        self.sent
            .lock()
            .unwrap()
            .push(Sent::Inline(query_id, results));
        Ok(())
    }
}

pub enum StubFetcher {
    Ok(&'static str),
    Status(u16),
    Shape,
    Panics,
}

#[async_trait]
impl ImageFetcher for StubFetcher {
    async fn fetch_random_image(&self) -> Result<String, FetchError> {
        match self {
            StubFetcher::Ok(url) => Ok(url.to_string()),
            StubFetcher::Status(code) => Err(FetchError::HttpStatus(
                reqwest::StatusCode::from_u16(*code).unwrap(),
            )),
            StubFetcher::Shape => Err(FetchError::UnexpectedShape("empty image list".into())),
            StubFetcher::Panics => panic!("fetcher blew up"),
        }
    }
}
