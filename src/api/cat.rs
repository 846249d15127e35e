use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use serde::Deserialize;

use crate::config::AppConfig;

#[derive(Debug, thiserror::Error)]
pub enum FetchError {
    #[error("image API returned HTTP {0}")]
    HttpStatus(StatusCode),
    #[error("image API request failed: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("image API returned an unexpected body: {0}")]
    UnexpectedShape(String),
}

#[derive(Debug, Deserialize)]
struct CatImage {
    url: String,
}

/// Source of random picture URLs for `/cat`.
#[async_trait]
pub trait ImageFetcher: Send + Sync {
    async fn fetch_random_image(&self) -> Result<String, FetchError>;
}

pub struct CatApiClient {
    client: Client,
    endpoint: String,
}

impl CatApiClient {
    pub fn new(config: &AppConfig) -> anyhow::Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.http_timeout_secs))
            .build()?;

        Ok(Self {
            client,
            endpoint: config.cat_api_url.clone(),
        })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

#[async_trait]
impl ImageFetcher for CatApiClient {
    /// One GET, no retry. Returns the `url` of the first element.
    async fn fetch_random_image(&self) -> Result<String, FetchError> {
        let resp = self.client.get(&self.endpoint).send().await?;

        let status = resp.status();
        if !status.is_success() {
            return Err(FetchError::HttpStatus(status));
        }

        let body = resp.text().await?;
        first_image_url(&body)
    }
}

fn first_image_url(body: &str) -> Result<String, FetchError> {
    let images: Vec<CatImage> = serde_json::from_str(body)
        .map_err(|e| FetchError::UnexpectedShape(e.to_string()))?;

    images
        .into_iter()
        .next()
        .map(|img| img.url)
        .ok_or_else(|| FetchError::UnexpectedShape("empty image list".to_string()))
}
