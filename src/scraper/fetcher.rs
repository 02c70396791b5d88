use crate::config::AppConfig;
use crate::model::ScraperError;
use crate::scraper::Scraper;

use reqwest::Client;
use std::time::Duration;

pub struct FetcherImpl {
    client: Client,
}

impl FetcherImpl {
    pub fn new(config: &AppConfig) -> Result<Self, ScraperError> {
        let client = Client::builder()
            .user_agent(&config.user_agent)
            .timeout(Duration::from_secs(config.request_timeout_secs))
            .build()
            .map_err(|e| ScraperError::Http(e.to_string()))?;

        Ok(Self { client })
    }
}

#[async_trait::async_trait]
impl Scraper for FetcherImpl {
    /// One GET per call. No retries; the caller decides what a failure means.
    async fn fetch(&self, url: &str) -> Result<String, ScraperError> {
        let response = self.client.get(url).send().await.map_err(|e| {
            if e.is_timeout() {
                ScraperError::Timeout
            } else {
                ScraperError::Http(e.to_string())
            }
        })?;

        let status = response.status();
        if !status.is_success() {
            return Err(ScraperError::Status(status.as_u16()));
        }

        response
            .text()
            .await
            .map_err(|e| ScraperError::Http(e.to_string()))
    }
}
