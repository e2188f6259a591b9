use super::util::with_retry;
use crate::core::config::FeedConfig;
use crate::core::feed::PriceFeed;
use crate::core::quote::RawQuote;
use anyhow::Context;
use async_trait::async_trait;
use tracing::{debug, error, instrument};

/// Reads the price list as a JSON array from a fixed URL.
pub struct HttpPriceFeed {
    url: String,
    retries: usize,
    retry_delay_ms: u64,
    client: reqwest::Client,
}

impl HttpPriceFeed {
    pub fn new(url: &str) -> Self {
        Self {
            url: url.to_string(),
            retries: 0,
            retry_delay_ms: 0,
            client: reqwest::Client::new(),
        }
    }

    pub fn from_config(config: &FeedConfig) -> Self {
        Self::new(&config.url).with_retries(config.retries, config.retry_delay_ms)
    }

    pub fn with_retries(mut self, retries: usize, retry_delay_ms: u64) -> Self {
        self.retries = retries;
        self.retry_delay_ms = retry_delay_ms;
        self
    }

    pub fn url(&self) -> &str {
        &self.url
    }
}

#[async_trait]
impl PriceFeed for HttpPriceFeed {
    #[instrument(skip(self), fields(url = %self.url))]
    async fn fetch_quotes(&self) -> anyhow::Result<Vec<RawQuote>> {
        let response = with_retry(
            || async {
                self.client
                    .get(&self.url)
                    .send()
                    .await
                    .and_then(|r| r.error_for_status())
            },
            self.retries,
            self.retry_delay_ms,
        )
        .await
        .context("Price feed request failed")?;

        let response_text = response
            .text()
            .await
            .context("Failed to get response text")?;

        let quotes: Vec<RawQuote> = match serde_json::from_str(&response_text) {
            Ok(data) => data,
            Err(e) => {
                error!(
                    error = ?e,
                    response = %response_text,
                    "Failed to parse price feed response"
                );
                return Err(e).context("Price feed is not a JSON array of quotes");
            }
        };

        debug!(entries = quotes.len(), "Fetched price feed");
        Ok(quotes)
    }
}
