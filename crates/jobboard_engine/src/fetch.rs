use std::time::Duration;

use reqwest::header::CACHE_CONTROL;
use tokio_util::sync::CancellationToken;

use crate::decode::parse_feed;
use crate::FeedError;
use jobboard_core::JobRecord;

#[derive(Debug, Clone)]
pub struct FetchSettings {
    pub connect_timeout: Duration,
    pub request_timeout: Duration,
}

impl Default for FetchSettings {
    fn default() -> Self {
        Self {
            connect_timeout: Duration::from_secs(10),
            request_timeout: Duration::from_secs(30),
        }
    }
}

#[async_trait::async_trait]
pub trait FeedFetcher: Send + Sync {
    /// Reads and parses the feed once. The token is checked cooperatively:
    /// a fetch that loses the race against cancellation returns
    /// [`FeedError::Cancelled`] and never a result.
    async fn fetch(
        &self,
        url: &str,
        cancel: &CancellationToken,
    ) -> Result<Vec<JobRecord>, FeedError>;
}

#[derive(Debug, Clone)]
pub struct ReqwestFeedFetcher {
    settings: FetchSettings,
}

impl ReqwestFeedFetcher {
    pub fn new(settings: FetchSettings) -> Self {
        Self { settings }
    }

    fn build_client(&self) -> Result<reqwest::Client, FeedError> {
        reqwest::Client::builder()
            .connect_timeout(self.settings.connect_timeout)
            .timeout(self.settings.request_timeout)
            .build()
            .map_err(|err| FeedError::Network(err.to_string()))
    }

    async fn read_feed(&self, url: &str) -> Result<Vec<JobRecord>, FeedError> {
        let client = self.build_client()?;
        let response = client
            .get(url)
            // The feed is regenerated in place; never serve a cached copy.
            .header(CACHE_CONTROL, "no-store")
            .send()
            .await
            .map_err(|err| FeedError::Network(err.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(FeedError::Status(status.as_u16()));
        }

        let bytes = response
            .bytes()
            .await
            .map_err(|err| FeedError::Network(err.to_string()))?;
        parse_feed(&bytes)
    }
}

#[async_trait::async_trait]
impl FeedFetcher for ReqwestFeedFetcher {
    async fn fetch(
        &self,
        url: &str,
        cancel: &CancellationToken,
    ) -> Result<Vec<JobRecord>, FeedError> {
        tokio::select! {
            _ = cancel.cancelled() => Err(FeedError::Cancelled),
            result = self.read_feed(url) => result,
        }
    }
}
