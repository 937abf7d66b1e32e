use crate::error::{Result, ScanError};
use crate::url_builder::build_search_url;
use jobscout_core::{SearchConfig, SearchQuery};
use reqwest::Client;

/// Fetches raw result markup for one page of a search.
#[async_trait::async_trait]
pub trait PageFetcher: Send + Sync {
    async fn fetch(&self, query: &SearchQuery, offset: u32) -> Result<String>;
}

/// `PageFetcher` backed by the guest search endpoint.
pub struct HttpPageFetcher {
    client: Client,
    base_url: String,
}

impl HttpPageFetcher {
    pub fn new(config: &SearchConfig) -> Result<Self> {
        let timeout = config.request_timeout();
        let client = Client::builder()
            .timeout(timeout)
            .connect_timeout(timeout)
            .user_agent(config.user_agent.as_str())
            .build()
            .map_err(ScanError::Client)?;

        Ok(Self {
            client,
            base_url: config.base_url.clone(),
        })
    }
}

#[async_trait::async_trait]
impl PageFetcher for HttpPageFetcher {
    async fn fetch(&self, query: &SearchQuery, offset: u32) -> Result<String> {
        let url = build_search_url(&self.base_url, query, offset)?;
        tracing::debug!("Fetching search results: {}", url);

        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|source| ScanError::Transport { offset, source })?;

        let status = response.status();
        if !status.is_success() {
            return Err(ScanError::HttpStatus {
                offset,
                status: status.as_u16(),
            });
        }

        response
            .text()
            .await
            .map_err(|source| ScanError::Transport { offset, source })
    }
}
