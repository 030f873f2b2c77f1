//! HTTP fetching
//!
//! One shared client per process; every page fetch is a plain GET whose
//! non-2xx status or transport failure surfaces as an error for the caller
//! to handle. No retries here: retry/backoff policy belongs to the layer
//! above.

use crate::config::CrawlConfig;
use crate::ScrapeError;
use reqwest::Client;
use std::time::Duration;
use url::Url;

const USER_AGENT: &str = concat!("civic-cal/", env!("CARGO_PKG_VERSION"));

/// Builds the HTTP client used for all platform requests
pub fn build_http_client(config: &CrawlConfig) -> Result<Client, reqwest::Error> {
    Client::builder()
        .user_agent(USER_AGENT)
        .timeout(Duration::from_secs(config.request_timeout_secs))
        .connect_timeout(Duration::from_secs(10))
        .gzip(true)
        .brotli(true)
        .build()
}

/// Thin wrapper around the shared HTTP client
#[derive(Debug, Clone)]
pub struct Fetcher {
    client: Client,
}

impl Fetcher {
    pub fn new(config: &CrawlConfig) -> Result<Self, reqwest::Error> {
        Ok(Self {
            client: build_http_client(config)?,
        })
    }

    /// Fetches a page body, failing on transport errors and non-2xx statuses
    pub async fn fetch(&self, url: &Url) -> Result<String, ScrapeError> {
        let response =
            self.client
                .get(url.clone())
                .send()
                .await
                .map_err(|source| ScrapeError::Http {
                    url: url.to_string(),
                    source,
                })?;

        let status = response.status();
        if !status.is_success() {
            return Err(ScrapeError::Status {
                url: url.to_string(),
                code: status.as_u16(),
            });
        }

        response.text().await.map_err(|source| ScrapeError::Http {
            url: url.to_string(),
            source,
        })
    }
}
