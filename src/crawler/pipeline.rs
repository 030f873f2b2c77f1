//! Per-tenant crawl pipeline
//!
//! A [`CrawlerHandle`] binds one validated tenant configuration to the
//! platform and crawl settings. Its `run` walks the pipeline: plan the list
//! request, fetch the list page, then fan out over the detail links with a
//! bounded number of in-flight fetches, emitting each finished record on
//! the caller's channel as extraction completes. Emission order is not
//! guaranteed.

use crate::config::{CrawlConfig, PlatformConfig, TenantConfig};
use crate::crawler::detail::extract_record;
use crate::crawler::fetcher::Fetcher;
use crate::crawler::list::extract_detail_links;
use crate::crawler::page::RawPage;
use crate::model::Meeting;
use crate::request::plan_list_request;
use crate::ScrapeError;
use chrono::Local;
use futures::stream::{self, StreamExt};
use tokio::sync::mpsc;

/// Counters for one tenant's crawl run
#[derive(Debug, Clone, Copy, Default)]
pub struct CrawlStats {
    /// Detail pages attempted (fetched or failed)
    pub pages_visited: usize,
    /// Records successfully extracted and emitted
    pub records_emitted: usize,
    /// Pages dropped because a required field could not be extracted
    pub extraction_failures: usize,
}

/// One independently runnable crawler, bound to a single tenant
#[derive(Debug, Clone)]
pub struct CrawlerHandle {
    tenant: TenantConfig,
    platform: PlatformConfig,
    crawl: CrawlConfig,
}

impl CrawlerHandle {
    pub fn new(tenant: TenantConfig, platform: PlatformConfig, crawl: CrawlConfig) -> Self {
        Self {
            tenant,
            platform,
            crawl,
        }
    }

    pub fn tenant(&self) -> &TenantConfig {
        &self.tenant
    }

    /// Runs the full list→detail pipeline for this tenant.
    ///
    /// A list-fetch failure aborts the run with the error. A detail-fetch
    /// or extraction failure drops only that page; siblings continue. Each
    /// record is fully assembled before it is sent, so cancelling this
    /// future never leaves a partial record on the channel.
    pub async fn run(
        &self,
        fetcher: &Fetcher,
        tx: mpsc::Sender<Meeting>,
    ) -> Result<CrawlStats, ScrapeError> {
        let today = Local::now().date_naive();
        let request = plan_list_request(&self.tenant, &self.platform, today)?;

        tracing::info!(
            tenant = %self.tenant.name,
            url = %request.url,
            window_start = %request.window_start,
            window_end = %request.window_end,
            "Fetching meeting list"
        );

        let body = fetcher.fetch(&request.url).await?;
        let links = {
            let page = RawPage::parse(&body, request.url.clone());
            extract_detail_links(&page, &self.tenant)
        };

        tracing::info!(
            tenant = %self.tenant.name,
            count = links.len(),
            "Found detail links"
        );

        let now = Local::now().naive_local();
        let mut results = stream::iter(links)
            .map(|link| async move {
                let body = fetcher.fetch(&link).await?;
                let record = {
                    let page = RawPage::parse(&body, link);
                    extract_record(&page, &self.tenant, now)
                };
                record.map_err(ScrapeError::from)
            })
            .buffer_unordered(self.crawl.max_concurrent_details);

        let mut stats = CrawlStats::default();
        while let Some(result) = results.next().await {
            stats.pages_visited += 1;
            match result {
                Ok(meeting) => {
                    if tx.send(meeting).await.is_err() {
                        tracing::warn!(tenant = %self.tenant.name, "Record receiver closed");
                        break;
                    }
                    stats.records_emitted += 1;
                }
                Err(ScrapeError::Extraction(e)) => {
                    stats.extraction_failures += 1;
                    tracing::warn!(tenant = %self.tenant.name, error = %e, "Dropping page");
                }
                Err(e) => {
                    tracing::warn!(tenant = %self.tenant.name, error = %e, "Detail fetch failed");
                }
            }
        }

        tracing::info!(
            tenant = %self.tenant.name,
            pages = stats.pages_visited,
            records = stats.records_emitted,
            dropped = stats.extraction_failures,
            "Crawl finished"
        );

        Ok(stats)
    }
}
