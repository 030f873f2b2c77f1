//! Fetching, page access, and the list→detail extraction pipeline

pub mod detail;
pub mod fetcher;
pub mod list;
pub mod page;
pub mod pipeline;

pub use detail::extract_record;
pub use fetcher::Fetcher;
pub use list::extract_detail_links;
pub use page::RawPage;
pub use pipeline::{CrawlStats, CrawlerHandle};
