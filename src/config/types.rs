use crate::model::Link;
use serde::Deserialize;

/// Main configuration structure for civic-cal
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub crawler: CrawlConfig,
    pub platform: PlatformConfig,
    pub output: OutputConfig,
    #[serde(default, rename = "tenant")]
    pub tenants: Vec<TenantEntry>,
}

/// Crawl behavior configuration
#[derive(Debug, Clone, Deserialize)]
pub struct CrawlConfig {
    /// Maximum number of in-flight detail-page fetches per tenant
    #[serde(rename = "max-concurrent-details")]
    pub max_concurrent_details: usize,

    /// Per-request timeout in seconds
    #[serde(rename = "request-timeout-secs")]
    pub request_timeout_secs: u64,
}

/// The shared calendar platform all tenants publish through
#[derive(Debug, Clone, Deserialize)]
pub struct PlatformConfig {
    /// Base URL of the platform (e.g. "https://calendar.example.gov")
    #[serde(rename = "base-url")]
    pub base_url: String,

    /// Path of the shared list view
    #[serde(rename = "list-path")]
    pub list_path: String,
}

/// Output configuration
#[derive(Debug, Clone, Deserialize)]
pub struct OutputConfig {
    /// Path of the JSON-lines records file
    #[serde(rename = "records-path")]
    pub records_path: String,
}

/// One `[[tenant]]` table as it appears in the config file.
///
/// Every required field is optional here so that validation can report all
/// missing keys at once instead of failing on the first deserialize error.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct TenantEntry {
    /// Unique internal slug (e.g. "tulok_bocc")
    pub name: Option<String>,

    /// Full agency display name
    pub agency: Option<String>,

    /// The per-tenant identifier embedded in platform URLs and selectors
    #[serde(rename = "filter-token")]
    pub filter_token: Option<String>,

    /// Links prepended to every record for this tenant
    #[serde(default, rename = "default-links")]
    pub default_links: Vec<Link>,

    /// Free-text notes on the tenant's usual meeting schedule
    #[serde(default, rename = "time-notes")]
    pub time_notes: String,
}

/// A validated, immutable tenant configuration.
///
/// Constructed only by [`crate::config::validate_tenant`]; once built, all
/// required fields are guaranteed present.
#[derive(Debug, Clone)]
pub struct TenantConfig {
    pub name: String,
    pub agency: String,
    pub filter_token: String,
    pub default_links: Vec<Link>,
    pub time_notes: String,
}
