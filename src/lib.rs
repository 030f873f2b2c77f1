//! civic-cal: a multi-tenant meeting calendar scraper
//!
//! This crate extracts government meeting schedules from a shared calendar
//! platform. Each tenant (agency) is identified by a filter token; the engine
//! plans a windowed list request per tenant, walks list→detail links, and
//! normalizes every detail page into one canonical [`model::Meeting`] record.

pub mod config;
pub mod crawler;
pub mod model;
pub mod normalize;
pub mod output;
pub mod registry;
pub mod request;

use thiserror::Error;

/// Main error type for civic-cal operations
#[derive(Debug, Error)]
pub enum ScrapeError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("HTTP error for {url}: {source}")]
    Http { url: String, source: reqwest::Error },

    #[error("HTTP status {code} for {url}")]
    Status { url: String, code: u16 },

    #[error(transparent)]
    Extraction(#[from] ExtractionError),

    #[error("Output error: {0}")]
    Output(#[from] output::OutputError),
}

/// Configuration-specific errors
///
/// All of these are fatal at registry build time; none can occur once a
/// crawl is running.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse TOML: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Tenant '{tenant}' is missing required field(s): {}", fields.join(", "))]
    MissingFields {
        tenant: String,
        fields: Vec<&'static str>,
    },

    #[error("Duplicate tenant name '{0}'")]
    DuplicateName(String),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Invalid URL in config: {0}")]
    InvalidUrl(String),
}

/// A required field could not be parsed from a specific detail page.
///
/// Scoped to that one page: the record is dropped and crawling of sibling
/// pages continues.
#[derive(Debug, Error)]
#[error("Failed to extract '{field}' from {url}: {reason}")]
pub struct ExtractionError {
    pub url: String,
    pub field: &'static str,
    pub reason: String,
}

impl ExtractionError {
    pub fn new(url: &url::Url, field: &'static str, reason: impl Into<String>) -> Self {
        Self {
            url: url.to_string(),
            field,
            reason: reason.into(),
        }
    }
}

/// Result type alias for civic-cal operations
pub type Result<T> = std::result::Result<T, ScrapeError>;

/// Result type alias for configuration operations
pub type ConfigResult<T> = std::result::Result<T, ConfigError>;

// Re-export commonly used types
pub use config::{Config, TenantConfig};
pub use model::{Classification, Link, Location, Meeting, Status};
pub use registry::Registry;
