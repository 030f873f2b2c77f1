use crate::config::types::{Config, CrawlConfig, PlatformConfig, TenantConfig, TenantEntry};
use crate::ConfigError;
use url::Url;

/// Validates the entire configuration
pub fn validate(config: &Config) -> Result<(), ConfigError> {
    validate_crawl_config(&config.crawler)?;
    validate_platform_config(&config.platform)?;

    if config.output.records_path.is_empty() {
        return Err(ConfigError::Validation(
            "records_path cannot be empty".to_string(),
        ));
    }

    // Tenant entries are re-validated (and turned into TenantConfig values)
    // at registry build time; checking here keeps config loading fail-fast.
    for entry in &config.tenants {
        validate_tenant(entry)?;
    }

    Ok(())
}

/// Validates one tenant entry and produces the immutable [`TenantConfig`].
///
/// Every absent required key is reported in a single error, not just the
/// first. A tenant that fails here must never reach the network layer.
pub fn validate_tenant(entry: &TenantEntry) -> Result<TenantConfig, ConfigError> {
    let mut missing = Vec::new();

    if is_blank(&entry.name) {
        missing.push("name");
    }
    if is_blank(&entry.agency) {
        missing.push("agency");
    }
    if is_blank(&entry.filter_token) {
        missing.push("filter-token");
    }

    if !missing.is_empty() {
        return Err(ConfigError::MissingFields {
            tenant: entry
                .name
                .clone()
                .unwrap_or_else(|| "<unnamed>".to_string()),
            fields: missing,
        });
    }

    let name = entry.name.clone().unwrap_or_default();
    let filter_token = entry.filter_token.clone().unwrap_or_default();

    // The token is spliced into URLs and DOM selectors, so restrict it to
    // characters that are inert in both.
    if !filter_token
        .chars()
        .all(|c| c.is_alphanumeric() || c == '-' || c == '_')
    {
        return Err(ConfigError::Validation(format!(
            "Tenant '{}' has an invalid filter-token '{}': only alphanumerics, '-' and '_' are allowed",
            name, filter_token
        )));
    }

    for link in &entry.default_links {
        Url::parse(&link.href).map_err(|e| {
            ConfigError::InvalidUrl(format!(
                "Tenant '{}' default link '{}': {}",
                name, link.href, e
            ))
        })?;
    }

    Ok(TenantConfig {
        name,
        agency: entry.agency.clone().unwrap_or_default(),
        filter_token,
        default_links: entry.default_links.clone(),
        time_notes: entry.time_notes.clone(),
    })
}

fn is_blank(field: &Option<String>) -> bool {
    field.as_deref().map_or(true, |s| s.trim().is_empty())
}

fn validate_crawl_config(config: &CrawlConfig) -> Result<(), ConfigError> {
    if config.max_concurrent_details < 1 || config.max_concurrent_details > 64 {
        return Err(ConfigError::Validation(format!(
            "max_concurrent_details must be between 1 and 64, got {}",
            config.max_concurrent_details
        )));
    }

    if config.request_timeout_secs < 1 {
        return Err(ConfigError::Validation(format!(
            "request_timeout_secs must be >= 1, got {}",
            config.request_timeout_secs
        )));
    }

    Ok(())
}

fn validate_platform_config(config: &PlatformConfig) -> Result<(), ConfigError> {
    let url = Url::parse(&config.base_url)
        .map_err(|e| ConfigError::InvalidUrl(format!("Invalid base_url: {}", e)))?;

    if url.scheme() != "https" && url.scheme() != "http" {
        return Err(ConfigError::Validation(format!(
            "base_url must be http(s), got '{}'",
            config.base_url
        )));
    }

    if !config.list_path.starts_with('/') {
        return Err(ConfigError::Validation(format!(
            "list_path must start with '/', got '{}'",
            config.list_path
        )));
    }

    Ok(())
}
