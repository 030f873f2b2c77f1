//! List-page traversal
//!
//! All tenants share one list document; each tenant's meetings sit in a
//! container whose id is parameterized by the tenant's filter token. That
//! scoping is what keeps one tenant's crawl from ingesting another
//! tenant's meetings.

use crate::config::TenantConfig;
use crate::crawler::page::RawPage;
use url::Url;

/// Extracts detail-page URLs for one tenant from a fetched list page.
///
/// Yields links in document order, resolved to absolute URLs. Re-fetching
/// the same list page yields the same links; no dedup is performed here.
pub fn extract_detail_links(page: &RawPage, tenant: &TenantConfig) -> Vec<Url> {
    let selector = format!(
        "tbody[id=\"{}-0\"] a.meeting-link",
        tenant.filter_token
    );

    page.anchors(&selector)
        .into_iter()
        .map(|(href, _)| href)
        .collect()
}
