//! List-request planning
//!
//! The platform's shared list view is queried per tenant with a sliding
//! date window: a short look-back (to catch recently passed meetings for
//! status transitions) and a long look-ahead (for scheduled ones), both
//! snapped to month starts to bound crawl volume.

use crate::config::{PlatformConfig, TenantConfig};
use crate::ConfigError;
use chrono::{Datelike, NaiveDate};
use url::Url;

/// Date literal format the platform expects in query parameters
const PLATFORM_DATE_FORMAT: &str = "%m/%d/%Y";

/// Months of look-back before the current month start
const LOOKBACK_MONTHS: i32 = 1;
/// Months of look-ahead after the current month start
const LOOKAHEAD_MONTHS: i32 = 6;

/// A planned list-page request for one tenant
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListRequest {
    pub url: Url,
    pub window_start: NaiveDate,
    pub window_end: NaiveDate,
}

/// Plans the list-page request for a tenant on a given day.
///
/// Pure function of `(tenant, platform, today)`: the window runs from the
/// first day of the month one month before `today` to the first day of the
/// month six months after, so `window_start <= today <= window_end` always
/// holds.
pub fn plan_list_request(
    tenant: &TenantConfig,
    platform: &PlatformConfig,
    today: NaiveDate,
) -> Result<ListRequest, ConfigError> {
    let window_start = shift_month_start(today, -LOOKBACK_MONTHS);
    let window_end = shift_month_start(today, LOOKAHEAD_MONTHS);

    let base = Url::parse(&platform.base_url)
        .map_err(|e| ConfigError::InvalidUrl(format!("Invalid base_url: {}", e)))?;
    let mut url = base
        .join(&platform.list_path)
        .map_err(|e| ConfigError::InvalidUrl(format!("Invalid list_path: {}", e)))?;

    url.query_pairs_mut()
        .append_pair("cid", &tenant.filter_token)
        .append_pair(
            "startDate",
            &window_start.format(PLATFORM_DATE_FORMAT).to_string(),
        )
        .append_pair(
            "endDate",
            &window_end.format(PLATFORM_DATE_FORMAT).to_string(),
        );

    Ok(ListRequest {
        url,
        window_start,
        window_end,
    })
}

/// Returns the first day of the month `delta` months away from `date`'s month.
fn shift_month_start(date: NaiveDate, delta: i32) -> NaiveDate {
    let months = date.year() * 12 + date.month() as i32 - 1 + delta;
    let year = months.div_euclid(12);
    let month = months.rem_euclid(12) as u32 + 1;
    // Day 1 of any month always exists
    NaiveDate::from_ymd_opt(year, month, 1).unwrap_or(date)
}
