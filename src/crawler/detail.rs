//! Detail-page extraction
//!
//! Composes the field normalizers into one [`Meeting`] per detail page.
//! Only the title and the start date are mandatory; every other field
//! defaults quietly when its element is missing from the page.

use crate::config::TenantConfig;
use crate::crawler::page::RawPage;
use crate::model::{derive_status, meeting_id, Link, Meeting};
use crate::normalize::text::assemble_description;
use crate::normalize::{classify_title, parse_meeting_times, assemble_address, LocationParts};
use crate::ExtractionError;
use chrono::NaiveDateTime;

const TITLE: &str = ".meeting-detail h2.meeting-title";
const DESCRIPTION: &str = "div.meeting-description";
const DESCRIPTION_ANCHORS: &str = "div.meeting-description a";
const DATE: &str = "span.meeting-date";
const TIME: &str = "span.meeting-time";
const STATUS_NOTE: &str = "span.meeting-status";
const LOCATION_NAME: &str = ".meeting-location .location-name";
const LOCATION_STREET: &str = ".meeting-location .location-street";
const LOCATION_CITY: &str = ".meeting-location .location-city";
const LOCATION_STATE: &str = ".meeting-location .location-state";
const LOCATION_ZIP: &str = ".meeting-location .location-zip";
const AGENDA_DOWNLOAD: &str = "a.agenda-download";
const DOCUMENT_ANCHORS: &str = "div.meeting-documents a";

/// Extracts one meeting record from a fetched detail page.
///
/// `now` is the reference clock for status derivation. Fails with an
/// [`ExtractionError`] naming the field when the title or the start time
/// cannot be produced; the caller drops that page and moves on.
pub fn extract_record(
    page: &RawPage,
    tenant: &TenantConfig,
    now: NaiveDateTime,
) -> Result<Meeting, ExtractionError> {
    let title = page
        .first_text(TITLE)
        .ok_or_else(|| ExtractionError::new(page.url(), "title", "no title on page"))?;

    let description = assemble_description(
        &page.text_chunks(DESCRIPTION),
        &page.anchors(DESCRIPTION_ANCHORS),
    );

    let date_text = page
        .first_text(DATE)
        .ok_or_else(|| ExtractionError::new(page.url(), "start", "no date on page"))?;
    let time_text = page.first_text(TIME).unwrap_or_default();
    let (start, end) = parse_meeting_times(&date_text, &time_text)
        .map_err(|(field, reason)| ExtractionError::new(page.url(), field, reason))?;

    let location = assemble_address(&LocationParts {
        name: page.first_text(LOCATION_NAME).unwrap_or_default(),
        street: page.first_text(LOCATION_STREET).unwrap_or_default(),
        locality: page.first_text(LOCATION_CITY).unwrap_or_default(),
        region: page.first_text(LOCATION_STATE).unwrap_or_default(),
        postal: page.first_text(LOCATION_ZIP).unwrap_or_default(),
    });

    let note = page.first_text(STATUS_NOTE).unwrap_or_default();

    Ok(Meeting {
        id: meeting_id(&tenant.name, start),
        classification: classify_title(&title),
        status: derive_status(start, now, &note),
        title,
        description,
        start,
        end,
        all_day: false,
        time_notes: tenant.time_notes.clone(),
        location,
        links: extract_links(page, tenant),
        source: page.url().to_string(),
    })
}

/// Builds the record's link list: the tenant's configured defaults first
/// (copied, never aliased), then the agenda download if present, then every
/// anchor in the documents container. All hrefs are absolute.
fn extract_links(page: &RawPage, tenant: &TenantConfig) -> Vec<Link> {
    let mut links = tenant.default_links.clone();

    if let Some(href) = page.attr(AGENDA_DOWNLOAD, "href") {
        if let Some(resolved) = page.resolve(&href) {
            links.push(Link {
                href: resolved.to_string(),
                title: "Agenda".to_string(),
            });
        }
    }

    for (href, text) in page.anchors(DOCUMENT_ANCHORS) {
        let title = if text.is_empty() {
            "Document".to_string()
        } else {
            text
        };
        links.push(Link {
            href: href.to_string(),
            title,
        });
    }

    links
}
