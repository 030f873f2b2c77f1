//! Canonical meeting record and its enums
//!
//! [`Meeting`] is the sole externally observable output of the engine: one
//! fully assembled, immutable record per successfully extracted detail page.

pub mod identity;

pub use identity::{derive_status, meeting_id};

use chrono::NaiveDateTime;
use serde::Serialize;

/// Meeting classification, derived from the title
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Classification {
    Board,
    Committee,
    #[serde(rename = "City Council")]
    CityCouncil,
    #[serde(rename = "Not classified")]
    Unclassified,
}

/// Lifecycle status of a meeting, derived from page markers and the clock
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Status {
    Passed,
    Tentative,
    Confirmed,
    Cancelled,
}

/// A document or reference link attached to a meeting
#[derive(Debug, Clone, PartialEq, Eq, Serialize, serde::Deserialize)]
pub struct Link {
    pub href: String,
    pub title: String,
}

/// Where a meeting takes place
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct Location {
    pub name: String,
    pub address: String,
}

/// The canonical, normalized meeting record
///
/// Invariants: `title` is non-empty, `start` is always present,
/// `end` (if present) is >= `start`, and `id` is a pure function of the
/// tenant name and `start` so re-crawling the same meeting is idempotent.
#[derive(Debug, Clone, Serialize)]
pub struct Meeting {
    pub id: String,
    pub title: String,
    pub description: String,
    pub classification: Classification,
    pub status: Status,
    pub start: NaiveDateTime,
    pub end: Option<NaiveDateTime>,
    pub all_day: bool,
    pub time_notes: String,
    pub location: Location,
    pub links: Vec<Link>,
    pub source: String,
}
