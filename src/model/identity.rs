//! Record identity and lifecycle status derivation
//!
//! Both functions are pure: the id depends only on the tenant name and the
//! start time, and the status only on the start time, the clock, and the
//! status note text carried on the page.

use crate::model::Status;
use chrono::NaiveDateTime;

/// Words in a status note that mark a meeting as cancelled
const CANCELLED_MARKERS: [&str; 3] = ["cancel", "postpon", "reschedul"];

/// Builds the stable record identifier for a meeting.
///
/// Two crawls of the same meeting produce the same id (idempotent upsert
/// key downstream), while two tenants' meetings at the same instant never
/// collide because the tenant name is part of the key.
pub fn meeting_id(tenant_name: &str, start: NaiveDateTime) -> String {
    format!("{}/{}", tenant_name, start.format("%Y%m%d%H%M"))
}

/// Derives the lifecycle status of a meeting.
///
/// Precedence: an explicit cancellation marker in `note` overrides
/// everything; otherwise a meeting that has already started is `Passed`;
/// otherwise a confirmation marker yields `Confirmed`; the default is
/// `Tentative`.
pub fn derive_status(start: NaiveDateTime, now: NaiveDateTime, note: &str) -> Status {
    let note = note.to_lowercase();

    if CANCELLED_MARKERS.iter().any(|m| note.contains(m)) {
        return Status::Cancelled;
    }

    if start < now {
        return Status::Passed;
    }

    if note.contains("confirm") {
        Status::Confirmed
    } else {
        Status::Tentative
    }
}
