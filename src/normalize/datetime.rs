//! Date and time parsing for meeting schedules
//!
//! The platform renders dates like "01/15/2024" and times like "2:00 PM"
//! or a dash range "2:00 PM - 4:00 PM". Both fields arrive as separate
//! strings and are combined into naive (timezone-free) local datetimes.

use crate::normalize::text::collapse_whitespace;
use chrono::{Duration, NaiveDate, NaiveDateTime, NaiveTime};

const DATE_FORMAT: &str = "%m/%d/%Y";
// Some pages omit the space before the meridiem ("2:00PM")
const TIME_FORMATS: [&str; 2] = ["%I:%M %p", "%I:%M%p"];

/// Parses the date and time cells of a meeting into `(start, end)`.
///
/// A dash in the time text splits it into a start/end range; without a dash
/// there is no end time. An absent time cell means a date-only meeting that
/// starts at midnight. A range that crosses midnight ("11:00 PM - 1:00 AM")
/// rolls the end forward one day so `end >= start` always holds.
///
/// Returns `Err((field, reason))` naming which field failed to parse.
pub fn parse_meeting_times(
    date_text: &str,
    time_text: &str,
) -> Result<(NaiveDateTime, Option<NaiveDateTime>), (&'static str, String)> {
    let date_text = collapse_whitespace(date_text);
    let date = NaiveDate::parse_from_str(&date_text, DATE_FORMAT)
        .map_err(|e| ("start", format!("bad date '{}': {}", date_text, e)))?;

    let time_text = collapse_whitespace(time_text);
    if time_text.is_empty() {
        return Ok((date.and_time(NaiveTime::MIN), None));
    }

    let (start_text, end_text) = match time_text.split_once('-') {
        Some((left, right)) => (left.trim().to_string(), Some(right.trim().to_string())),
        None => (time_text, None),
    };

    let start_time = parse_time(&start_text)
        .ok_or_else(|| ("start", format!("bad time '{}'", start_text)))?;
    let start = date.and_time(start_time);

    let end = match end_text {
        Some(text) => {
            let end_time =
                parse_time(&text).ok_or_else(|| ("end", format!("bad time '{}'", text)))?;
            let mut end = date.and_time(end_time);
            if end < start {
                end += Duration::days(1);
            }
            Some(end)
        }
        None => None,
    };

    Ok((start, end))
}

fn parse_time(text: &str) -> Option<NaiveTime> {
    TIME_FORMATS
        .iter()
        .find_map(|fmt| NaiveTime::parse_from_str(text, fmt).ok())
}
