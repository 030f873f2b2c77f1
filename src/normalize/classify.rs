//! Title-based meeting classification

use crate::model::Classification;

/// Classifies a meeting by case-insensitive substring match on its title.
///
/// Priority is fixed: "board" before "committee"/"commission" before
/// "council"; the first match wins. A title containing both "board" and
/// "council" classifies as Board.
pub fn classify_title(title: &str) -> Classification {
    let title = title.to_lowercase();

    if title.contains("board") {
        Classification::Board
    } else if title.contains("committee") || title.contains("commission") {
        Classification::Committee
    } else if title.contains("council") {
        Classification::CityCouncil
    } else {
        Classification::Unclassified
    }
}
