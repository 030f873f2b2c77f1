//! Location assembly from the platform's optional address sub-fields

use crate::model::Location;
use crate::normalize::text::collapse_whitespace;

/// The five optional address components a detail page may carry.
/// Absent components are simply empty strings.
#[derive(Debug, Clone, Default)]
pub struct LocationParts {
    pub name: String,
    pub street: String,
    pub locality: String,
    pub region: String,
    pub postal: String,
}

/// Assembles a [`Location`] from the optional sub-fields.
///
/// The address joins street, locality, and "region postal" with ", ",
/// skipping empty components, so an address with only a region/postal never
/// produces a leading comma.
pub fn assemble_address(parts: &LocationParts) -> Location {
    let region_postal = [parts.region.as_str(), parts.postal.as_str()]
        .iter()
        .map(|p| collapse_whitespace(p))
        .filter(|p| !p.is_empty())
        .collect::<Vec<_>>()
        .join(" ");

    let address = [
        collapse_whitespace(&parts.street),
        collapse_whitespace(&parts.locality),
        region_postal,
    ]
    .into_iter()
    .filter(|p| !p.is_empty())
    .collect::<Vec<_>>()
    .join(", ");

    Location {
        name: collapse_whitespace(&parts.name),
        address,
    }
}
