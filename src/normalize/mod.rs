//! Field normalizers: pure functions turning raw extracted strings into
//! typed values. No I/O anywhere in this module tree.

pub mod classify;
pub mod datetime;
pub mod location;
pub mod text;

pub use classify::classify_title;
pub use datetime::parse_meeting_times;
pub use location::{assemble_address, LocationParts};
pub use text::{collapse_whitespace, strip_control_chars};
