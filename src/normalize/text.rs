//! Text cleanup helpers shared by the extractors

use url::Url;

/// Collapses runs of whitespace (including non-breaking spaces) into single
/// spaces and trims the ends.
pub fn collapse_whitespace(text: &str) -> String {
    text.replace('\u{a0}', " ")
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
}

/// Removes non-printable (control) characters from a string.
pub fn strip_control_chars(text: &str) -> String {
    text.chars().filter(|c| !c.is_control()).collect()
}

/// Assembles a description from the plain text chunks of a container
/// followed by `"text(href)"` annotations for each anchor inside it.
///
/// Plain text comes first, then the link annotations, each group in
/// document order. The chunks must not include the anchors' own text or
/// that text would appear twice. Empty chunks are skipped and the result
/// carries no control characters.
pub fn assemble_description(text_chunks: &[String], anchors: &[(Url, String)]) -> String {
    let mut parts: Vec<String> = text_chunks
        .iter()
        .map(|t| collapse_whitespace(t))
        .filter(|t| !t.is_empty())
        .collect();

    for (href, text) in anchors {
        parts.push(format!("{}({})", collapse_whitespace(text), href));
    }

    strip_control_chars(&parts.join(" "))
}
