//! Link arithmetic on escaped request paths.
//!
//! These operate on the escaped URL form, never on real filesystem paths.

/// Link to the listing containing `link` (keeps the trailing slash).
/// The parent of the top level is the site root.
pub fn parent_link(link: &str) -> String {
    let trimmed = link.trim_end_matches('/');
    match trimmed.rfind('/') {
        Some(idx) => trimmed[..=idx].to_string(),
        None => "/".to_string(),
    }
}

/// Last segment of an escaped link, decoded for display.
pub fn display_name(link: &str) -> String {
    let trimmed = link.trim_end_matches('/');
    let segment = trimmed.rsplit('/').next().unwrap_or(trimmed);
    urlencoding::decode(segment)
        .map(|s| s.into_owned())
        .unwrap_or_else(|_| segment.to_string())
}
