//! Request path normalization.
//!
//! Every inbound path is reduced to a canonical, decoded, traversal-free
//! relative form before any root lookup happens. The order is load-bearing:
//! percent-decoding runs first, lexical cleaning second, so an encoded
//! `%2e%2e` cannot survive cleaning as a literal `..` segment.

use std::borrow::Cow;
use std::path::{Component, Path};

/// A slash-separated, decoded, lexically cleaned relative path.
///
/// The empty string is the site root. No segment is `.` or `..`, and there
/// is no leading or trailing separator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NormalizedPath(String);

impl NormalizedPath {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_root(&self) -> bool {
        self.0.is_empty()
    }

    /// Path segments, in order. Empty for the site root.
    pub fn segments(&self) -> impl Iterator<Item = &str> {
        self.0.split('/').filter(|s| !s.is_empty())
    }
}

impl std::fmt::Display for NormalizedPath {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Normalize a raw request path.
///
/// A failed percent-decode falls back to the raw string rather than failing
/// the request; the cleaned result of `.` maps to the empty path.
pub fn normalize(raw: &str) -> NormalizedPath {
    let trimmed = raw.strip_prefix('/').unwrap_or(raw);

    let decoded: Cow<'_, str> = urlencoding::decode(trimmed)
        .map_or_else(|_| Cow::Borrowed(trimmed), |p| p);

    let mut segments: Vec<&str> = Vec::new();
    for component in Path::new(decoded.as_ref()).components() {
        match component {
            Component::Normal(seg) => {
                // Request paths are UTF-8 by construction; skip anything else.
                if let Some(seg) = seg.to_str() {
                    segments.push(seg);
                }
            }
            Component::ParentDir => {
                segments.pop();
            }
            Component::CurDir | Component::RootDir | Component::Prefix(_) => {}
        }
    }

    NormalizedPath(segments.join("/"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_and_slash_are_site_root() {
        assert!(normalize("").is_root());
        assert!(normalize("/").is_root());
        assert_eq!(normalize("/").as_str(), "");
    }

    #[test]
    fn test_plain_path() {
        assert_eq!(normalize("/media/sub/pic.png").as_str(), "media/sub/pic.png");
    }

    #[test]
    fn test_dot_collapses_to_root() {
        assert!(normalize("/.").is_root());
        assert!(normalize("/./").is_root());
    }

    #[test]
    fn test_parent_segments_are_clamped() {
        assert_eq!(normalize("/media/../../etc/passwd").as_str(), "etc/passwd");
        assert_eq!(normalize("/../../..").as_str(), "");
        assert!(!normalize("/media/../../etc/passwd").as_str().contains(".."));
    }

    #[test]
    fn test_encoded_traversal_is_decoded_before_cleaning() {
        // %2e%2e%2f == "../"
        assert_eq!(normalize("/media/%2e%2e%2f%2e%2e%2fetc/passwd").as_str(), "etc/passwd");
        assert!(!normalize("/%2e%2e/secret").as_str().contains(".."));
    }

    #[test]
    fn test_percent_decoding() {
        assert_eq!(normalize("/media/two%20words.png").as_str(), "media/two words.png");
        assert_eq!(normalize("/media/100%25.png").as_str(), "media/100%.png");
    }

    #[test]
    fn test_bad_encoding_keeps_the_raw_text() {
        // A truncated escape never aborts the request.
        assert_eq!(normalize("/media/bad%e").as_str(), "media/bad%e");
        // An escape decoding to invalid UTF-8 falls back to the raw path.
        assert_eq!(normalize("/media/bad%FF").as_str(), "media/bad%FF");
    }

    #[test]
    fn test_duplicate_separators() {
        assert_eq!(normalize("//media///sub//").as_str(), "media/sub");
    }

    #[test]
    fn test_segments_iterator() {
        let path = normalize("/media/sub/pic.png");
        let segments: Vec<&str> = path.segments().collect();
        assert_eq!(segments, vec!["media", "sub", "pic.png"]);
        assert_eq!(normalize("/").segments().count(), 0);
    }
}
