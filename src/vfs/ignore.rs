//! Entry exclusion rules.
//!
//! Rules gate directory-listing membership. A direct request for an excluded
//! name still resolves if the caller knows it, with one exception: the two
//! sentinel marker files are control files for per-folder display options
//! and are blocked from every serving path.

use regex::Regex;
use thiserror::Error;

/// Marker file that flips a folder's image viewer to right-to-left order.
pub const R2L_MARKER: &str = "__option_R2L__";

/// Marker file that flips a folder's image viewer to the panoramic variant.
pub const PANORAMIC_MARKER: &str = "__option_360VR__";

/// True for the fixed sentinel names, which are never listed nor served.
pub fn is_sentinel(name: &str) -> bool {
    name == R2L_MARKER || name == PANORAMIC_MARKER
}

#[derive(Debug, Error)]
pub enum IgnoreError {
    #[error("invalid ignore pattern '{pattern}': {source}")]
    BadPattern {
        pattern: String,
        source: regex::Error,
    },
}

/// Why an entry was excluded. Diagnostic only.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IgnoreReason {
    Sentinel(&'static str),
    Pattern(String),
    Hidden,
}

impl std::fmt::Display for IgnoreReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            IgnoreReason::Sentinel(name) => write!(f, "option marker '{name}'"),
            IgnoreReason::Pattern(pattern) => write!(f, "pattern '{pattern}'"),
            IgnoreReason::Hidden => f.write_str("hidden name"),
        }
    }
}

/// Compiled exclusion rules. Built once at startup, immutable afterwards.
#[derive(Debug, Default)]
pub struct IgnoreRules {
    patterns: Vec<(String, Regex)>,
}

impl IgnoreRules {
    /// Compile configured wildcard patterns. `*` matches any run of
    /// characters; everything else is literal. Matches are anchored to the
    /// whole name.
    pub fn compile(patterns: &[String]) -> Result<Self, IgnoreError> {
        let mut compiled = Vec::with_capacity(patterns.len());
        for pattern in patterns {
            let mut expr = String::with_capacity(pattern.len() + 8);
            expr.push('^');
            for (i, part) in pattern.split('*').enumerate() {
                if i > 0 {
                    expr.push_str(".*");
                }
                expr.push_str(&regex::escape(part));
            }
            expr.push('$');

            let regex = Regex::new(&expr).map_err(|source| IgnoreError::BadPattern {
                pattern: pattern.clone(),
                source,
            })?;
            compiled.push((pattern.clone(), regex));
        }
        Ok(Self { patterns: compiled })
    }

    /// Evaluate one entry name. Rule order: sentinels, configured patterns,
    /// hidden-name convention. First match wins.
    pub fn evaluate(&self, name: &str) -> Option<IgnoreReason> {
        if name == R2L_MARKER {
            return Some(IgnoreReason::Sentinel(R2L_MARKER));
        }
        if name == PANORAMIC_MARKER {
            return Some(IgnoreReason::Sentinel(PANORAMIC_MARKER));
        }
        for (pattern, regex) in &self.patterns {
            if regex.is_match(name) {
                return Some(IgnoreReason::Pattern(pattern.clone()));
            }
        }
        if name.starts_with('.') {
            return Some(IgnoreReason::Hidden);
        }
        None
    }
}
