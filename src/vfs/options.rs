//! Per-directory display options.
//!
//! A folder opts into viewer variants by containing one of the sentinel
//! marker files. The markers are probed once per directory listing or view,
//! never per entry.

use std::path::Path;

use super::ignore::{PANORAMIC_MARKER, R2L_MARKER};

/// Display options resolved for one directory.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DirOptions {
    /// Images read right-to-left (manga order).
    pub right_to_left: bool,
    /// Images shown in the panoramic (360°) viewer.
    pub panoramic: bool,
}

impl DirOptions {
    /// Stat the marker files inside `dir`.
    pub fn probe(dir: &Path) -> Self {
        Self {
            right_to_left: dir.join(R2L_MARKER).exists(),
            panoramic: dir.join(PANORAMIC_MARKER).exists(),
        }
    }
}
