//! Root registry.
//!
//! Configured gallery directories are resolved once at startup into an
//! absolute-path table keyed by base name. The table is immutable for the
//! process lifetime and read concurrently by every request without locking.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use thiserror::Error;
use tracing::warn;

#[derive(Debug, Error)]
pub enum RootError {
    #[error("no usable gallery root (all configured paths were skipped)")]
    Empty,

    #[error("duplicate root name '{name}': {first} and {second}")]
    DuplicateName {
        name: String,
        first: PathBuf,
        second: PathBuf,
    },
}

/// Mapping from root name (the base name of a configured directory) to its
/// absolute real path.
#[derive(Debug, Default)]
pub struct RootTable {
    roots: BTreeMap<String, PathBuf>,
}

impl RootTable {
    /// Resolve configured paths into the root table.
    ///
    /// Paths that cannot be made absolute or stat'ed are skipped with a
    /// warning rather than failing startup. Two surviving roots sharing a
    /// base name are a configuration error: the process must not start with
    /// one silently shadowing the other.
    pub fn resolve(configured: &[PathBuf]) -> Result<Self, RootError> {
        let mut roots: BTreeMap<String, PathBuf> = BTreeMap::new();

        for path in configured {
            let absolute = match std::path::absolute(path) {
                Ok(p) => p,
                Err(err) => {
                    warn!(path = %path.display(), %err, "Skipping unresolvable gallery root");
                    continue;
                }
            };
            if let Err(err) = std::fs::metadata(&absolute) {
                warn!(path = %absolute.display(), %err, "Skipping inaccessible gallery root");
                continue;
            }
            let Some(name) = absolute.file_name().and_then(|n| n.to_str()) else {
                warn!(path = %absolute.display(), "Skipping gallery root without a usable base name");
                continue;
            };

            if let Some(first) = roots.get(name) {
                return Err(RootError::DuplicateName {
                    name: name.to_string(),
                    first: first.clone(),
                    second: absolute,
                });
            }
            roots.insert(name.to_string(), absolute);
        }

        if roots.is_empty() {
            return Err(RootError::Empty);
        }
        Ok(Self { roots })
    }

    pub fn get(&self, name: &str) -> Option<&Path> {
        self.roots.get(name).map(PathBuf::as_path)
    }

    /// Root names in lexical order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.roots.keys().map(String::as_str)
    }

    /// The root (name, real path) whose directory contains `real`, if any.
    /// Used to validate alias targets against the whitelist.
    pub fn containing(&self, real: &Path) -> Option<(&str, &Path)> {
        self.roots
            .iter()
            .find(|(_, root)| real.starts_with(root))
            .map(|(name, root)| (name.as_str(), root.as_path()))
    }

    pub fn len(&self) -> usize {
        self.roots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.roots.is_empty()
    }
}
