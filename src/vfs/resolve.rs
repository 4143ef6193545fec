//! Virtual path resolution.
//!
//! Maps a normalized request path onto a registered root, strips the
//! virtual presentation suffix, stats the underlying entry and classifies
//! it. The invariant carried out of here: every returned real path lies
//! inside the root it was matched against, or the result is `NotFound`.

use std::path::PathBuf;

use thiserror::Error;
use tracing::{debug, warn};

use super::ignore::is_sentinel;
use super::media::{is_image_name, is_markdown_name, is_movie_name};
use super::normalize::NormalizedPath;
use super::roots::RootTable;
use crate::tools::AliasTool;

/// Synthetic trailing token selecting a presentation mode. Never a real
/// filesystem entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VirtualSuffix {
    Icon,
    Image,
    Movie,
}

impl VirtualSuffix {
    /// Recognition order is fixed; at most one suffix is ever stripped.
    pub const ALL: [VirtualSuffix; 3] =
        [VirtualSuffix::Icon, VirtualSuffix::Image, VirtualSuffix::Movie];

    pub const fn token(self) -> &'static str {
        match self {
            VirtualSuffix::Icon => ".icon",
            VirtualSuffix::Image => ".image.html",
            VirtualSuffix::Movie => ".movie.html",
        }
    }
}

/// Classification of the underlying entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TargetKind {
    Directory,
    File,
    Missing,
    /// Neither a regular file nor a directory (fifo, socket, device).
    Special,
    /// An alias whose target sits inside a registered root; the payload is
    /// the virtual location to redirect to.
    AliasInto(String),
    /// An alias whose target is outside every registered root.
    AliasBlocked,
}

/// Everything one request resolved to. Transient; created per request.
#[derive(Debug, Clone)]
pub struct ResolvedTarget {
    /// Name of the matched root.
    pub root: String,
    /// Underlying real path, suffix already stripped. Always inside the
    /// matched root.
    pub real_path: PathBuf,
    /// The virtual suffix carried by the request, if any.
    pub suffix: Option<VirtualSuffix>,
    pub kind: TargetKind,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ResolveError {
    #[error("path does not resolve")]
    NotFound,
}

/// Resolve a normalized path against the root table.
///
/// Alias awareness: a regular file with no suffix and no media
/// classification is probed through the alias collaborator; the probe's
/// target is validated against the whitelist, never served pass-through.
pub async fn resolve(
    path: &NormalizedPath,
    roots: &RootTable,
    alias: &dyn AliasTool,
) -> Result<ResolvedTarget, ResolveError> {
    let mut segments = path.segments();
    let first = segments.next().ok_or(ResolveError::NotFound)?;
    let root_path = roots.get(first).ok_or(ResolveError::NotFound)?;

    let mut rest: Vec<&str> = segments.collect();

    // Strip at most one virtual suffix off the last segment. A segment that
    // is nothing but the suffix (e.g. "/media/.icon") designates its parent.
    let mut suffix = None;
    if let Some(last) = rest.last_mut() {
        for candidate in VirtualSuffix::ALL {
            if let Some(stripped) = last.strip_suffix(candidate.token()) {
                suffix = Some(candidate);
                *last = stripped;
                break;
            }
        }
    }
    if rest.last().is_some_and(|s| s.is_empty()) {
        rest.pop();
    }

    // Join segment by segment; anything that could step out of the root is
    // rejected even though normalization already removed it upstream.
    let mut real_path = root_path.to_path_buf();
    for segment in &rest {
        if *segment == ".." || segment.contains(std::path::MAIN_SEPARATOR) {
            return Err(ResolveError::NotFound);
        }
        real_path.push(segment);
    }
    debug_assert!(real_path.starts_with(root_path));

    // The sentinel markers are blocked from every serving path.
    if rest.last().copied().is_some_and(is_sentinel) {
        return Err(ResolveError::NotFound);
    }

    let kind = match tokio::fs::metadata(&real_path).await {
        Ok(meta) if meta.is_dir() => TargetKind::Directory,
        Ok(meta) if meta.is_file() => {
            classify_file(&real_path, suffix, roots, alias).await
        }
        Ok(_) => TargetKind::Special,
        Err(_) => TargetKind::Missing,
    };

    Ok(ResolvedTarget {
        root: first.to_string(),
        real_path,
        suffix,
        kind,
    })
}

/// A regular file headed for raw delivery may actually be an alias entry.
/// Media files and suffixed requests skip the probe.
async fn classify_file(
    real_path: &std::path::Path,
    suffix: Option<VirtualSuffix>,
    roots: &RootTable,
    alias: &dyn AliasTool,
) -> TargetKind {
    if suffix.is_some()
        || is_image_name(real_path)
        || is_movie_name(real_path)
        || is_markdown_name(real_path)
    {
        return TargetKind::File;
    }

    match alias.resolve(real_path).await {
        Ok(Some(target)) => match roots.containing(&target) {
            Some((root_name, root_path)) => {
                let location = virtual_location(root_name, &target, root_path);
                debug!(target = %target.display(), %location, "Alias resolved inside a root");
                TargetKind::AliasInto(location)
            }
            None => {
                debug!(target = %target.display(), "Alias target outside every root");
                TargetKind::AliasBlocked
            }
        },
        Ok(None) => TargetKind::File,
        Err(err) => {
            // A broken probe must not take raw delivery down with it.
            warn!(path = %real_path.display(), %err, "Alias probe failed; serving as plain file");
            TargetKind::File
        }
    }
}

/// The absolute virtual path (escaped, directory-style) for a real location
/// inside a registered root.
fn virtual_location(
    root_name: &str,
    target: &std::path::Path,
    root_path: &std::path::Path,
) -> String {
    let mut location = format!("/{}", urlencoding::encode(root_name));
    if let Ok(rel) = target.strip_prefix(root_path) {
        for component in rel.components() {
            if let std::path::Component::Normal(seg) = component {
                location.push('/');
                location.push_str(&urlencoding::encode(&seg.to_string_lossy()));
            }
        }
    }
    location.push('/');
    location
}
