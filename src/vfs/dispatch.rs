//! Route dispatch.
//!
//! One table maps a resolved target to its handler. Suffix handling lives
//! here and nowhere else, so suffix-priority rules cannot drift between
//! handlers.

use super::media::{is_image_name, is_markdown_name, is_movie_name};
use super::resolve::{ResolvedTarget, TargetKind, VirtualSuffix};

/// The handler a resolved target dispatches to. Every request reaches
/// exactly one route, and every route is terminal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    /// PNG thumbnail of the underlying file or directory.
    Icon,
    /// Image viewer page for the underlying image file.
    ImagePage,
    /// Player page for the underlying movie file.
    MoviePage,
    /// Directory listing.
    Folder,
    /// Direct movie delivery (raw mp4 or transcoded stream).
    MovieStream,
    /// Rendered markdown page.
    Markdown,
    /// Plain file delivery.
    RawFile,
    /// Alias target inside a registered root.
    Redirect(String),
    /// Blocked alias or unsupported entry kind.
    Forbidden,
    NotFound,
}

/// Decision table, first match wins. Performs no I/O; classification was
/// completed by the resolver.
pub fn dispatch(target: &ResolvedTarget) -> Route {
    match (&target.kind, target.suffix) {
        (TargetKind::AliasInto(location), _) => Route::Redirect(location.clone()),
        (TargetKind::AliasBlocked, _) => Route::Forbidden,
        (TargetKind::Special, _) => Route::Forbidden,

        (TargetKind::File, Some(VirtualSuffix::Icon)) => Route::Icon,
        (TargetKind::Directory, Some(VirtualSuffix::Icon)) => Route::Icon,

        (TargetKind::File, Some(VirtualSuffix::Image))
            if is_image_name(&target.real_path) =>
        {
            Route::ImagePage
        }
        (TargetKind::File, Some(VirtualSuffix::Movie))
            if is_movie_name(&target.real_path) =>
        {
            Route::MoviePage
        }

        (TargetKind::Directory, None) => Route::Folder,
        (TargetKind::File, None) if is_movie_name(&target.real_path) => Route::MovieStream,
        (TargetKind::File, None) if is_markdown_name(&target.real_path) => Route::Markdown,
        (TargetKind::File, None) => Route::RawFile,

        _ => Route::NotFound,
    }
}
