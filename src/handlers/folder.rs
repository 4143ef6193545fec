//! Directory listings.

use std::path::Path;

use axum::response::{Html, IntoResponse, Response};
use chrono::{DateTime, Local};
use tracing::debug;

use super::util::parent_link;
use crate::render::{self, DirEntryView, FolderView};
use crate::vfs::{IgnoreRules, ResolvedTarget, is_image_name, is_movie_name};
use crate::web::error::WebError;
use crate::web::state::AppState;

/// The site root: one row per registered gallery root.
pub async fn site_index(state: &AppState) -> Result<Response, WebError> {
    let mut entries: Vec<DirEntryView> = Vec::new();
    for name in state.roots.names() {
        if let Some(reason) = state.ignores.evaluate(name) {
            debug!(root = name, %reason, "Root excluded from index");
            continue;
        }
        let link = format!("{}/", urlencoding::encode(name));
        entries.push(DirEntryView {
            name: name.to_string(),
            icon_link: format!("{link}.icon"),
            link,
            last_modified: None,
            is_dir: true,
            is_movie: false,
            is_image: false,
        });
    }
    sort_entries(&mut entries);

    let view = FolderView {
        title: "mediabox".to_string(),
        link: "/".to_string(),
        parent: None,
        entries,
    };
    Ok(Html(render::folder_page(&view).into_string()).into_response())
}

/// Listing of one resolved directory.
///
/// Entry links are relative to the listing URL, so a directory request
/// without a trailing slash is bounced to the slashed form first.
pub async fn folder_listing(
    state: &AppState,
    target: &ResolvedTarget,
    request_path: &str,
) -> Result<Response, WebError> {
    if !request_path.ends_with('/') {
        return Ok(axum::response::Redirect::to(&format!("{request_path}/")).into_response());
    }

    let mut entries = read_entries(&target.real_path, &state.ignores).await?;
    sort_entries(&mut entries);

    let title = target
        .real_path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| target.root.clone());

    let view = FolderView {
        title,
        link: request_path.to_string(),
        parent: Some(parent_link(request_path)),
        entries,
    };
    Ok(Html(render::folder_page(&view).into_string()).into_response())
}

/// Read one directory into entry views, applying the exclusion rules.
async fn read_entries(
    dir: &Path,
    rules: &IgnoreRules,
) -> Result<Vec<DirEntryView>, WebError> {
    let mut reader = tokio::fs::read_dir(dir).await?;
    let mut entries = Vec::new();

    while let Some(entry) = reader.next_entry().await? {
        let name = entry.file_name().to_string_lossy().into_owned();
        if let Some(reason) = rules.evaluate(&name) {
            debug!(path = %dir.join(&name).display(), %reason, "Entry excluded");
            continue;
        }

        let metadata = entry.metadata().await.ok();
        let last_modified = metadata
            .as_ref()
            .and_then(|m| m.modified().ok())
            .map(|time| {
                DateTime::<Local>::from(time)
                    .format("%Y-%m-%d %H:%M:%S")
                    .to_string()
            });
        let is_dir = metadata.as_ref().map(|m| m.is_dir()).unwrap_or(false);

        let escaped = urlencoding::encode(&name).into_owned();
        let entry_view = if is_dir {
            DirEntryView {
                name,
                link: format!("{escaped}/"),
                last_modified,
                is_dir: true,
                is_movie: false,
                is_image: false,
                icon_link: format!("{escaped}.icon"),
            }
        } else {
            let is_movie = is_movie_name(&name);
            let is_image = is_image_name(&name);
            DirEntryView {
                link: decorated_link(&escaped, is_movie, is_image),
                name,
                last_modified,
                is_dir: false,
                is_movie,
                is_image,
                icon_link: format!("{escaped}.icon"),
            }
        };
        entries.push(entry_view);
    }
    Ok(entries)
}

/// Movies and images link to their viewer pages; everything else links to
/// the file itself.
fn decorated_link(escaped: &str, is_movie: bool, is_image: bool) -> String {
    if is_movie {
        format!("{escaped}.movie.html")
    } else if is_image {
        format!("{escaped}.image.html")
    } else {
        escaped.to_string()
    }
}

/// One combined list, folders and files together, case-insensitive order.
fn sort_entries(entries: &mut [DirEntryView]) {
    entries.sort_by_key(|e| e.name.to_lowercase());
}
