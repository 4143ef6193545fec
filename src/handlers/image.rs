//! Image viewer pages.

use axum::response::{Html, IntoResponse, Response};
use tracing::debug;

use super::util::parent_link;
use crate::render::{self, ImageVariant, ImageView};
use crate::vfs::{DirOptions, ResolvedTarget, is_image_name};
use crate::web::error::WebError;
use crate::web::state::AppState;

/// The `.image.html` view: the underlying image plus its sibling sequence
/// for in-page navigation. Sibling order is byte-wise by name, matching the
/// links a folder listing produces.
pub async fn image_page(
    state: &AppState,
    target: &ResolvedTarget,
    request_path: &str,
) -> Result<Response, WebError> {
    let Some(parent_dir) = target.real_path.parent() else {
        return Err(WebError::NotFound);
    };

    let current_name = target
        .real_path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();

    let mut names: Vec<String> = Vec::new();
    let mut reader = tokio::fs::read_dir(parent_dir).await?;
    while let Some(entry) = reader.next_entry().await? {
        let name = entry.file_name().to_string_lossy().into_owned();
        if let Some(reason) = state.ignores.evaluate(&name) {
            debug!(path = %parent_dir.join(&name).display(), %reason, "Entry excluded");
            continue;
        }
        if entry.metadata().await.map(|m| m.is_file()).unwrap_or(false)
            && is_image_name(&name)
        {
            names.push(name);
        }
    }
    names.sort();

    let current_index = names
        .iter()
        .position(|name| *name == current_name)
        .map(|index| index as isize)
        .unwrap_or(-1);

    let options = DirOptions::probe(parent_dir);
    let variant = if options.right_to_left {
        ImageVariant::RightToLeft
    } else if options.panoramic {
        ImageVariant::Panoramic
    } else {
        ImageVariant::Standard
    };

    let view = ImageView {
        title: current_name,
        base_url: parent_link(request_path),
        images: names
            .iter()
            .map(|name| urlencoding::encode(name).into_owned())
            .collect(),
        current_index,
        variant,
    };
    Ok(Html(render::image_page(&view).into_string()).into_response())
}
