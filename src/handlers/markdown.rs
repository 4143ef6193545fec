//! Rendered markdown pages.

use axum::response::{Html, IntoResponse, Response};
use tracing::debug;

use super::util::parent_link;
use crate::render::{self, MarkdownView};
use crate::vfs::ResolvedTarget;
use crate::web::error::WebError;
use crate::web::state::AppState;

/// Convert the underlying markdown file to an HTML page.
pub async fn markdown_page(
    _state: &AppState,
    target: &ResolvedTarget,
    request_path: &str,
) -> Result<Response, WebError> {
    let bytes = tokio::fs::read(&target.real_path).await?;
    let text = decode_text(&bytes);

    debug!(path = %target.real_path.display(), "Rendering markdown");
    let content_html = comrak::markdown_to_html(&text, &comrak::Options::default());

    let view = MarkdownView {
        title: target
            .real_path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default(),
        base_url: parent_link(request_path),
        content_html,
    };
    Ok(Html(render::markdown_page(&view).into_string()).into_response())
}

/// Decode file bytes honoring a byte-order mark: UTF-16 (either order) is
/// converted, a UTF-8 BOM is dropped, and everything else is read as UTF-8
/// with invalid sequences replaced rather than rejected.
fn decode_text(bytes: &[u8]) -> String {
    match bytes {
        [0xFF, 0xFE, rest @ ..] => decode_utf16(rest, u16::from_le_bytes),
        [0xFE, 0xFF, rest @ ..] => decode_utf16(rest, u16::from_be_bytes),
        [0xEF, 0xBB, 0xBF, rest @ ..] => String::from_utf8_lossy(rest).into_owned(),
        _ => String::from_utf8_lossy(bytes).into_owned(),
    }
}

fn decode_utf16(bytes: &[u8], combine: fn([u8; 2]) -> u16) -> String {
    let units: Vec<u16> = bytes
        .chunks_exact(2)
        .map(|pair| combine([pair[0], pair[1]]))
        .collect();
    String::from_utf16_lossy(&units)
}
