//! Thumbnail delivery.

use axum::http::header;
use axum::response::{IntoResponse, Response};
use tracing::debug;

use crate::vfs::ResolvedTarget;
use crate::web::error::WebError;
use crate::web::state::AppState;

/// Deliver the PNG thumbnail of the underlying file or directory. The
/// payload comes straight from the icon collaborator.
pub async fn icon(state: &AppState, target: &ResolvedTarget) -> Result<Response, WebError> {
    debug!(path = %target.real_path.display(), "Fetching icon");
    let png = state.tools.icon.fetch(&target.real_path).await?;
    Ok(([(header::CONTENT_TYPE, "image/png")], png).into_response())
}
