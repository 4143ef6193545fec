//! Plain file delivery.
//!
//! Delegates to `ServeFile` for content type, range requests and
//! conditional headers. Large inline images are downscaled through the
//! resizer collaborator first; any failure in that path falls back to the
//! original file, never to an error.

use std::path::Path;

use axum::body::Body;
use axum::extract::Request;
use axum::response::{IntoResponse, Response};
use tower::util::ServiceExt;
use tower_http::services::ServeFile;
use tracing::{info, warn};

use crate::vfs::{ResolvedTarget, is_image_name};
use crate::web::error::WebError;
use crate::web::state::AppState;

pub async fn raw_file(
    state: &AppState,
    target: &ResolvedTarget,
    request: Request,
) -> Result<Response, WebError> {
    if is_image_name(&target.real_path) {
        if let Some(edge) = oversized_edge(&target.real_path, state.config.gallery.max_inline_pixels)
        {
            info!(
                path = %target.real_path.display(),
                edge,
                "Downscaling oversized inline image"
            );
            match state
                .tools
                .resizer
                .downscale(&target.real_path, state.config.gallery.max_inline_pixels)
                .await
            {
                Ok(scratch) => {
                    let response = serve(&scratch, request).await;
                    // The response body holds its own handle; the scratch
                    // file is not kept around.
                    if let Err(err) = tokio::fs::remove_file(&scratch).await {
                        warn!(path = %scratch.display(), %err, "Failed to remove scratch file");
                    }
                    return response;
                }
                Err(err) => {
                    warn!(path = %target.real_path.display(), %err, "Downscale failed; serving original");
                }
            }
        }
    }

    serve(&target.real_path, request).await
}

/// The longest image edge when it exceeds `max_edge`; `None` when the
/// image fits or its dimensions cannot be read.
fn oversized_edge(path: &Path, max_edge: u32) -> Option<u64> {
    match imagesize::size(path) {
        Ok(dim) => {
            let edge = dim.width.max(dim.height) as u64;
            (edge > u64::from(max_edge)).then_some(edge)
        }
        Err(err) => {
            warn!(path = %path.display(), %err, "Could not read image dimensions");
            None
        }
    }
}

async fn serve(path: &Path, request: Request) -> Result<Response, WebError> {
    let served = ServeFile::new(path)
        .oneshot(request)
        .await
        .map_err(|err| WebError::ReadFailure(std::io::Error::other(err)))?;
    Ok(served.map(Body::new).into_response())
}
