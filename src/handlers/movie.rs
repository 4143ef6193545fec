//! Movie player page and streaming delivery.

use axum::body::Body;
use axum::extract::Request;
use axum::http::header;
use axum::response::{Html, IntoResponse, Response};
use tokio_util::io::ReaderStream;
use tower::util::ServiceExt;
use tower_http::services::ServeFile;
use tracing::{info, warn};

use super::util::{display_name, parent_link};
use crate::render::{self, MovieView};
use crate::tools::transcode;
use crate::vfs::{ResolvedTarget, VirtualSuffix};
use crate::web::error::WebError;
use crate::web::state::AppState;

/// The `.movie.html` player page. The `<video>` element points back at the
/// suffix-free URL, which dispatches to [`movie_stream`].
pub async fn movie_page(
    target: &ResolvedTarget,
    request_path: &str,
) -> Result<Response, WebError> {
    let stream_link = request_path
        .strip_suffix(VirtualSuffix::Movie.token())
        .unwrap_or(request_path)
        .to_string();

    let view = MovieView {
        title: target
            .real_path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| display_name(&stream_link)),
        base_url: parent_link(request_path),
        stream_link,
    };
    Ok(Html(render::movie_page(&view).into_string()).into_response())
}

/// Direct movie delivery. MP4 goes out as-is with range support; every
/// other container is piped through ffmpeg as fragmented MP4.
pub async fn movie_stream(
    state: &AppState,
    target: &ResolvedTarget,
    request: Request,
) -> Result<Response, WebError> {
    let is_mp4 = target
        .real_path
        .extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| ext.eq_ignore_ascii_case("mp4"))
        .unwrap_or(false);

    if is_mp4 {
        info!(path = %target.real_path.display(), "Serving mp4 directly");
        let served = ServeFile::new(&target.real_path)
            .oneshot(request)
            .await
            .map_err(|err| WebError::ReadFailure(std::io::Error::other(err)))?;
        return Ok(served.map(Body::new).into_response());
    }

    info!(path = %target.real_path.display(), "Transcoding for streaming");
    let (mut child, stdout) =
        transcode::spawn(&state.config.tools.ffmpeg_bin, &target.real_path)?;

    // The child must outlive this handler; a reaper task owns it until the
    // pipe closes (client gone or stream finished).
    let path = target.real_path.display().to_string();
    tokio::spawn(async move {
        match child.wait().await {
            Ok(status) if status.success() => info!(path, "Streaming complete"),
            Ok(status) => warn!(path, %status, "Transcoder exited early"),
            Err(err) => warn!(path, %err, "Transcoder wait failed"),
        }
    });

    let body = Body::from_stream(ReaderStream::new(stdout));
    Ok((
        [
            (header::CONTENT_TYPE, "video/mp4"),
            (header::CACHE_CONTROL, "no-cache"),
        ],
        body,
    )
        .into_response())
}
