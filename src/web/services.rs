//! The request pipeline: normalize → resolve → dispatch → handler.
//!
//! Every inbound path flows through here exactly once; each outcome is
//! terminal for its request and nothing else.

use axum::extract::{Request, State};
use axum::response::{IntoResponse, Redirect, Response};
use tracing::{debug, info, warn};

use super::error::WebError;
use super::state::AppState;
use crate::handlers;
use crate::vfs::{self, ResolveError, Route, TargetKind};

/// Fallback handler: everything that is not the `/icon/` prefix.
pub async fn serve_request(State(state): State<AppState>, request: Request) -> Response {
    let link = request.uri().path().to_string();
    state.metrics.request();

    let normalized = vfs::normalize(&link);
    if normalized.is_root() {
        return finish(&state, &link, handlers::site_index(&state).await);
    }

    let target = match vfs::resolve(&normalized, &state.roots, state.tools.alias.as_ref())
        .await
    {
        Ok(target) => target,
        Err(ResolveError::NotFound) => {
            return finish(&state, &link, Err(WebError::NotFound));
        }
    };

    let outcome = match vfs::dispatch(&target) {
        Route::Icon => handlers::icon(&state, &target).await,
        Route::ImagePage => handlers::image_page(&state, &target, &link).await,
        Route::MoviePage => handlers::movie_page(&target, &link).await,
        Route::Folder => handlers::folder_listing(&state, &target, &link).await,
        Route::MovieStream => handlers::movie_stream(&state, &target, request).await,
        Route::Markdown => handlers::markdown_page(&state, &target, &link).await,
        Route::RawFile => handlers::raw_file(&state, &target, request).await,
        Route::Redirect(location) => {
            info!(link, location, "Alias redirect");
            Ok(Redirect::to(&location).into_response())
        }
        Route::Forbidden => Err(WebError::Forbidden),
        Route::NotFound => Err(WebError::NotFound),
    };
    finish(&state, &link, outcome)
}

/// The `/icon/<path>` route, an alternate spelling of the `.icon` suffix.
pub async fn icon_prefix(State(state): State<AppState>, request: Request) -> Response {
    let link = request.uri().path().to_string();
    state.metrics.request();

    let rest = link.strip_prefix("/icon").unwrap_or(&link);
    let normalized = vfs::normalize(rest);

    let outcome = match vfs::resolve(&normalized, &state.roots, state.tools.alias.as_ref())
        .await
    {
        Ok(target)
            if matches!(target.kind, TargetKind::File | TargetKind::Directory) =>
        {
            handlers::icon(&state, &target).await
        }
        _ => Err(WebError::NotFound),
    };
    finish(&state, &link, outcome)
}

/// Map a handler outcome to the final response, recording the failure class.
fn finish(state: &AppState, link: &str, outcome: Result<Response, WebError>) -> Response {
    match outcome {
        Ok(response) => response,
        Err(err) => {
            match &err {
                WebError::NotFound => {
                    state.metrics.not_found();
                    debug!(link, "Not found");
                }
                WebError::Forbidden => {
                    state.metrics.forbidden();
                    info!(link, "Forbidden");
                }
                WebError::Upstream(detail) => {
                    state.metrics.upstream_failure();
                    warn!(link, %detail, "Upstream tool failure");
                }
                WebError::ReadFailure(detail) => {
                    warn!(link, %detail, "Read failure");
                }
            }
            err.respond(link)
        }
    }
}
