use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::Arc;

use axum::{Router, routing::get};
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;
use tracing::info;

use super::services::{icon_prefix, serve_request};
use super::state::AppState;
use crate::config::Config;
use crate::tools::{CommandAliasTool, CommandIconTool, SipsResizer, Toolchain};
use crate::vfs::{IgnoreRules, RootTable};

type AnyError = Box<dyn std::error::Error + Send + Sync + 'static>;

pub async fn run(
    address: Option<SocketAddr>,
    config_path: Option<PathBuf>,
) -> Result<(), AnyError> {
    // Load config; a broken configuration must not start the process.
    info!("Loading configuration");
    let config = match config_path {
        Some(path) => Config::load_from_path(path),
        None => Config::load(),
    }
    .map_err(|e| format!("Failed to load config: {e}"))?;

    let address = address.unwrap_or(config.server.bind_addr);

    tokio::fs::create_dir_all(&config.server.temp_dir)
        .await
        .map_err(|e| format!("Failed to create temp dir: {e}"))?;

    let roots = RootTable::resolve(&config.gallery.roots)?;
    info!(count = roots.len(), "Gallery roots registered");

    let ignores = IgnoreRules::compile(&config.gallery.ignores)?;

    let tools = Toolchain {
        icon: Arc::new(CommandIconTool::new(
            config.tools.icon_bin.clone(),
            config.tools.icon_size,
        )),
        alias: Arc::new(CommandAliasTool::new(config.tools.alias_bin.clone())),
        resizer: Arc::new(SipsResizer::new(
            config.tools.sips_bin.clone(),
            config.server.temp_dir.clone(),
        )),
    };

    let state = AppState::new(config, roots, ignores, tools);
    let app = router(state);

    let listener = TcpListener::bind(address).await?;
    info!(%address, "mediabox listening");

    axum::serve(listener, app.into_make_service())
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

/// The full application router. Exposed so integration tests can drive the
/// same routes with fake collaborators.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/icon/{*path}", get(icon_prefix))
        .fallback(serve_request)
        .with_state(state)
        .layer(TraceLayer::new_for_http())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        use tokio::signal::unix::{SignalKind, signal};
        let mut sigterm = signal(SignalKind::terminate())
            .expect("failed to install signal handler");
        sigterm.recv().await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    info!("Shutdown signal received");
}
