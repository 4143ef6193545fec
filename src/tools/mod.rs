//! External collaborators.
//!
//! Thumbnail generation, alias resolution, image resizing and video
//! transcoding are delegated to external processes. Each is modeled as a
//! capability trait with a command-backed implementation, so the resolution
//! core and the handlers can be exercised with fakes.

mod alias;
mod icon;
mod resize;
pub mod transcode;

pub use alias::{AliasTool, CommandAliasTool};
pub use icon::{CommandIconTool, IconTool};
pub use resize::{ImageResizer, SipsResizer};

use std::sync::Arc;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ToolError {
    #[error("failed to run {tool}: {source}")]
    Spawn {
        tool: String,
        source: std::io::Error,
    },

    #[error("{tool} exited with {status}")]
    Failed {
        tool: String,
        status: std::process::ExitStatus,
    },

    #[error("{tool} produced unusable output: {detail}")]
    BadOutput { tool: String, detail: String },
}

/// The full set of collaborators a running server carries.
#[derive(Clone)]
pub struct Toolchain {
    pub icon: Arc<dyn IconTool>,
    pub alias: Arc<dyn AliasTool>,
    pub resizer: Arc<dyn ImageResizer>,
}
