//! Inline image downscaling.

use std::path::{Path, PathBuf};

use async_trait::async_trait;
use tokio::process::Command;
use uuid::Uuid;

use super::ToolError;

/// Downscales an image so its longest edge fits `max_edge`, writing the
/// result to a scratch file the caller serves and then removes.
#[async_trait]
pub trait ImageResizer: Send + Sync {
    async fn downscale(&self, path: &Path, max_edge: u32) -> Result<PathBuf, ToolError>;
}

/// Resizing through `sips -Z`, the platform image tool.
pub struct SipsResizer {
    bin: PathBuf,
    temp_dir: PathBuf,
}

impl SipsResizer {
    pub fn new(bin: PathBuf, temp_dir: PathBuf) -> Self {
        Self { bin, temp_dir }
    }
}

#[async_trait]
impl ImageResizer for SipsResizer {
    async fn downscale(&self, path: &Path, max_edge: u32) -> Result<PathBuf, ToolError> {
        let extension = path
            .extension()
            .and_then(|ext| ext.to_str())
            .unwrap_or("png");
        let output_path = self
            .temp_dir
            .join(format!("{}.{extension}", Uuid::new_v4()));

        let status = Command::new(&self.bin)
            .arg("-Z")
            .arg(max_edge.to_string())
            .arg(path)
            .arg("--out")
            .arg(&output_path)
            .status()
            .await
            .map_err(|source| ToolError::Spawn {
                tool: self.bin.display().to_string(),
                source,
            })?;

        if !status.success() {
            return Err(ToolError::Failed {
                tool: self.bin.display().to_string(),
                status,
            });
        }
        Ok(output_path)
    }
}
