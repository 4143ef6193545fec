//! Thumbnail ("icon") generation.

use std::path::{Path, PathBuf};

use async_trait::async_trait;
use base64::Engine;
use base64::engine::general_purpose::STANDARD as BASE64;
use tokio::process::Command;

use super::ToolError;

/// Produces a PNG thumbnail for a file or directory.
#[async_trait]
pub trait IconTool: Send + Sync {
    async fn fetch(&self, path: &Path) -> Result<Vec<u8>, ToolError>;
}

/// Icon generation through the external `getIcon` binary, which prints the
/// PNG as one base64 line on stdout.
pub struct CommandIconTool {
    bin: PathBuf,
    size: u32,
}

impl CommandIconTool {
    pub fn new(bin: PathBuf, size: u32) -> Self {
        Self { bin, size }
    }
}

#[async_trait]
impl IconTool for CommandIconTool {
    async fn fetch(&self, path: &Path) -> Result<Vec<u8>, ToolError> {
        let output = Command::new(&self.bin)
            .arg(path)
            .arg(self.size.to_string())
            .output()
            .await
            .map_err(|source| ToolError::Spawn {
                tool: self.bin.display().to_string(),
                source,
            })?;

        if !output.status.success() {
            return Err(ToolError::Failed {
                tool: self.bin.display().to_string(),
                status: output.status,
            });
        }

        let encoded = String::from_utf8_lossy(&output.stdout);
        BASE64
            .decode(encoded.trim())
            .map_err(|err| ToolError::BadOutput {
                tool: self.bin.display().to_string(),
                detail: format!("invalid base64: {err}"),
            })
    }
}
