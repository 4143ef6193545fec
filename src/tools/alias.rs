//! Filesystem alias resolution.

use std::path::{Path, PathBuf};

use async_trait::async_trait;
use tokio::process::Command;

use super::ToolError;

/// Resolves filesystem aliases (Finder-style indirection entries).
///
/// `Ok(None)` means the entry is not an alias; `Ok(Some(target))` is the
/// real location the alias points at. The target is NOT validated against
/// the root whitelist here; that is the resolver's job.
#[async_trait]
pub trait AliasTool: Send + Sync {
    async fn resolve(&self, path: &Path) -> Result<Option<PathBuf>, ToolError>;
}

/// Alias resolution through the external `resolveAlias` binary, which
/// prints the target path on stdout and exits nonzero for non-alias input.
pub struct CommandAliasTool {
    bin: PathBuf,
}

impl CommandAliasTool {
    pub fn new(bin: PathBuf) -> Self {
        Self { bin }
    }
}

#[async_trait]
impl AliasTool for CommandAliasTool {
    async fn resolve(&self, path: &Path) -> Result<Option<PathBuf>, ToolError> {
        let output = Command::new(&self.bin)
            .arg(path)
            .output()
            .await
            .map_err(|source| ToolError::Spawn {
                tool: self.bin.display().to_string(),
                source,
            })?;

        // Nonzero exit is the tool's way of saying "not an alias".
        if !output.status.success() {
            return Ok(None);
        }

        let target = String::from_utf8_lossy(&output.stdout).trim().to_string();
        if target.is_empty() {
            return Err(ToolError::BadOutput {
                tool: self.bin.display().to_string(),
                detail: "empty target path".to_string(),
            });
        }
        Ok(Some(PathBuf::from(target)))
    }
}
