//! Fake collaborators for exercising the core without the real binaries.
//! Each test binary uses the subset it needs.
#![allow(dead_code)]

use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use async_trait::async_trait;

use mediabox::tools::{AliasTool, IconTool, ImageResizer, ToolError, Toolchain};

/// Alias prober that sees no aliases anywhere.
pub struct NoAlias;

#[async_trait]
impl AliasTool for NoAlias {
    async fn resolve(&self, _path: &Path) -> Result<Option<PathBuf>, ToolError> {
        Ok(None)
    }
}

/// Alias prober backed by a fixed map of alias → target.
pub struct MapAlias {
    pub targets: HashMap<PathBuf, PathBuf>,
}

#[async_trait]
impl AliasTool for MapAlias {
    async fn resolve(&self, path: &Path) -> Result<Option<PathBuf>, ToolError> {
        Ok(self.targets.get(path).cloned())
    }
}

/// Icon tool returning a fixed payload for any path.
pub struct FakeIcon;

pub const FAKE_PNG: &[u8] = b"\x89PNG-fake-icon";

#[async_trait]
impl IconTool for FakeIcon {
    async fn fetch(&self, _path: &Path) -> Result<Vec<u8>, ToolError> {
        Ok(FAKE_PNG.to_vec())
    }
}

/// Icon tool that always fails, for the upstream-failure path.
pub struct BrokenIcon;

#[async_trait]
impl IconTool for BrokenIcon {
    async fn fetch(&self, path: &Path) -> Result<Vec<u8>, ToolError> {
        Err(ToolError::BadOutput {
            tool: "fake-icon".to_string(),
            detail: format!("no icon for {}", path.display()),
        })
    }
}

/// Resizer that refuses, so delivery falls back to the original file.
pub struct NoResizer;

#[async_trait]
impl ImageResizer for NoResizer {
    async fn downscale(&self, path: &Path, _max_edge: u32) -> Result<PathBuf, ToolError> {
        Err(ToolError::BadOutput {
            tool: "fake-resizer".to_string(),
            detail: format!("refusing to resize {}", path.display()),
        })
    }
}

/// A toolchain of fakes with no aliases.
pub fn fake_toolchain() -> Toolchain {
    Toolchain {
        icon: Arc::new(FakeIcon),
        alias: Arc::new(NoAlias),
        resizer: Arc::new(NoResizer),
    }
}

/// A toolchain of fakes with the given alias map.
pub fn fake_toolchain_with_aliases(targets: HashMap<PathBuf, PathBuf>) -> Toolchain {
    Toolchain {
        icon: Arc::new(FakeIcon),
        alias: Arc::new(MapAlias { targets }),
        resizer: Arc::new(NoResizer),
    }
}
