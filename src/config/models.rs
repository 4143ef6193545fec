use serde::{Deserialize, Serialize};
use std::net::SocketAddr;
use std::path::PathBuf;

/// Top-level configuration
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
pub struct Config {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub gallery: GalleryConfig,
    #[serde(default)]
    pub tools: ToolsConfig,
}

/// Server configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ServerConfig {
    #[serde(default = "default_bind_addr")]
    pub bind_addr: SocketAddr,
    /// Scratch space for downscaled inline images.
    #[serde(default = "default_temp_dir")]
    pub temp_dir: PathBuf,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_addr: default_bind_addr(),
            temp_dir: default_temp_dir(),
        }
    }
}

fn default_bind_addr() -> SocketAddr {
    "0.0.0.0:8080".parse().unwrap()
}

fn default_temp_dir() -> PathBuf {
    PathBuf::from("/tmp/mediabox")
}

/// What is served and what stays hidden
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct GalleryConfig {
    /// Whitelisted root directories. Each is served under its base name.
    #[serde(default)]
    pub roots: Vec<PathBuf>,
    /// Wildcard patterns excluded from listings (`*` matches any run).
    #[serde(default)]
    pub ignores: Vec<String>,
    /// Longest edge an inline image may have before it is downscaled.
    #[serde(default = "default_max_inline_pixels")]
    pub max_inline_pixels: u32,
}

impl Default for GalleryConfig {
    fn default() -> Self {
        Self {
            roots: Vec::new(),
            ignores: Vec::new(),
            max_inline_pixels: default_max_inline_pixels(),
        }
    }
}

fn default_max_inline_pixels() -> u32 {
    2000
}

/// Paths of the delegated external binaries
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ToolsConfig {
    #[serde(default = "default_icon_bin")]
    pub icon_bin: PathBuf,
    #[serde(default = "default_alias_bin")]
    pub alias_bin: PathBuf,
    #[serde(default = "default_ffmpeg_bin")]
    pub ffmpeg_bin: PathBuf,
    #[serde(default = "default_sips_bin")]
    pub sips_bin: PathBuf,
    /// Edge length of generated thumbnails, in pixels.
    #[serde(default = "default_icon_size")]
    pub icon_size: u32,
}

impl Default for ToolsConfig {
    fn default() -> Self {
        Self {
            icon_bin: default_icon_bin(),
            alias_bin: default_alias_bin(),
            ffmpeg_bin: default_ffmpeg_bin(),
            sips_bin: default_sips_bin(),
            icon_size: default_icon_size(),
        }
    }
}

fn default_icon_bin() -> PathBuf {
    PathBuf::from("./libraries/getIcon")
}

fn default_alias_bin() -> PathBuf {
    PathBuf::from("./libraries/resolveAlias")
}

fn default_ffmpeg_bin() -> PathBuf {
    PathBuf::from("ffmpeg")
}

fn default_sips_bin() -> PathBuf {
    PathBuf::from("sips")
}

fn default_icon_size() -> u32 {
    32
}
