//! Video transcoding to streamable MP4.

use std::path::Path;
use std::process::Stdio;

use tokio::process::{Child, ChildStdout, Command};

use super::ToolError;

/// Spawn an ffmpeg process that remuxes/encodes `path` into fragmented MP4
/// on stdout, suitable for chunked delivery to a `<video>` element.
///
/// The child is returned alongside its stdout so the caller can stream the
/// pipe and let the process lifecycle end with the response.
pub fn spawn(ffmpeg_bin: &Path, path: &Path) -> Result<(Child, ChildStdout), ToolError> {
    let mut child = Command::new(ffmpeg_bin)
        .arg("-i")
        .arg(path)
        .args(["-c:v", "libx264"])
        .args(["-f", "mp4"])
        .args(["-movflags", "frag_keyframe+empty_moov+default_base_moof"])
        .arg("pipe:1")
        .stdout(Stdio::piped())
        .stderr(Stdio::null())
        .stdin(Stdio::null())
        .kill_on_drop(true)
        .spawn()
        .map_err(|source| ToolError::Spawn {
            tool: ffmpeg_bin.display().to_string(),
            source,
        })?;

    let stdout = child.stdout.take().ok_or_else(|| ToolError::BadOutput {
        tool: ffmpeg_bin.display().to_string(),
        detail: "no stdout pipe".to_string(),
    })?;

    Ok((child, stdout))
}
