//! Media classification by file name.
//!
//! Classification is purely lexical: no file is opened here. Image detection
//! goes through the mime database so every extension the platform knows as
//! `image/*` counts; movies and markdown use fixed extension sets.

use std::path::Path;

/// Extensions the player page and the streaming pipeline accept.
const MOVIE_EXTENSIONS: &[&str] = &["mkv", "mov", "avi", "webm", "mp4", "wmv", "flv"];

const MARKDOWN_EXTENSIONS: &[&str] = &["md", "markdown"];

/// True when the name's extension maps to an `image/*` media type.
pub fn is_image_name(name: impl AsRef<Path>) -> bool {
    mime_guess::from_path(name.as_ref())
        .first()
        .map(|m| m.type_() == mime::IMAGE)
        .unwrap_or(false)
}

/// True when the name carries one of the recognized movie extensions.
pub fn is_movie_name(name: impl AsRef<Path>) -> bool {
    has_extension(name.as_ref(), MOVIE_EXTENSIONS)
}

/// True when the name carries a markdown extension.
pub fn is_markdown_name(name: impl AsRef<Path>) -> bool {
    has_extension(name.as_ref(), MARKDOWN_EXTENSIONS)
}

fn has_extension(path: &Path, set: &[&str]) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| {
            let ext = ext.to_ascii_lowercase();
            set.iter().any(|candidate| *candidate == ext)
        })
        .unwrap_or(false)
}
