//! Data handed to the page renderers.
//!
//! All of these are derived per request and discarded after the response
//! is written.

/// One row of a folder listing. Links are already percent-escaped and
/// suffix-decorated by the folder handler.
#[derive(Debug, Clone)]
pub struct DirEntryView {
    pub name: String,
    pub link: String,
    pub last_modified: Option<String>,
    pub is_dir: bool,
    pub is_movie: bool,
    pub is_image: bool,
    pub icon_link: String,
}

/// A folder listing page.
#[derive(Debug, Clone)]
pub struct FolderView {
    pub title: String,
    /// The request path this listing was rendered for.
    pub link: String,
    /// Link to the parent listing; `None` at the site root.
    pub parent: Option<String>,
    pub entries: Vec<DirEntryView>,
}

/// Which viewer the image page uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImageVariant {
    Standard,
    RightToLeft,
    Panoramic,
}

/// An image viewer page: the current image plus its sibling sequence.
#[derive(Debug, Clone)]
pub struct ImageView {
    pub title: String,
    /// Escaped directory URL the image names below are relative to.
    pub base_url: String,
    /// Escaped sibling image names, in display order.
    pub images: Vec<String>,
    /// Index of the current image within `images`; -1 when not present.
    pub current_index: isize,
    pub variant: ImageVariant,
}

/// A movie player page.
#[derive(Debug, Clone)]
pub struct MovieView {
    pub title: String,
    /// Escaped URL of the raw movie stream.
    pub stream_link: String,
    /// Escaped directory URL, for the back link.
    pub base_url: String,
}

/// A rendered markdown page.
#[derive(Debug, Clone)]
pub struct MarkdownView {
    pub title: String,
    pub base_url: String,
    /// HTML produced by the markdown converter.
    pub content_html: String,
}
