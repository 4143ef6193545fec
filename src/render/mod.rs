//! HTML views.
//!
//! Pages are generated with maud rather than a runtime template engine:
//! markup is checked at compile time and interpolation escapes by default.

mod pages;
mod views;

pub use pages::{error_page, folder_page, image_page, markdown_page, movie_page};
pub use views::{
    DirEntryView, FolderView, ImageVariant, ImageView, MarkdownView, MovieView,
};
