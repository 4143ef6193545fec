//! View handlers.
//!
//! Each handler receives a [`ResolvedTarget`](crate::vfs::ResolvedTarget)
//! whose real path the resolver has already proven to be inside a
//! registered root; handlers never rebuild paths from request input.

mod folder;
mod icon;
mod image;
mod markdown;
mod movie;
mod raw;
mod util;

pub use folder::{folder_listing, site_index};
pub use icon::icon;
pub use image::image_page;
pub use markdown::markdown_page;
pub use movie::{movie_page, movie_stream};
pub use raw::raw_file;
