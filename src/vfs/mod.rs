//! Virtual filesystem core: the resolution and dispatch engine.
//!
//! Every inbound request flows normalize → resolve → dispatch. The only
//! shared state is the immutable [`RootTable`] and [`IgnoreRules`], built
//! once before the listener starts; request handling mutates nothing, so
//! concurrent reads need no synchronization.

mod dispatch;
mod ignore;
mod media;
mod normalize;
mod options;
mod resolve;
mod roots;

pub use dispatch::{Route, dispatch};
pub use ignore::{IgnoreError, IgnoreReason, IgnoreRules, is_sentinel};
pub use media::{is_image_name, is_markdown_name, is_movie_name};
pub use normalize::{NormalizedPath, normalize};
pub use options::DirOptions;
pub use resolve::{ResolveError, ResolvedTarget, TargetKind, VirtualSuffix, resolve};
pub use roots::{RootError, RootTable};
