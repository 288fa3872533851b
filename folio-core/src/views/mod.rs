//! HTML rendering with maud
//!
//! Each view keeps the state it displays and renders it as escaped markup.

pub mod dashboard;
pub mod filter;
pub mod gallery;
pub mod modal;
mod page;

pub use filter::{FilterBar, FilterButton};
pub use gallery::{Figure, GalleryView};
pub use modal::Thumbnail;
pub use page::render_page;
