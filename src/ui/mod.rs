// UI module - the browser-facing surface
//
// Architecture:
// - page: Embedded HTML/JS shell served at the root path
// - view: Builds the JSON view the shell renders (columns, grid, pagination)

pub mod page;
pub mod view;

// Re-export view construction for convenience
pub use view::{build_view, GalleryView};
