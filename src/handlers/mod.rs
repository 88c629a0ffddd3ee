//! Event Handlers
//!
//! Events posted by the gallery page are decoded and applied here.

pub mod events;

// Re-export for convenience
pub use events::{apply_event, UiEvent};
