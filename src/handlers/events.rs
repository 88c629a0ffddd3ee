//! Gallery Event Dispatch
//!
//! Every control on the gallery page maps to one event here. Applying an
//! event mutates the model and always leaves the active page inside the
//! valid range.

use serde::Deserialize;
use std::path::Path;

use crate::config::Config;
use crate::model::Model;

/// One user interaction from the gallery page.
#[derive(Debug, Clone, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum UiEvent {
    /// Filter text edited in one column.
    SetPattern { index: usize, pattern: String },

    /// Column count control changed.
    SetColumns { count: usize },

    /// Images-per-page selection changed.
    SetPageSize { size: usize },

    /// Page navigator clicked.
    SetPage { page: usize },

    /// Refresh button: re-resolve every filter against the folder.
    Refresh,
}

/// Apply one event to the model.
///
/// Pattern edits and refreshes re-resolve matches against the root
/// folder; column, page, and page-size changes only reshape what is
/// already resolved. The active page is re-clamped whenever the page
/// count could have shrunk.
pub fn apply_event(model: &mut Model, root: &Path, config: &Config, event: UiEvent) {
    crate::log_debug(&format!("event: {:?}", event));

    match event {
        UiEvent::SetPattern { index, pattern } => {
            if !model.filters.set_pattern(root, index, &pattern) {
                crate::log_debug(&format!("ignored pattern for unknown column {}", index));
            }
            model.clamp_page();
        }
        UiEvent::SetColumns { count } => {
            let count = count.clamp(1, config.max_columns);
            model.filters.resize(count);
            model.clamp_page();
        }
        UiEvent::SetPageSize { size } => {
            // Only the configured options are accepted
            if config.page_sizes.contains(&size) {
                model.page.page_size = size;
                model.page.active_page = 1;
            } else {
                crate::log_debug(&format!("ignored unlisted page size {}", size));
            }
        }
        UiEvent::SetPage { page } => {
            model.page.active_page = page;
            model.clamp_page();
        }
        UiEvent::Refresh => {
            model.filters.recompute_all(root);
            model.clamp_page();
        }
    }
}
