//! Pure Gallery Model
//!
//! The cloneable state everything else derives from, split into focused
//! sub-models:
//!
//! - **FilterSet**: one slot per gallery column, pattern plus matches
//! - **PageState**: active page and page size
//!
//! The model holds no handles and does no I/O on its own; resolving
//! patterns against the filesystem happens through the methods that take
//! the root folder explicitly.

pub mod filters;
pub mod page;

pub use filters::{FilterSet, FilterSlot};
pub use page::PageState;

use std::path::PathBuf;

use crate::logic::pager;

/// Root gallery model composed of the filter set and page state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Model {
    /// Filter slots, one per gallery column.
    pub filters: FilterSet,

    /// Pagination state.
    pub page: PageState,
}

impl Model {
    /// Create the initial model: empty filters, page one.
    pub fn new(columns: usize, page_size: usize) -> Self {
        Self {
            filters: FilterSet::new(columns),
            page: PageState::new(page_size),
        }
    }

    /// Total pages across all columns at the current page size.
    pub fn page_count(&self) -> usize {
        pager::page_count(&self.filters.counts(), self.page.page_size)
    }

    /// The current page's slice of every column, in slot order.
    pub fn page_slices(&self) -> Vec<&[PathBuf]> {
        self.filters
            .slots()
            .iter()
            .map(|slot| {
                pager::slice_for_page(&slot.matches, self.page.active_page, self.page.page_size)
            })
            .collect()
    }

    /// Re-clamp the active page after anything that can shrink the page
    /// count (filter edits, resizes, refreshes).
    pub fn clamp_page(&mut self) {
        let count = self.page_count();
        self.page.clamp_to(count);
    }
}
