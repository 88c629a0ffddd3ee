//! Page Model
//!
//! Pagination state: which page the gallery shows and how many images
//! each column gets per page.

use crate::logic::pager;

/// Current pagination state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageState {
    /// 1-based page currently shown.
    pub active_page: usize,

    /// Images shown per column per page.
    pub page_size: usize,
}

impl PageState {
    /// Start on page one with the given page size.
    pub fn new(page_size: usize) -> Self {
        Self {
            active_page: 1,
            page_size: page_size.max(1),
        }
    }

    /// Clamp the active page into `[1, page_count]`.
    pub fn clamp_to(&mut self, page_count: usize) {
        self.active_page = pager::clamp_page(self.active_page, page_count);
    }
}
