//! Gallery View Construction
//!
//! Builds the JSON view the gallery page renders: one entry per filter
//! column, pagination state, and the image grid for the active page.

use serde::Serialize;
use std::path::Path;

use crate::config::Config;
use crate::logic::grid::{self, GridCell};
use crate::logic::path;
use crate::model::Model;

/// One filter column as shown in the header row.
#[derive(Debug, Clone, Serialize)]
pub struct ColumnView {
    pub index: usize,
    pub pattern: String,
    pub match_count: usize,
    /// Label under the filter input, e.g. "12 results".
    pub results_label: String,
}

/// Pagination state for the navigator.
#[derive(Debug, Clone, Serialize)]
pub struct PageView {
    pub active: usize,
    pub count: usize,
    pub size: usize,
    /// Selectable page sizes, in display order.
    pub sizes: Vec<usize>,
}

/// One image cell: where to fetch it and what to caption it with.
#[derive(Debug, Clone, Serialize)]
pub struct CellView {
    pub src: String,
    pub caption: String,
}

/// Everything the gallery page needs to redraw itself.
#[derive(Debug, Clone, Serialize)]
pub struct GalleryView {
    pub columns: Vec<ColumnView>,
    pub page: PageView,
    pub max_columns: usize,
    /// Row-major grid; `None` marks a cell with no image at that slot.
    pub rows: Vec<Vec<Option<CellView>>>,
}

/// Build the view for the current model state.
///
/// Matches whose paths cannot be expressed relative to the root are
/// skipped rather than rendered with a broken URL.
pub fn build_view(model: &Model, root: &Path, config: &Config) -> GalleryView {
    let columns = model
        .filters
        .slots()
        .iter()
        .map(|slot| ColumnView {
            index: slot.index,
            pattern: slot.pattern.clone().unwrap_or_default(),
            match_count: slot.matches.len(),
            results_label: format!("{} results", slot.matches.len()),
        })
        .collect();

    let page = PageView {
        active: model.page.active_page,
        count: model.page_count(),
        size: model.page.page_size,
        sizes: config.page_sizes.clone(),
    };

    let slices = model.page_slices();
    let rows = grid::arrange(&slices)
        .into_iter()
        .map(|row| {
            row.into_iter()
                .map(|cell| match cell {
                    GridCell::Image(file) => {
                        path::image_url(root, &file).map(|src| CellView {
                            src,
                            caption: file.display().to_string(),
                        })
                    }
                    GridCell::Empty => None,
                })
                .collect()
        })
        .collect();

    GalleryView {
        columns,
        page,
        max_columns: config.max_columns,
        rows,
    }
}
