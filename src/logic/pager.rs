//! Pagination arithmetic
//!
//! Pure functions for turning per-column match counts into a page count
//! and for slicing one column's matches down to the current page. All of
//! them are total: out-of-range inputs clamp instead of failing.

/// Calculate how many pages the gallery needs.
///
/// The longest column decides: `ceil(max(counts) / page_size)`, but
/// never less than one page, so an empty gallery still has a single
/// (empty) page to display.
///
/// # Arguments
/// * `counts` - Match count of every filter column
/// * `page_size` - Images shown per column per page
///
/// # Examples
/// ```
/// use imgrid::logic::pager::page_count;
///
/// // 12 matches at 10 per page fill two pages
/// assert_eq!(page_count(&[12, 3], 10), 2);
///
/// // All columns empty: one empty page, not zero
/// assert_eq!(page_count(&[0, 0], 10), 1);
/// assert_eq!(page_count(&[], 10), 1);
/// ```
pub fn page_count(counts: &[usize], page_size: usize) -> usize {
    let longest = counts.iter().copied().max().unwrap_or(0);
    let size = page_size.max(1);
    longest.div_ceil(size).max(1)
}

/// Slice one column's matches down to the requested page.
///
/// Pages are 1-based. A page starting past the end of `items` yields an
/// empty slice; that is the normal state for short columns when another
/// column drives the page count higher.
///
/// # Examples
/// ```
/// use imgrid::logic::pager::slice_for_page;
///
/// let items: Vec<u32> = (1..=12).collect();
/// assert_eq!(slice_for_page(&items, 2, 10).to_vec(), vec![11, 12]);
/// assert!(slice_for_page(&items, 5, 10).is_empty());
/// ```
pub fn slice_for_page<T>(items: &[T], active_page: usize, page_size: usize) -> &[T] {
    let page = active_page.max(1);
    let size = page_size.max(1);
    let start = (page - 1).saturating_mul(size);
    if start >= items.len() {
        return &[];
    }
    let end = start.saturating_add(size).min(items.len());
    &items[start..end]
}

/// Clamp an active page into `[1, page_count]`.
///
/// Used whenever the page count shrinks under the current page, e.g.
/// after a filter edit removes matches.
pub fn clamp_page(active_page: usize, page_count: usize) -> usize {
    active_page.clamp(1, page_count.max(1))
}
