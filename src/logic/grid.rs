//! Gallery grid arrangement
//!
//! Lays the current page's per-column slices out row-major. Columns with
//! fewer matches than the tallest column get explicit empty cells so the
//! grid keeps its shape.

use std::path::PathBuf;

/// One position in the gallery grid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GridCell {
    /// An image from this column's current-page slice.
    Image(PathBuf),
    /// Reserved position past the end of a shorter column.
    Empty,
}

/// Arrange per-column page slices into rows of cells.
///
/// Row `r`, column `c` holds `slices[c][r]` when in range and an
/// `Empty` cell otherwise. The number of rows equals the longest slice;
/// when every slice is empty the grid has no rows at all.
pub fn arrange(slices: &[&[PathBuf]]) -> Vec<Vec<GridCell>> {
    let num_rows = slices.iter().map(|slice| slice.len()).max().unwrap_or(0);

    (0..num_rows)
        .map(|row| {
            slices
                .iter()
                .map(|slice| match slice.get(row) {
                    Some(path) => GridCell::Image(path.clone()),
                    None => GridCell::Empty,
                })
                .collect()
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn paths(names: &[&str]) -> Vec<PathBuf> {
        names.iter().map(PathBuf::from).collect()
    }

    #[test]
    fn test_uneven_columns_pad_with_empty_cells() {
        let long = paths(&["a1", "a2", "a3"]);
        let short = paths(&["b1"]);
        let none: Vec<PathBuf> = Vec::new();
        let rows = arrange(&[&long[..], &short[..], &none[..]]);

        assert_eq!(rows.len(), 3, "longest column decides the row count");

        assert_eq!(rows[0][0], GridCell::Image(PathBuf::from("a1")));
        assert_eq!(rows[0][1], GridCell::Image(PathBuf::from("b1")));
        assert_eq!(rows[0][2], GridCell::Empty);

        for row in &rows[1..] {
            assert_eq!(row.len(), 3, "every row spans all columns");
            assert!(matches!(row[0], GridCell::Image(_)));
            assert_eq!(row[1], GridCell::Empty);
            assert_eq!(row[2], GridCell::Empty);
        }
    }

    #[test]
    fn test_all_empty_slices_give_empty_grid() {
        let none: Vec<PathBuf> = Vec::new();
        assert!(arrange(&[&none[..], &none[..]]).is_empty());
        assert!(arrange(&[]).is_empty());
    }

    #[test]
    fn test_order_preserved_in_both_dimensions() {
        let first = paths(&["a1", "a2"]);
        let second = paths(&["b1", "b2"]);
        let rows = arrange(&[&first[..], &second[..]]);

        assert_eq!(rows[0][0], GridCell::Image(PathBuf::from("a1")));
        assert_eq!(rows[0][1], GridCell::Image(PathBuf::from("b1")));
        assert_eq!(rows[1][0], GridCell::Image(PathBuf::from("a2")));
        assert_eq!(rows[1][1], GridCell::Image(PathBuf::from("b2")));
    }

    #[test]
    fn test_single_column() {
        let only = paths(&["x"]);
        let rows = arrange(&[&only[..]]);
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0], vec![GridCell::Image(PathBuf::from("x"))]);
    }
}
