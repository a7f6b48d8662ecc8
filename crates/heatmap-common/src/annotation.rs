//! Per-cell annotation text.

use crate::grid::Grid;

/// Display strings parallel to a [`Grid`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Annotations {
    width: usize,
    cells: Vec<String>,
}

impl Annotations {
    /// Derive the annotation of every cell.
    pub fn from_grid(grid: &Grid) -> Self {
        let width = grid.n_cols();
        let cells = (0..grid.n_rows())
            .flat_map(|row| grid.row(row).iter().map(|value| format_cell(*value)))
            .collect();
        Self { width, cells }
    }

    pub fn get(&self, row: usize, col: usize) -> &str {
        &self.cells[row * self.width + col]
    }

    /// Iterate over `(row, col, text)` for every non-empty annotation.
    pub fn non_empty(&self) -> impl Iterator<Item = (usize, usize, &str)> + '_ {
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, text)| !text.is_empty())
            .map(move |(idx, text)| (idx / self.width, idx % self.width, text.as_str()))
    }
}

/// Text for one cell: empty for absent cells and exact zeros, otherwise
/// the value truncated toward zero.
pub fn format_cell(value: Option<f64>) -> String {
    match value {
        Some(v) if v != 0.0 => format!("{}", v.trunc()),
        _ => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_cell() {
        assert_eq!(format_cell(None), "");
        assert_eq!(format_cell(Some(0.0)), "");
        assert_eq!(format_cell(Some(5.0)), "5");
        assert_eq!(format_cell(Some(1234.0)), "1234");
    }

    #[test]
    fn test_fractions_truncate() {
        assert_eq!(format_cell(Some(2.9)), "2");
        assert_eq!(format_cell(Some(0.5)), "0");
    }

    #[test]
    fn test_large_counts_are_exact() {
        assert_eq!(format_cell(Some(1e19)), "10000000000000000000");
        assert_eq!(format_cell(Some(9_007_199_254_740_993.0)), "9007199254740992");
    }
}
