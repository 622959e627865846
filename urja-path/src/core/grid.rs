//! Cost grid storage.
//!
//! Cells are stored row-major in a single contiguous `Vec<i32>`. A cell
//! holding [`BLOCKED`] cannot be entered; any other value is the
//! non-negative cost paid on entering it.

use std::fmt;

use crate::error::{Result, UrjaError};

use super::GridCoord;

/// Sentinel value marking an impassable cell
pub const BLOCKED: i32 = -1;

/// Immutable rectangular grid of cell entry costs.
///
/// Construction validates the input, so every `CostGrid` is non-empty,
/// rectangular and free of negative costs other than [`BLOCKED`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CostGrid {
    /// Cell costs, row-major
    cells: Vec<i32>,
    /// Number of rows
    rows: usize,
    /// Number of columns
    cols: usize,
}

impl CostGrid {
    /// Build a grid from rows of cell values.
    ///
    /// Fails with [`UrjaError::EmptyGrid`] if there are no rows or the first
    /// row is empty, [`UrjaError::JaggedRow`] if any row length differs from
    /// the first, and [`UrjaError::InvalidCost`] for values below `-1`.
    pub fn from_rows<R: AsRef<[i32]>>(rows: &[R]) -> Result<Self> {
        let cols = rows.first().map(|r| r.as_ref().len()).unwrap_or(0);
        if cols == 0 {
            return Err(UrjaError::EmptyGrid);
        }

        let count = checked_cell_count(rows.len(), cols)?;
        let mut cells = Vec::with_capacity(count);
        for (row, values) in rows.iter().enumerate() {
            let values = values.as_ref();
            if values.len() != cols {
                return Err(UrjaError::JaggedRow {
                    row,
                    expected: cols,
                    found: values.len(),
                });
            }
            cells.extend_from_slice(values);
        }

        Self::from_cells(rows.len(), cols, cells)
    }

    /// Build a grid from a flat row-major cell vector.
    ///
    /// Fails with [`UrjaError::CellCountMismatch`] unless `cells` holds
    /// exactly `rows * cols` values.
    pub fn from_cells(rows: usize, cols: usize, cells: Vec<i32>) -> Result<Self> {
        let expected = checked_cell_count(rows, cols)?;
        if cells.len() != expected {
            return Err(UrjaError::CellCountMismatch {
                rows,
                cols,
                expected,
                found: cells.len(),
            });
        }
        if let Some(idx) = cells.iter().position(|&v| v < BLOCKED) {
            return Err(UrjaError::InvalidCost {
                row: idx / cols,
                col: idx % cols,
                value: cells[idx],
            });
        }

        Ok(Self { cells, rows, cols })
    }

    /// Grid filled with a single cost
    pub fn filled(rows: usize, cols: usize, cost: i32) -> Result<Self> {
        let count = checked_cell_count(rows, cols)?;
        Self::from_cells(rows, cols, vec![cost; count])
    }

    /// Number of rows
    #[inline]
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Number of columns
    #[inline]
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Total number of cells
    #[inline]
    pub fn cell_count(&self) -> usize {
        self.cells.len()
    }

    /// Top-left cell, where every search starts
    #[inline]
    pub fn start(&self) -> GridCoord {
        GridCoord::new(0, 0)
    }

    /// Bottom-right cell, where every search ends
    #[inline]
    pub fn goal(&self) -> GridCoord {
        GridCoord::new(self.rows - 1, self.cols - 1)
    }

    /// Whether the coordinate lies inside the grid
    #[inline]
    pub fn is_valid_coord(&self, coord: GridCoord) -> bool {
        coord.row < self.rows && coord.col < self.cols
    }

    /// Flat index of a coordinate. Caller guarantees it is in bounds.
    #[inline]
    pub fn index(&self, coord: GridCoord) -> usize {
        coord.row * self.cols + coord.col
    }

    /// Cell value at a coordinate, `None` if out of bounds
    #[inline]
    pub fn get(&self, coord: GridCoord) -> Option<i32> {
        if self.is_valid_coord(coord) {
            Some(self.cells[self.index(coord)])
        } else {
            None
        }
    }

    /// Entry cost of a cell, `None` if out of bounds or blocked
    #[inline]
    pub fn entry_cost(&self, coord: GridCoord) -> Option<i32> {
        self.get(coord).filter(|&v| v != BLOCKED)
    }

    /// Whether a cell is out of bounds or blocked
    #[inline]
    pub fn is_blocked(&self, coord: GridCoord) -> bool {
        self.entry_cost(coord).is_none()
    }

    /// Copy of this grid with one cell replaced.
    ///
    /// Returns `None` if the coordinate is out of bounds or the value is
    /// below the blocked sentinel.
    pub fn with_cell(&self, coord: GridCoord, value: i32) -> Option<Self> {
        if !self.is_valid_coord(coord) || value < BLOCKED {
            return None;
        }
        let mut next = self.clone();
        let idx = next.index(coord);
        next.cells[idx] = value;
        Some(next)
    }

    /// Iterate over rows as slices
    pub fn iter_rows(&self) -> impl Iterator<Item = &[i32]> {
        self.cells.chunks_exact(self.cols)
    }

    /// Number of blocked cells
    pub fn blocked_count(&self) -> usize {
        self.cells.iter().filter(|&&v| v == BLOCKED).count()
    }
}

/// Cell count of a `rows x cols` grid, rejecting empty and overflowing shapes
fn checked_cell_count(rows: usize, cols: usize) -> Result<usize> {
    if rows == 0 || cols == 0 {
        return Err(UrjaError::EmptyGrid);
    }
    rows.checked_mul(cols)
        .filter(|&n| n <= isize::MAX as usize / std::mem::size_of::<i32>())
        .ok_or(UrjaError::GridTooLarge { rows, cols })
}

impl fmt::Display for CostGrid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let width = self
            .cells
            .iter()
            .map(|v| v.to_string().len())
            .max()
            .unwrap_or(1);
        for row in self.iter_rows() {
            let line: Vec<String> = row
                .iter()
                .map(|&v| {
                    if v == BLOCKED {
                        format!("{:>width$}", "#")
                    } else {
                        format!("{:>width$}", v)
                    }
                })
                .collect();
            writeln!(f, "{}", line.join(" "))?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_rows() {
        let grid = CostGrid::from_rows(&[vec![1, 2, 3], vec![4, -1, 6]]).unwrap();
        assert_eq!(grid.rows(), 2);
        assert_eq!(grid.cols(), 3);
        assert_eq!(grid.cell_count(), 6);
        assert_eq!(grid.get(GridCoord::new(1, 2)), Some(6));
        assert_eq!(grid.goal(), GridCoord::new(1, 2));
        assert_eq!(grid.blocked_count(), 1);
    }

    #[test]
    fn test_from_array_rows() {
        let grid = CostGrid::from_rows(&[[5]]).unwrap();
        assert_eq!(grid.start(), grid.goal());
    }

    #[test]
    fn test_empty_grid_rejected() {
        let empty: [Vec<i32>; 0] = [];
        assert!(matches!(
            CostGrid::from_rows(&empty),
            Err(UrjaError::EmptyGrid)
        ));
        assert!(matches!(
            CostGrid::from_rows(&[Vec::<i32>::new()]),
            Err(UrjaError::EmptyGrid)
        ));
    }

    #[test]
    fn test_jagged_grid_rejected() {
        let result = CostGrid::from_rows(&[vec![1, 2, 3], vec![4, 5, 6], vec![7, 8]]);
        match result {
            Err(UrjaError::JaggedRow {
                row,
                expected,
                found,
            }) => {
                assert_eq!(row, 2);
                assert_eq!(expected, 3);
                assert_eq!(found, 2);
            }
            other => panic!("expected JaggedRow, got {:?}", other),
        }
    }

    #[test]
    fn test_negative_cost_rejected() {
        let result = CostGrid::from_rows(&[vec![1, 2], vec![-3, 4]]);
        match result {
            Err(UrjaError::InvalidCost { row, col, value }) => {
                assert_eq!((row, col, value), (1, 0, -3));
            }
            other => panic!("expected InvalidCost, got {:?}", other),
        }
    }

    #[test]
    fn test_from_cells_length_mismatch() {
        assert!(matches!(
            CostGrid::from_cells(2, 3, vec![1, 2, 3, 4]),
            Err(UrjaError::CellCountMismatch {
                expected: 6,
                found: 4,
                ..
            })
        ));

        // Too many cells reports the totals, not a row past the end
        let err = CostGrid::from_cells(2, 3, vec![0; 9]).unwrap_err();
        assert_eq!(err.to_string(), "Grid of 2x3 needs 6 cells, found 9");
    }

    #[test]
    fn test_oversized_shape_rejected() {
        assert!(matches!(
            CostGrid::from_cells(1 << 63, 2, Vec::new()),
            Err(UrjaError::GridTooLarge { .. })
        ));
        assert!(matches!(
            CostGrid::filled(usize::MAX, 2, 1),
            Err(UrjaError::GridTooLarge { .. })
        ));
        assert!(matches!(
            CostGrid::from_cells(0, 4, Vec::new()),
            Err(UrjaError::EmptyGrid)
        ));
    }

    #[test]
    fn test_blocked_and_bounds() {
        let grid = CostGrid::from_rows(&[vec![0, -1], vec![2, 3]]).unwrap();
        assert!(grid.is_blocked(GridCoord::new(0, 1)));
        assert!(grid.is_blocked(GridCoord::new(2, 0)));
        assert!(!grid.is_blocked(GridCoord::new(1, 0)));
        assert_eq!(grid.entry_cost(GridCoord::new(0, 0)), Some(0));
        assert_eq!(grid.entry_cost(GridCoord::new(0, 1)), None);
    }

    #[test]
    fn test_with_cell_leaves_original_untouched() {
        let grid = CostGrid::filled(2, 2, 1).unwrap();
        let changed = grid.with_cell(GridCoord::new(1, 1), 9).unwrap();
        assert_eq!(grid.get(GridCoord::new(1, 1)), Some(1));
        assert_eq!(changed.get(GridCoord::new(1, 1)), Some(9));
        assert!(grid.with_cell(GridCoord::new(2, 0), 1).is_none());
        assert!(grid.with_cell(GridCoord::new(0, 0), -2).is_none());
    }

    #[test]
    fn test_display_marks_blocked() {
        let grid = CostGrid::from_rows(&[vec![1, -1], vec![10, 2]]).unwrap();
        assert_eq!(grid.to_string(), " 1  #\n10  2\n");
    }
}
