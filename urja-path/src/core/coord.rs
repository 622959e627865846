//! Grid coordinate type.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Cell index in a cost grid (row-major, origin at top-left)
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct GridCoord {
    /// Row index (increases downward)
    pub row: usize,
    /// Column index (increases rightward)
    pub col: usize,
}

impl GridCoord {
    /// Create a new grid coordinate
    #[inline]
    pub fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// The cell one row below
    #[inline]
    pub fn down(&self) -> GridCoord {
        GridCoord::new(self.row + 1, self.col)
    }

    /// The cell one column to the right
    #[inline]
    pub fn right(&self) -> GridCoord {
        GridCoord::new(self.row, self.col + 1)
    }

    /// The two forward neighbours, down first then right.
    ///
    /// These are the only moves the cost search makes. Neither may be in
    /// bounds; callers check against the grid.
    #[inline]
    pub fn forward_neighbors(&self) -> [GridCoord; 2] {
        [self.down(), self.right()]
    }
}

impl fmt::Display for GridCoord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({},{})", self.row, self.col)
    }
}
