//! Core types for the urja-path cost grid.
//!
//! - [`GridCoord`]: `(row, col)` cell index with right/down neighbours
//! - [`CostGrid`]: validated, immutable grid of cell entry costs
//! - [`BLOCKED`]: sentinel marking an impassable cell

mod coord;
mod grid;

pub use coord::GridCoord;
pub use grid::{BLOCKED, CostGrid};
