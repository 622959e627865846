//! Minimum energy cost search.
//!
//! Best-first search over a right/down-only grid:
//! - Cost-ordered frontier with insertion-order tie-break
//! - Stale frontier entries skipped on pop
//! - Early return on the first extraction of the goal

mod planner;
mod types;

pub use planner::CostSearch;
pub use types::{SearchConfig, SearchFailure, SearchResult, UNREACHABLE};

use crate::core::CostGrid;
use crate::error::Result;

/// Minimum energy cost from the top-left to the bottom-right cell.
///
/// Validates the rows first (see [`CostGrid::from_rows`]). Returns `-1` if
/// the start or goal is blocked or no right/down route exists.
pub fn min_energy_cost<R: AsRef<[i32]>>(rows: &[R]) -> Result<i64> {
    let grid = CostGrid::from_rows(rows)?;
    Ok(min_energy_cost_grid(&grid))
}

/// Minimum energy cost on an already validated grid (`-1` if unreachable)
pub fn min_energy_cost_grid(grid: &CostGrid) -> i64 {
    CostSearch::with_defaults(grid).search().energy()
}

/// Check if any right/down route reaches the goal
pub fn path_exists(grid: &CostGrid) -> bool {
    CostSearch::with_defaults(grid).search().success
}
