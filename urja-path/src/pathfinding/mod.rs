//! Path cost algorithms.
//!
//! ```rust
//! use urja_path::pathfinding::{CostSearch, min_energy_cost};
//! use urja_path::CostGrid;
//!
//! let energy = min_energy_cost(&[[1, 3], [2, 1]]).unwrap();
//! assert_eq!(energy, 4);
//!
//! let grid = CostGrid::from_rows(&[[1, -1], [2, 1]]).unwrap();
//! let result = CostSearch::with_defaults(&grid).search();
//! assert_eq!(result.cost, Some(4));
//! ```

pub mod search;

pub use search::{
    CostSearch, SearchConfig, SearchFailure, SearchResult, UNREACHABLE, min_energy_cost,
    min_energy_cost_grid, path_exists,
};
