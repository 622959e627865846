//! # Urja-Path: Minimum Energy Cost Search
//!
//! Computes the cheapest right/down route from the top-left to the
//! bottom-right cell of a cost grid. Blocked cells hold `-1`; every other
//! cell holds the non-negative energy paid on entering it, start cell
//! included.
//!
//! ## Quick Start
//!
//! ```rust
//! use urja_path::min_energy_cost;
//!
//! let grid = vec![
//!     vec![1, 3, 1, 5],
//!     vec![2, -1, 4, 2],
//!     vec![3, 2, 5, 1],
//!     vec![4, 3, 2, 1],
//! ];
//! assert_eq!(min_energy_cost(&grid).unwrap(), 13);
//! ```
//!
//! An unreachable goal is reported as `-1`, not as an error. Errors are
//! reserved for malformed input (empty, jagged or negative-cost grids).
//!
//! ## Architecture
//!
//! - [`core`](crate::core): Grid types ([`CostGrid`], [`GridCoord`])
//! - [`pathfinding`]: The cost search ([`CostSearch`])
//! - [`io`]: Plain-text grid files
//! - [`config`]: YAML configuration
//! - [`error`]: Error types

pub mod config;
pub mod core;
pub mod error;
pub mod io;
pub mod pathfinding;

pub use config::UrjaConfig;
pub use crate::core::{BLOCKED, CostGrid, GridCoord};
pub use error::{Result, UrjaError};
pub use pathfinding::{
    CostSearch, SearchConfig, SearchFailure, SearchResult, UNREACHABLE, min_energy_cost,
    min_energy_cost_grid, path_exists,
};
