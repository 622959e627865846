//! Grid file I/O.

mod grid_format;

pub use grid_format::{format_grid, load_grid, parse_grid, read_grid, save_grid, write_grid};
