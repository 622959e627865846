//! UrjaPath - minimum energy cost driver
//!
//! Loads a grid file (or the built-in sample grid), runs the cost search
//! and prints the result.
//!
//! Usage:
//!   urja-path grids/sample.grid
//!   urja-path --stats                 # Uses the sample grid
//!   RUST_LOG=urja_path=trace urja-path grids/sample.grid

use clap::Parser;
use log::info;
use std::path::PathBuf;

use urja_path::{CostGrid, CostSearch, Result, UrjaConfig, io::load_grid};

/// Grid used when no file is given
const SAMPLE_GRID: [[i32; 4]; 4] = [[1, 3, 1, 5], [2, -1, 4, 2], [3, 2, 5, 1], [4, 3, 2, 1]];

/// Minimum energy cost over a right/down grid
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Grid file (one row per line, -1 or x for blocked cells)
    grid: Option<PathBuf>,

    /// Configuration file path
    #[arg(short, long, default_value = "configs/urja.yaml")]
    config: PathBuf,

    /// Maximum frontier pops before giving up (overrides config, 0 = unbounded)
    #[arg(long)]
    max_iterations: Option<usize>,

    /// Print search statistics
    #[arg(long)]
    stats: bool,

    /// Echo the grid before searching
    #[arg(long)]
    show_grid: bool,
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    let mut config = UrjaConfig::load_or_default(&args.config)?;
    if let Some(n) = args.max_iterations {
        config.search.max_iterations = n;
    }
    config.output.show_stats |= args.stats;
    config.output.show_grid |= args.show_grid;

    let grid = match &args.grid {
        Some(path) => {
            info!("Loading grid from {}", path.display());
            load_grid(path)?
        }
        None => {
            info!("No grid file given, using the sample grid");
            CostGrid::from_rows(&SAMPLE_GRID)?
        }
    };
    info!(
        "Grid: {}x{} cells, {} blocked",
        grid.rows(),
        grid.cols(),
        grid.blocked_count()
    );

    if config.output.show_grid {
        print!("{}", grid);
    }

    let result = CostSearch::new(&grid, config.to_search_config()).search();
    println!("Minimum Energy Cost: {}", result.energy());

    if config.output.show_stats {
        println!(
            "Nodes expanded: {} ({} stale)",
            result.nodes_expanded, result.stale_skipped
        );
        if let Some(reason) = result.failure_reason {
            println!("Failure: {:?}", reason);
        }
    }

    Ok(())
}
