//! Grid file loading and configuration, end to end.

use std::io::Write;
use std::path::Path;

use tempfile::{NamedTempFile, tempdir};
use urja_path::io::{load_grid, save_grid};
use urja_path::{CostGrid, CostSearch, SearchFailure, UNREACHABLE, UrjaConfig, UrjaError};

fn grids_dir() -> &'static Path {
    Path::new(concat!(env!("CARGO_MANIFEST_DIR"), "/grids"))
}

#[test]
fn test_bundled_sample_grid() {
    let grid = load_grid(&grids_dir().join("sample.grid")).unwrap();
    assert_eq!(grid.rows(), 4);
    assert_eq!(grid.blocked_count(), 1);
    assert_eq!(CostSearch::with_defaults(&grid).search().energy(), 13);
}

#[test]
fn test_bundled_walled_grid() {
    let grid = load_grid(&grids_dir().join("walled.grid")).unwrap();
    let result = CostSearch::with_defaults(&grid).search();
    assert_eq!(result.energy(), UNREACHABLE);
    assert_eq!(result.failure_reason, Some(SearchFailure::NoPath));
}

#[test]
fn test_save_then_load() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("roundtrip.grid");

    let grid = CostGrid::from_rows(&[[2, 7, -1], [0, 3, 4]]).unwrap();
    save_grid(&grid, &path).unwrap();

    assert_eq!(load_grid(&path).unwrap(), grid);
}

#[test]
fn test_jagged_file_rejected() {
    let mut file = NamedTempFile::new().unwrap();
    writeln!(file, "1 2 3").unwrap();
    writeln!(file, "4 5").unwrap();

    let err = load_grid(file.path()).unwrap_err();
    assert!(matches!(err, UrjaError::Parse { line: 2, .. }));
}

#[test]
fn test_missing_file_is_io_error() {
    let dir = tempdir().unwrap();
    let err = load_grid(&dir.path().join("absent.grid")).unwrap_err();
    assert!(matches!(err, UrjaError::Io(_)));
}

#[test]
fn test_bundled_config_loads() {
    let path = Path::new(concat!(env!("CARGO_MANIFEST_DIR"), "/configs/urja.yaml"));
    let config = UrjaConfig::load(path).unwrap();
    assert_eq!(config, UrjaConfig::default());
}

#[test]
fn test_config_limit_applies_to_search() {
    let mut file = NamedTempFile::new().unwrap();
    writeln!(file, "search:\n  max_iterations: 2").unwrap();

    let config = UrjaConfig::load(file.path()).unwrap();
    let grid = CostGrid::filled(5, 5, 1).unwrap();
    let result = CostSearch::new(&grid, config.to_search_config()).search();
    assert_eq!(
        result.failure_reason,
        Some(SearchFailure::MaxIterationsExceeded)
    );
}
