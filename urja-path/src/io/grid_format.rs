//! Plain-text grid format.
//!
//! Format:
//! - One grid row per line
//! - Cells separated by whitespace and/or commas
//! - `-1`, `x` or `X` marks a blocked cell
//! - `#` starts a comment running to the end of the line
//! - Blank and comment-only lines are ignored
//!
//! ```text
//! # sample grid
//! 1  3 1 5
//! 2  x 4 2
//! 3  2 5 1
//! 4  3 2 1
//! ```

use crate::core::{BLOCKED, CostGrid};
use crate::error::{Result, UrjaError};
use std::io::{Read, Write};
use std::path::Path;

/// Load a grid from a text file
pub fn load_grid(path: &Path) -> Result<CostGrid> {
    let mut file = std::fs::File::open(path)?;
    read_grid(&mut file)
}

/// Read a grid from a reader
pub fn read_grid<R: Read>(reader: &mut R) -> Result<CostGrid> {
    let mut contents = String::new();
    reader.read_to_string(&mut contents)?;
    parse_grid(&contents)
}

/// Parse a grid from text
pub fn parse_grid(text: &str) -> Result<CostGrid> {
    let mut rows: Vec<Vec<i32>> = Vec::new();
    let mut expected: Option<usize> = None;

    for (i, raw) in text.lines().enumerate() {
        let line_no = i + 1;
        let line = match raw.find('#') {
            Some(pos) => &raw[..pos],
            None => raw,
        };

        let row = line
            .split(|c: char| c.is_whitespace() || c == ',')
            .filter(|tok| !tok.is_empty())
            .map(|tok| parse_cell(tok, line_no))
            .collect::<Result<Vec<i32>>>()?;

        if row.is_empty() {
            continue;
        }

        // Checked here so the error points at the offending line
        match expected {
            Some(cols) if cols != row.len() => {
                return Err(UrjaError::Parse {
                    line: line_no,
                    message: format!("expected {} cells, found {}", cols, row.len()),
                });
            }
            None => expected = Some(row.len()),
            _ => {}
        }
        rows.push(row);
    }

    CostGrid::from_rows(&rows)
}

fn parse_cell(token: &str, line: usize) -> Result<i32> {
    if token.eq_ignore_ascii_case("x") {
        return Ok(BLOCKED);
    }
    let value: i32 = token.parse().map_err(|e| UrjaError::Parse {
        line,
        message: format!("invalid cell '{}': {}", token, e),
    })?;
    if value < BLOCKED {
        return Err(UrjaError::Parse {
            line,
            message: format!("negative cost {} (only {} marks a blocked cell)", value, BLOCKED),
        });
    }
    Ok(value)
}

/// Render a grid in the text format (blocked cells as `-1`)
pub fn format_grid(grid: &CostGrid) -> String {
    let mut out = String::with_capacity(grid.cell_count() * 3);
    for row in grid.iter_rows() {
        let line: Vec<String> = row.iter().map(|v| v.to_string()).collect();
        out.push_str(&line.join(" "));
        out.push('\n');
    }
    out
}

/// Save a grid to a text file
pub fn save_grid(grid: &CostGrid, path: &Path) -> Result<()> {
    let mut file = std::fs::File::create(path)?;
    write_grid(grid, &mut file)
}

/// Write a grid to a writer in the text format
pub fn write_grid<W: Write>(grid: &CostGrid, writer: &mut W) -> Result<()> {
    writer.write_all(format_grid(grid).as_bytes())?;
    Ok(())
}
