//! Cost search implementation.

use crate::core::{CostGrid, GridCoord};
use log::{debug, trace};
use std::collections::BinaryHeap;

use super::types::{FrontierEntry, SearchConfig, SearchFailure, SearchResult};

/// Best-first minimum cost search from the top-left to the bottom-right cell.
///
/// Moves are restricted to one step down or one step right, so the state
/// graph is acyclic and entry costs are non-negative. Under those two
/// conditions the first time the goal is popped from the frontier its cost
/// is minimal, and no closed set is needed. Allowing up/left moves would
/// break that: a closed set (or full re-relaxation) becomes mandatory.
pub struct CostSearch<'a> {
    grid: &'a CostGrid,
    config: SearchConfig,
}

impl<'a> CostSearch<'a> {
    /// Create a new cost search
    pub fn new(grid: &'a CostGrid, config: SearchConfig) -> Self {
        Self { grid, config }
    }

    /// Create with default configuration
    pub fn with_defaults(grid: &'a CostGrid) -> Self {
        Self::new(grid, SearchConfig::default())
    }

    /// Run the search.
    ///
    /// All working state (cost table, frontier) lives in this call.
    pub fn search(&self) -> SearchResult {
        let grid = self.grid;
        let start = grid.start();
        let goal = grid.goal();

        trace!(
            "[CostSearch] search: {}x{} grid, start={} goal={}",
            grid.rows(),
            grid.cols(),
            start,
            goal
        );

        let Some(start_cost) = grid.entry_cost(start) else {
            debug!("[CostSearch] FAILED: StartBlocked");
            return SearchResult::failed(SearchFailure::StartBlocked, 0, 0);
        };
        if grid.is_blocked(goal) {
            debug!("[CostSearch] FAILED: GoalBlocked");
            return SearchResult::failed(SearchFailure::GoalBlocked, 0, 0);
        }

        let mut costs = vec![i64::MAX; grid.cell_count()];
        costs[grid.index(start)] = i64::from(start_cost);

        let mut frontier = BinaryHeap::new();
        let mut seq = 0u64;
        frontier.push(FrontierEntry {
            coord: start,
            cost: i64::from(start_cost),
            seq,
        });

        let mut nodes_expanded = 0;
        let mut stale_skipped = 0;

        while let Some(current) = frontier.pop() {
            nodes_expanded += 1;

            if let Some(limit) = self.config.max_iterations
                && nodes_expanded > limit
            {
                debug!(
                    "[CostSearch] FAILED: MaxIterationsExceeded ({} nodes)",
                    nodes_expanded
                );
                return SearchResult::failed(
                    SearchFailure::MaxIterationsExceeded,
                    nodes_expanded,
                    stale_skipped,
                );
            }

            if current.coord == goal {
                trace!(
                    "[CostSearch] SUCCESS: cost={}, nodes_expanded={}, stale_skipped={}",
                    current.cost, nodes_expanded, stale_skipped
                );
                return SearchResult::found(current.cost, nodes_expanded, stale_skipped);
            }

            // Superseded by a cheaper insertion for the same cell
            if current.cost > costs[grid.index(current.coord)] {
                stale_skipped += 1;
                continue;
            }

            for neighbor in current.coord.forward_neighbors() {
                let Some(step) = grid.entry_cost(neighbor) else {
                    continue;
                };

                let candidate = current.cost + i64::from(step);
                let idx = grid.index(neighbor);
                if candidate < costs[idx] {
                    costs[idx] = candidate;
                    seq += 1;
                    frontier.push(FrontierEntry {
                        coord: neighbor,
                        cost: candidate,
                        seq,
                    });
                }
            }
        }

        debug!(
            "[CostSearch] FAILED: NoPath after expanding {} nodes",
            nodes_expanded
        );
        SearchResult::failed(SearchFailure::NoPath, nodes_expanded, stale_skipped)
    }

    /// Minimum cost to reach `coord` from the start along right/down moves.
    ///
    /// Runs the search on the sub-grid whose bottom-right corner is `coord`.
    /// Returns `None` if `coord` is out of bounds or unreachable.
    pub fn cost_to(&self, coord: GridCoord) -> Option<i64> {
        if !self.grid.is_valid_coord(coord) {
            return None;
        }
        let cols = coord.col + 1;
        let cells: Vec<i32> = self
            .grid
            .iter_rows()
            .take(coord.row + 1)
            .flat_map(|row| row[..cols].iter().copied())
            .collect();
        let sub = CostGrid::from_cells(coord.row + 1, cols, cells).ok()?;
        CostSearch::new(&sub, self.config.clone()).search().cost
    }
}
