//! Cost search types.

use crate::core::GridCoord;
use std::cmp::Ordering;

/// Energy reported when the goal cannot be reached
pub const UNREACHABLE: i64 = -1;

/// A candidate cell in the search frontier
#[derive(Clone, Debug)]
pub(super) struct FrontierEntry {
    pub coord: GridCoord,
    pub cost: i64, // Accumulated cost including the start cell
    pub seq: u64,  // Insertion order, breaks cost ties
}

impl Eq for FrontierEntry {}

impl PartialEq for FrontierEntry {
    fn eq(&self, other: &Self) -> bool {
        self.cost == other.cost && self.seq == other.seq
    }
}

impl Ord for FrontierEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reverse ordering for min-heap behavior; earlier insertion wins ties
        other
            .cost
            .cmp(&self.cost)
            .then_with(|| other.seq.cmp(&self.seq))
    }
}

impl PartialOrd for FrontierEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Cost search configuration
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SearchConfig {
    /// Maximum number of frontier pops before giving up (`None` = unbounded)
    pub max_iterations: Option<usize>,
}

impl SearchConfig {
    /// Create with an expansion limit (`0` = unbounded, as in the YAML config)
    pub fn with_max_iterations(max_iterations: usize) -> Self {
        Self {
            max_iterations: (max_iterations > 0).then_some(max_iterations),
        }
    }
}

/// Result of a cost search
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SearchResult {
    /// Minimum accumulated cost (`None` if the goal was not reached)
    pub cost: Option<i64>,
    /// Number of frontier entries popped, stale ones included
    pub nodes_expanded: usize,
    /// Number of popped entries skipped because a cheaper cost was already recorded
    pub stale_skipped: usize,
    /// Whether the goal was reached
    pub success: bool,
    /// Reason for failure (if any)
    pub failure_reason: Option<SearchFailure>,
}

impl SearchResult {
    pub(super) fn found(cost: i64, nodes_expanded: usize, stale_skipped: usize) -> Self {
        Self {
            cost: Some(cost),
            nodes_expanded,
            stale_skipped,
            success: true,
            failure_reason: None,
        }
    }

    pub(super) fn failed(
        reason: SearchFailure,
        nodes_expanded: usize,
        stale_skipped: usize,
    ) -> Self {
        Self {
            cost: None,
            nodes_expanded,
            stale_skipped,
            success: false,
            failure_reason: Some(reason),
        }
    }

    /// Cost with the `-1` convention for an unreachable goal
    pub fn energy(&self) -> i64 {
        self.cost.unwrap_or(UNREACHABLE)
    }
}

/// Reason a search did not reach the goal
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SearchFailure {
    /// Start cell is blocked
    StartBlocked,
    /// Goal cell is blocked
    GoalBlocked,
    /// Every right/down route is obstructed
    NoPath,
    /// Maximum iterations exceeded
    MaxIterationsExceeded,
}
