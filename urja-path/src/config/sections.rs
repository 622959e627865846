//! Configuration sections.

use serde::{Deserialize, Serialize};

use super::defaults;

/// Search settings section
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchSection {
    /// Maximum frontier pops before giving up (0 = unbounded)
    #[serde(default = "defaults::max_iterations")]
    pub max_iterations: usize,
}

impl Default for SearchSection {
    fn default() -> Self {
        Self {
            max_iterations: defaults::max_iterations(),
        }
    }
}

/// Driver output section
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutputSection {
    /// Print expansion statistics after the result
    #[serde(default = "defaults::show_stats")]
    pub show_stats: bool,

    /// Echo the grid before searching
    #[serde(default = "defaults::show_grid")]
    pub show_grid: bool,
}

impl Default for OutputSection {
    fn default() -> Self {
        Self {
            show_stats: defaults::show_stats(),
            show_grid: defaults::show_grid(),
        }
    }
}
