//! Default value functions for serde deserialization.

pub fn max_iterations() -> usize {
    0
}

pub fn show_stats() -> bool {
    false
}

pub fn show_grid() -> bool {
    false
}
