//! Search statistics for diagnostics and benchmarking.

use serde::{Deserialize, Serialize};

/// Statistics collected during one minimax search.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchStats {
    /// Positions visited (one per `search` call, root included).
    pub nodes: u32,

    /// Branch loops cut short by alpha-beta.
    pub cutoffs: u32,

    /// Positions that were won, lost, or drawn on arrival.
    pub terminal_nodes: u32,

    /// Deepest ply reached below the root.
    pub max_depth: u8,

    /// Total time spent searching (microseconds).
    pub time_us: u64,
}

impl SearchStats {
    /// Create new empty statistics.
    pub fn new() -> Self {
        Self::default()
    }

    /// Reset all statistics to zero.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Calculate nodes visited per second.
    #[must_use]
    pub fn nodes_per_second(&self) -> f64 {
        if self.time_us == 0 {
            0.0
        } else {
            self.nodes as f64 / (self.time_us as f64 / 1_000_000.0)
        }
    }
}
