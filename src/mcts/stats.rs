//! Search statistics for diagnostics and tuning.

use serde::{Deserialize, Serialize};

/// Statistics collected during one search invocation.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct SearchStats {
    /// Full Selection->Backpropagation iterations performed.
    pub iterations: u32,

    /// Rollouts performed.
    pub simulations: u32,

    /// Expansion passes (each creates all children of one node).
    pub nodes_expanded: u32,

    /// Maximum tree depth reached.
    pub max_depth: u16,

    /// Wall-clock time spent searching (microseconds).
    pub time_us: u64,
}

impl SearchStats {
    /// Create new empty statistics.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Reset all statistics to zero.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Iterations per second over the measured interval.
    #[must_use]
    pub fn iterations_per_second(&self) -> f64 {
        if self.time_us == 0 {
            0.0
        } else {
            f64::from(self.iterations) / (self.time_us as f64 / 1_000_000.0)
        }
    }
}
