//! Selects which generation implementation a step runs with.

use super::{CellSet, Generation, engine};

/// Available step implementations. Both produce identical generations;
/// they differ only in how the work is scheduled.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum Strategy {
    /// Single thread
    Serial,
    /// rayon across the live cells and birth candidates
    Parallel,
    /// Parallel once the population exceeds the configured threshold
    #[default]
    Auto,
}

impl Strategy {
    /// Display name for the UI
    pub fn name(&self) -> &'static str {
        match self {
            Strategy::Serial => "Serial",
            Strategy::Parallel => "Parallel",
            Strategy::Auto => "Auto",
        }
    }

    /// Next strategy in UI cycling order
    pub fn next(self) -> Self {
        match self {
            Strategy::Serial => Strategy::Parallel,
            Strategy::Parallel => Strategy::Auto,
            Strategy::Auto => Strategy::Serial,
        }
    }

    /// Whether a step over `population` live cells runs on rayon
    pub fn is_parallel_for(self, population: usize, parallel_threshold: usize) -> bool {
        match self {
            Strategy::Serial => false,
            Strategy::Parallel => true,
            Strategy::Auto => population > parallel_threshold,
        }
    }

    pub fn step(self, cells: &CellSet, parallel_threshold: usize) -> Generation {
        if self.is_parallel_for(cells.len(), parallel_threshold) {
            engine::step_parallel(cells)
        } else {
            engine::step(cells)
        }
    }
}
