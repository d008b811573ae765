mod cell;
mod cell_set;
mod rules;
mod patterns;
mod strategy;
pub mod engine;
pub mod snapshot;

pub use cell::{Cell, CellState};
pub use cell_set::CellSet;
pub use rules::{count_live_neighbors, next_state};
pub use patterns::{Pattern, presets};
pub use strategy::Strategy;
pub use engine::Generation;
pub use snapshot::SnapshotError;
