//! Generation stepping over a sparse cell set.
//!
//! Only live cells and their immediate neighbours are ever visited, so the
//! cost of a step is proportional to the population, not to any grid area.
//! The input set is borrowed immutably for the whole step: every count reads
//! the same unchanged generation and the result is built into a fresh set.

use super::{Cell, CellSet, next_state};
use rayon::prelude::*;
use std::collections::HashSet;

/// Result of one generation step
#[derive(Clone, Debug, Default)]
pub struct Generation {
    pub cells: CellSet,
    pub births: usize,
    pub deaths: usize,
}

impl Generation {
    /// Advisory: nothing is left alive, further steps are no-ops
    pub fn is_extinct(&self) -> bool {
        self.cells.is_empty()
    }
}

fn alive_next(current: &CellSet, cell: Cell) -> bool {
    next_state(current, cell).is_alive()
}

/// Advance one generation (serial)
pub fn step(current: &CellSet) -> Generation {
    let (survivors, dead): (Vec<Cell>, Vec<Cell>) =
        current.iter().partition(|&cell| alive_next(current, cell));

    // Dead neighbours of live cells, each listed once
    let candidates: HashSet<Cell> = current
        .iter()
        .flat_map(Cell::neighbors)
        .filter(|&cell| !current.contains(cell))
        .collect();

    let births: Vec<Cell> = candidates
        .into_iter()
        .filter(|&cell| alive_next(current, cell))
        .collect();

    assemble(survivors, births, dead.len())
}

/// Parallel evolution using rayon for large populations.
/// Produces exactly the same generation as [`step`].
pub fn step_parallel(current: &CellSet) -> Generation {
    let live: Vec<Cell> = current.iter().collect();

    let (survivors, dead): (Vec<Cell>, Vec<Cell>) = live
        .par_iter()
        .copied()
        .partition(|&cell| alive_next(current, cell));

    let candidates: HashSet<Cell> = live
        .par_iter()
        .flat_map_iter(|&cell| cell.neighbors())
        .filter(|&cell| !current.contains(cell))
        .collect();

    let births: Vec<Cell> = candidates
        .par_iter()
        .copied()
        .filter(|&cell| alive_next(current, cell))
        .collect();

    assemble(survivors, births, dead.len())
}

fn assemble(survivors: Vec<Cell>, births: Vec<Cell>, deaths: usize) -> Generation {
    let born = births.len();
    let mut cells = CellSet::with_capacity(survivors.len() + born);
    cells.extend(survivors);
    cells.extend(births);

    Generation {
        cells,
        births: born,
        deaths,
    }
}
