//! Sparse storage for the live cells of an unbounded grid.
//! Only live coordinates are stored; anything absent is dead.

use super::Cell;
use std::collections::HashSet;

/// Set of live cells with O(1) average membership
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CellSet {
    cells: HashSet<Cell>,
}

impl CellSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            cells: HashSet::with_capacity(capacity),
        }
    }

    #[inline]
    pub fn contains(&self, cell: Cell) -> bool {
        self.cells.contains(&cell)
    }

    /// Insert a cell, returning true if it was dead before
    pub fn insert(&mut self, cell: Cell) -> bool {
        self.cells.insert(cell)
    }

    /// Remove a cell, returning true if it was alive before
    pub fn remove(&mut self, cell: Cell) -> bool {
        self.cells.remove(&cell)
    }

    /// Flip a cell between alive and dead. Returns the new liveness.
    pub fn toggle(&mut self, cell: Cell) -> bool {
        if self.cells.remove(&cell) {
            false
        } else {
            self.cells.insert(cell);
            true
        }
    }

    /// Swap in a new population. Duplicates in `cells` collapse.
    /// The replacement is built in full before the old set is dropped.
    pub fn replace_all<I: IntoIterator<Item = Cell>>(&mut self, cells: I) {
        let next: HashSet<Cell> = cells.into_iter().collect();
        self.cells = next;
    }

    /// Sorted copy of the current members
    pub fn snapshot(&self) -> Vec<Cell> {
        let mut cells: Vec<Cell> = self.cells.iter().copied().collect();
        cells.sort_unstable();
        cells
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    pub fn clear(&mut self) {
        self.cells.clear();
    }

    /// Iterate live cells in no particular order
    pub fn iter(&self) -> impl Iterator<Item = Cell> + '_ {
        self.cells.iter().copied()
    }

    /// Smallest rectangle containing every live cell, as (min, max) corners
    pub fn bounds(&self) -> Option<(Cell, Cell)> {
        let mut iter = self.cells.iter();
        let first = *iter.next()?;
        Some(iter.fold((first, first), |(min, max), c| {
            (
                Cell::new(min.x.min(c.x), min.y.min(c.y)),
                Cell::new(max.x.max(c.x), max.y.max(c.y)),
            )
        }))
    }

    /// Fill the inclusive rectangle `min..=max` with a random soup.
    /// Cells outside the rectangle are left alone.
    pub fn randomize_region(&mut self, min: Cell, max: Cell, density: f64) {
        use rand::Rng;
        let mut rng = rand::rng();
        let density = density.clamp(0.0, 1.0);

        for y in min.y..=max.y {
            for x in min.x..=max.x {
                let cell = Cell::new(x, y);
                if rng.random_bool(density) {
                    self.insert(cell);
                } else {
                    self.remove(cell);
                }
            }
        }
    }
}

impl FromIterator<Cell> for CellSet {
    fn from_iter<I: IntoIterator<Item = Cell>>(iter: I) -> Self {
        Self {
            cells: iter.into_iter().collect(),
        }
    }
}

impl Extend<Cell> for CellSet {
    fn extend<I: IntoIterator<Item = Cell>>(&mut self, iter: I) {
        self.cells.extend(iter);
    }
}
