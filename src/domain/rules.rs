use super::{Cell, CellSet, CellState};

/// Count live cells in the Moore neighbourhood of `cell`.
/// Always in `0..=8`; `cell` itself is never counted.
pub fn count_live_neighbors(cells: &CellSet, cell: Cell) -> u8 {
    cell.neighbors()
        .filter(|&neighbor| cells.contains(neighbor))
        .count() as u8
}

/// State of `cell` in the next generation, read against `cells`
pub fn next_state(cells: &CellSet, cell: Cell) -> CellState {
    let current = CellState::from_alive(cells.contains(cell));
    current.evolve(count_live_neighbors(cells, cell))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn set(cells: &[(i64, i64)]) -> CellSet {
        cells.iter().map(|&c| Cell::from(c)).collect()
    }

    #[test]
    fn test_isolated_cell_has_no_neighbors() {
        let cells = set(&[(0, 0)]);
        assert_eq!(count_live_neighbors(&cells, Cell::new(0, 0)), 0);
    }

    #[test]
    fn test_full_neighborhood() {
        let cells: CellSet = (-1..=1)
            .flat_map(|y| (-1..=1).map(move |x| Cell::new(x, y)))
            .collect();
        assert_eq!(count_live_neighbors(&cells, Cell::new(0, 0)), 8);
        assert_eq!(count_live_neighbors(&cells, Cell::new(2, 0)), 3);
        assert_eq!(count_live_neighbors(&cells, Cell::new(3, 0)), 0);
    }

    #[test]
    fn test_counting_does_not_mutate() {
        let cells = set(&[(0, 0), (1, 0)]);
        let before = cells.clone();
        count_live_neighbors(&cells, Cell::new(0, 1));
        assert_eq!(cells, before);
    }

    #[test]
    fn test_next_state_for_blinker_center_and_tips() {
        let cells = set(&[(0, 0), (1, 0), (2, 0)]);
        assert_eq!(next_state(&cells, Cell::new(1, 0)), CellState::Alive);
        assert_eq!(next_state(&cells, Cell::new(0, 0)), CellState::Dead);
        assert_eq!(next_state(&cells, Cell::new(1, -1)), CellState::Alive);
        assert_eq!(next_state(&cells, Cell::new(0, 1)), CellState::Dead);
    }
}
