use crate::grid::{Cell, Grid};
use std::fmt;

/// Decides a cell's next state from its current state and how many of its
/// eight neighbors are alive.
pub trait Rule {
    fn next_state(&self, cell: Cell, live_neighbors: u32) -> Cell;
}

/// B3/S23.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Conway;

impl Rule for Conway {
    fn next_state(&self, cell: Cell, live_neighbors: u32) -> Cell {
        match cell {
            Cell::Dead => (live_neighbors == 3).into(),
            Cell::Alive => (2..=3).contains(&live_neighbors).into(),
        }
    }
}

/// B2/S: nothing survives.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Seeds;

impl Rule for Seeds {
    fn next_state(&self, cell: Cell, live_neighbors: u32) -> Cell {
        match cell {
            Cell::Dead => (live_neighbors == 2).into(),
            Cell::Alive => Cell::Dead,
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum RuleKind {
    Conway,
    #[default]
    Seeds,
}

impl RuleKind {
    pub const ALL: [RuleKind; 2] = [RuleKind::Conway, RuleKind::Seeds];

    pub fn name(self) -> &'static str {
        match self {
            RuleKind::Conway => "Conway",
            RuleKind::Seeds => "Seeds",
        }
    }

    /// The rule after this one, wrapping around.
    pub fn next_rule(self) -> Self {
        match self {
            RuleKind::Conway => RuleKind::Seeds,
            RuleKind::Seeds => RuleKind::Conway,
        }
    }
}

impl Rule for RuleKind {
    fn next_state(&self, cell: Cell, live_neighbors: u32) -> Cell {
        match self {
            RuleKind::Conway => Conway.next_state(cell, live_neighbors),
            RuleKind::Seeds => Seeds.next_state(cell, live_neighbors),
        }
    }
}

impl fmt::Display for RuleKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Computes the generation after `grid`. Every neighbor count reads the
/// input grid, which is left as it was.
pub fn step<R>(grid: &Grid, rule: &R) -> Grid
where
    R: Rule + ?Sized,
{
    let cells = grid
        .locs()
        .map(|loc| rule.next_state(grid[loc], grid.live_neighbors(loc)))
        .collect();
    Grid::from_cells(grid.width(), grid.height(), cells)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{COLS, ROWS};
    use crate::grid::Loc;
    use crate::Random;

    fn block(top: u32, left: u32) -> Vec<Loc> {
        vec![
            Loc::new(top, left),
            Loc::new(top, left + 1),
            Loc::new(top + 1, left),
            Loc::new(top + 1, left + 1),
        ]
    }

    #[test]
    fn test_conway_table() {
        for n in 0..=8 {
            let born = Conway.next_state(Cell::Dead, n);
            assert_eq!(born, Cell::from(n == 3), "dead with {n} neighbors");
            let survives = Conway.next_state(Cell::Alive, n);
            assert_eq!(survives, Cell::from(n == 2 || n == 3), "alive with {n} neighbors");
        }
    }

    #[test]
    fn test_seeds_table() {
        for n in 0..=8 {
            let born = Seeds.next_state(Cell::Dead, n);
            assert_eq!(born, Cell::from(n == 2), "dead with {n} neighbors");
            assert_eq!(Seeds.next_state(Cell::Alive, n), Cell::Dead, "alive with {n} neighbors");
        }
    }

    #[test]
    fn test_rule_kind_dispatch() {
        for n in 0..=8 {
            for cell in [Cell::Dead, Cell::Alive] {
                assert_eq!(RuleKind::Conway.next_state(cell, n), Conway.next_state(cell, n));
                assert_eq!(RuleKind::Seeds.next_state(cell, n), Seeds.next_state(cell, n));
            }
        }
    }

    #[test]
    fn test_rule_kind_cycle() {
        assert_eq!(RuleKind::default(), RuleKind::Seeds);
        assert_eq!(RuleKind::Seeds.next_rule(), RuleKind::Conway);
        assert_eq!(RuleKind::Conway.next_rule(), RuleKind::Seeds);
        assert_eq!(RuleKind::ALL.map(|rule| rule.to_string()), ["Conway", "Seeds"]);
    }

    #[test]
    fn test_conway_lone_cell_dies_anywhere() {
        for loc in [Loc::new(0, 0), Loc::new(40, 17), Loc::new(ROWS - 1, COLS - 1)] {
            let grid = Grid::with_live_cells(COLS, ROWS, &[loc]);
            let next = step(&grid, &Conway);
            assert_eq!(next[loc], Cell::Dead, "lone cell at {loc:?}");
            assert_eq!(next.population(), 0);
        }
    }

    #[test]
    fn test_conway_block_is_stable() {
        let grid = Grid::with_live_cells(COLS, ROWS, &block(10, 10));
        assert_eq!(step(&grid, &Conway), grid);
    }

    #[test]
    fn test_conway_block_stable_across_corner() {
        // A block split over all four corners still has three neighbors per cell.
        let live = [
            Loc::new(0, 0),
            Loc::new(0, COLS - 1),
            Loc::new(ROWS - 1, 0),
            Loc::new(ROWS - 1, COLS - 1),
        ];
        let grid = Grid::with_live_cells(COLS, ROWS, &live);
        assert_eq!(step(&grid, &Conway), grid);
    }

    #[test]
    fn test_conway_blinker_oscillates() {
        let horizontal = Grid::with_live_cells(
            8,
            8,
            &[Loc::new(4, 3), Loc::new(4, 4), Loc::new(4, 5)],
        );
        let vertical = Grid::with_live_cells(
            8,
            8,
            &[Loc::new(3, 4), Loc::new(4, 4), Loc::new(5, 4)],
        );
        assert_eq!(step(&horizontal, &Conway), vertical);
        assert_eq!(step(&vertical, &Conway), horizontal);
    }

    #[test]
    fn test_conway_glider_wraps_around() {
        let glider = [
            Loc::new(0, 1),
            Loc::new(1, 2),
            Loc::new(2, 0),
            Loc::new(2, 1),
            Loc::new(2, 2),
        ];
        let size = 6;
        let start = Grid::with_live_cells(size, size, &glider);
        // A glider moves one cell diagonally every four generations, so after
        // 4 * size generations it is back where it started.
        let mut grid = start.clone();
        for _ in 0..4 * size {
            grid = step(&grid, &Conway);
            assert_eq!(grid.population(), 5);
        }
        assert_eq!(grid, start);
    }

    #[test]
    fn test_seeds_alive_always_dies() {
        // The middle cell has exactly two live neighbors.
        let live = [Loc::new(5, 4), Loc::new(5, 5), Loc::new(5, 6)];
        let grid = Grid::with_live_cells(12, 12, &live);
        assert_eq!(grid.live_neighbors(Loc::new(5, 5)), 2);
        let next = step(&grid, &Seeds);
        for loc in live {
            assert_eq!(next[loc], Cell::Dead, "{loc:?}");
        }
    }

    #[test]
    fn test_seeds_birth_needs_exactly_two() {
        let grid = Grid::with_live_cells(
            12,
            12,
            &[Loc::new(2, 2), Loc::new(2, 4), Loc::new(8, 8), Loc::new(8, 9), Loc::new(8, 10)],
        );
        assert_eq!(grid.live_neighbors(Loc::new(3, 3)), 2);
        assert_eq!(grid.live_neighbors(Loc::new(1, 1)), 1);
        assert_eq!(grid.live_neighbors(Loc::new(9, 9)), 3);

        let next = step(&grid, &Seeds);
        assert_eq!(next.get(3, 3), Cell::Alive);
        assert_eq!(next.get(1, 3), Cell::Alive);
        assert_eq!(next.get(1, 1), Cell::Dead);
        assert_eq!(next.get(9, 9), Cell::Dead);
        assert_eq!(next.get(7, 9), Cell::Dead);
    }

    #[test]
    fn test_step_is_deterministic_and_pure() {
        let mut rand = Random::from_seed(3);
        let grid = Grid::random(COLS, ROWS, &mut rand, 0.3);
        let before = grid.clone();
        for rule in RuleKind::ALL {
            let first = step(&grid, &rule);
            let second = step(&grid, &rule);
            assert_eq!(first, second, "{rule}");
            assert!(first.same_size(&grid));
        }
        assert_eq!(grid, before);
    }

    #[test]
    fn test_step_matches_per_cell_rule() {
        let mut rand = Random::from_seed(11);
        let grid = Grid::random(16, 9, &mut rand, 0.4);
        let next = step(&grid, &Conway);
        for loc in grid.locs() {
            let expected = Conway.next_state(grid[loc], grid.live_neighbors(loc));
            assert_eq!(next[loc], expected, "{loc:?}");
        }
    }

    #[test]
    fn test_step_with_dyn_rule() {
        let rules: [&dyn Rule; 2] = [&Conway, &Seeds];
        let grid = Grid::with_live_cells(8, 8, &block(2, 2));
        assert_eq!(step(&grid, rules[0]), grid);
        assert_eq!(step(&grid, rules[1]).get(2, 2), Cell::Dead);
    }
}
