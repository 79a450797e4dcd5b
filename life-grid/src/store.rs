use crate::grid::{Cell, Grid, Loc};
use crate::rule::{step, Rule};
use crate::Random;
use log::{debug, trace};
use std::sync::Arc;

/// Holds the authoritative grid. Readers get `Arc` snapshots, so a
/// replaced generation stays intact for whoever still holds it.
#[derive(Debug)]
pub struct GridStore {
    current: Arc<Grid>,
    generation: u64,
}

impl GridStore {
    pub fn new() -> Self {
        Self::with_grid(Grid::create())
    }

    pub fn with_grid(grid: Grid) -> Self {
        Self {
            current: Arc::new(grid),
            generation: 0,
        }
    }

    pub fn current(&self) -> &Grid {
        &self.current
    }

    pub fn snapshot(&self) -> Arc<Grid> {
        Arc::clone(&self.current)
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn get(&self, loc: Loc) -> Cell {
        self.current[loc]
    }

    /// Swaps in `grid` as the current generation. The grid's size can never
    /// change, so a grid of another size is a bug in the caller.
    pub fn replace(&mut self, grid: Grid) {
        assert!(
            self.current.same_size(&grid),
            "Replacement grid is {}x{}, expected {}x{}",
            grid.width(),
            grid.height(),
            self.current.width(),
            self.current.height()
        );
        self.current = Arc::new(grid);
    }

    pub fn toggle(&mut self, loc: Loc) {
        let toggled = self.current.toggle(loc);
        trace!("Toggled {},{} to {:?}", loc.row, loc.col, toggled[loc]);
        self.replace(toggled);
    }

    pub fn step<R>(&mut self, rule: &R)
    where
        R: Rule + ?Sized,
    {
        let next = step(&self.current, rule);
        self.replace(next);
        self.generation += 1;
        debug!(
            "Generation {}: population {}",
            self.generation,
            self.current.population()
        );
    }

    pub fn reset(&mut self) {
        self.current = Arc::new(Grid::new(self.current.width(), self.current.height()));
        self.generation = 0;
    }

    pub fn randomize(&mut self, rand: &mut Random, density: f64) {
        let grid = Grid::random(self.current.width(), self.current.height(), rand, density);
        self.current = Arc::new(grid);
        self.generation = 0;
    }
}

impl Default for GridStore {
    fn default() -> Self {
        Self::new()
    }
}
