use crate::config::{COLS, ROWS};
use crate::Random;
use std::fmt;
use std::ops::Index;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum Cell {
    #[default]
    Dead = 0,
    Alive = 1,
}

impl Cell {
    pub fn is_alive(self) -> bool {
        self == Cell::Alive
    }

    pub fn toggled(self) -> Self {
        match self {
            Cell::Dead => Cell::Alive,
            Cell::Alive => Cell::Dead,
        }
    }

    pub fn color_rgba(self) -> [u8; 4] {
        match self {
            Cell::Dead => [0x00, 0x00, 0x00, 0xff],
            Cell::Alive => [0xff, 0xff, 0xff, 0xff],
        }
    }
}

impl From<bool> for Cell {
    fn from(alive: bool) -> Self {
        if alive { Cell::Alive } else { Cell::Dead }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Loc {
    pub row: u32,
    pub col: u32,
}

impl Loc {
    pub fn new(row: u32, col: u32) -> Self {
        Self { row, col }
    }

    pub fn grid_index(&self, width: u32, height: u32) -> Option<usize> {
        if self.row < height && self.col < width {
            Some(self.row as usize * width as usize + self.col as usize)
        } else {
            None
        }
    }
}

/// One generation of cells. Never changes once built: edits and steps
/// produce new grids.
#[derive(Clone, PartialEq, Eq)]
pub struct Grid {
    width: u32,
    height: u32,
    cells: Vec<Cell>,
}

impl Grid {
    /// The all-dead grid at the configured size.
    pub fn create() -> Self {
        Self::new(COLS, ROWS)
    }

    pub fn new(width: u32, height: u32) -> Self {
        assert!(width > 0 && height > 0);
        Self {
            width,
            height,
            cells: vec![Cell::Dead; width as usize * height as usize],
        }
    }

    pub fn with_live_cells(width: u32, height: u32, live: &[Loc]) -> Self {
        let mut result = Self::new(width, height);
        for &loc in live {
            *result.cell_mut(loc) = Cell::Alive;
        }
        result
    }

    pub fn random(width: u32, height: u32, rand: &mut Random, density: f64) -> Self {
        let mut result = Self::new(width, height);
        for cell in result.cells.iter_mut() {
            *cell = rand.next_bool(density).into();
        }
        result
    }

    pub(crate) fn from_cells(width: u32, height: u32, cells: Vec<Cell>) -> Self {
        assert_eq!(cells.len(), width as usize * height as usize);
        Self {
            width,
            height,
            cells,
        }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn num_cells(&self) -> usize {
        self.cells.len()
    }

    pub fn same_size(&self, other: &Grid) -> bool {
        self.width == other.width && self.height == other.height
    }

    /// Cells in row-major order, matching `locs`.
    pub fn cells_iter(&self) -> impl DoubleEndedIterator<Item = &Cell> + Clone {
        self.cells.iter()
    }

    pub fn locs(&self) -> impl Iterator<Item = Loc> + use<> {
        let width = self.width;
        (0..self.height).flat_map(move |row| (0..width).map(move |col| Loc::new(row, col)))
    }

    pub fn population(&self) -> usize {
        self.cells.iter().filter(|cell| cell.is_alive()).count()
    }

    pub fn get(&self, row: u32, col: u32) -> Cell {
        self[Loc::new(row, col)]
    }

    /// Copy of this grid with the cell at `loc` flipped.
    pub fn toggle(&self, loc: Loc) -> Self {
        let mut result = self.clone();
        let cell = result.cell_mut(loc);
        *cell = cell.toggled();
        result
    }

    pub fn live_neighbors(&self, loc: Loc) -> u32 {
        Neighborhood::new(self, loc).num_live_neighbors()
    }

    fn cell(&self, loc: Loc) -> Option<&Cell> {
        loc.grid_index(self.width, self.height)
            .map(|index| &self.cells[index])
    }

    fn cell_mut(&mut self, loc: Loc) -> &mut Cell {
        let index = loc
            .grid_index(self.width, self.height)
            .unwrap_or_else(|| panic!("Cell indices {}, {} out of bounds", loc.row, loc.col));
        &mut self.cells[index]
    }
}

impl Index<Loc> for Grid {
    type Output = Cell;

    fn index(&self, loc: Loc) -> &Self::Output {
        self.cell(loc)
            .unwrap_or_else(|| panic!("Index indices {}, {} out of bounds", loc.row, loc.col))
    }
}

impl fmt::Debug for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Grid {}x{}", self.width, self.height)?;
        for row in self.cells.chunks(self.width as usize) {
            let line: String = row
                .iter()
                .map(|cell| if cell.is_alive() { '#' } else { '.' })
                .collect();
            writeln!(f, "{line}")?;
        }
        Ok(())
    }
}

/// The 3x3 block around a cell, wrapping at the grid edges.
pub struct Neighborhood<'a> {
    grid: &'a Grid,
    rows: [u32; 3],
    cols: [u32; 3],
}

impl<'a> Neighborhood<'a> {
    pub fn new(grid: &'a Grid, center: Loc) -> Self {
        let (row_above, row_below) = Self::adjacent_indexes(center.row, grid.height());
        let (col_left, col_right) = Self::adjacent_indexes(center.col, grid.width());
        Self {
            grid,
            rows: [row_above, center.row, row_below],
            cols: [col_left, center.col, col_right],
        }
    }

    pub fn cell(&self, row: u32, col: u32) -> Cell {
        self.grid[Loc::new(self.rows[row as usize], self.cols[col as usize])]
    }

    pub fn for_neighbor_cells<F>(&self, mut f: F)
    where
        F: FnMut(Cell),
    {
        for row in 0..3 {
            for col in 0..3 {
                if row != 1 || col != 1 {
                    f(self.cell(row, col));
                }
            }
        }
    }

    pub fn num_live_neighbors(&self) -> u32 {
        let mut result = 0;
        self.for_neighbor_cells(|neighbor| {
            if neighbor.is_alive() {
                result += 1;
            }
        });
        result
    }

    fn adjacent_indexes(cell_index: u32, max: u32) -> (u32, u32) {
        (
            Self::modulo(cell_index as i64 - 1, max),
            Self::modulo(cell_index as i64 + 1, max),
        )
    }

    fn modulo(val: i64, max: u32) -> u32 {
        val.rem_euclid(max as i64) as u32
    }
}
