use life_grid::config::CELL_SIZE;
use life_grid::{Grid, Loc};

const OUTLINE_COLOR: [u8; 4] = [0x80, 0x80, 0x80, 0xff];

/// Maps between canvas pixels and grid cells. Rows run down the canvas,
/// columns across.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CanvasLayout {
    rows: u32,
    cols: u32,
    cell_size: u32,
}

impl CanvasLayout {
    pub fn new(grid: &Grid) -> Self {
        Self::with_cell_size(grid, CELL_SIZE)
    }

    pub fn with_cell_size(grid: &Grid, cell_size: u32) -> Self {
        assert!(cell_size > 0);
        Self {
            rows: grid.height(),
            cols: grid.width(),
            cell_size,
        }
    }

    pub fn width(&self) -> u32 {
        self.cols * self.cell_size
    }

    pub fn height(&self) -> u32 {
        self.rows * self.cell_size
    }

    /// The cell under canvas pixel (x, y), or None off the canvas.
    pub fn cell_at(&self, x: usize, y: usize) -> Option<Loc> {
        let row = y / self.cell_size as usize;
        let col = x / self.cell_size as usize;
        if row < self.rows as usize && col < self.cols as usize {
            Some(Loc::new(row as u32, col as u32))
        } else {
            None
        }
    }

    /// Paints every cell as a filled square with a one-pixel outline on its
    /// top and left edges, so neighboring squares share a grid line.
    pub fn draw(&self, grid: &Grid, frame: &mut [u8]) {
        debug_assert_eq!(grid.width(), self.cols);
        debug_assert_eq!(grid.height(), self.rows);
        debug_assert_eq!(frame.len(), 4 * (self.width() * self.height()) as usize);

        for (i, pixel) in frame.chunks_exact_mut(4).enumerate() {
            let x = i % self.width() as usize;
            let y = i / self.width() as usize;
            let on_outline = self.cell_size > 2
                && (x % self.cell_size as usize == 0 || y % self.cell_size as usize == 0);
            let color = if on_outline {
                OUTLINE_COLOR
            } else {
                match self.cell_at(x, y) {
                    Some(loc) => grid[loc].color_rgba(),
                    None => OUTLINE_COLOR,
                }
            };
            pixel.copy_from_slice(&color);
        }
    }
}
