//! Fixed startup configuration. Nothing here changes at runtime.

use std::time::Duration;

/// Canvas width in pixels.
pub const WIDTH: u32 = 800;
/// Canvas height in pixels.
pub const HEIGHT: u32 = 800;
/// Side of one drawn cell, in pixels.
pub const CELL_SIZE: u32 = 10;

pub const ROWS: u32 = HEIGHT / CELL_SIZE;
pub const COLS: u32 = WIDTH / CELL_SIZE;

/// Delay between generations while playing.
pub const TICK_INTERVAL: Duration = Duration::from_millis(100);

/// Chance that a cell starts alive after a random fill.
pub const RANDOM_FILL_DENSITY: f64 = 0.3;
