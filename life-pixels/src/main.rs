#![deny(clippy::all)]
#![forbid(unsafe_code)]

use life_grid::{Random, Simulation};
use life_pixels_support::{animate, log_error, AppError};

fn main() -> Result<(), AppError> {
    env_logger::init();
    animate(Simulation::new(Random::new())).inspect_err(|err| log_error("animate", err))
}
