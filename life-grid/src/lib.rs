#![deny(clippy::all)]
#![forbid(unsafe_code)]

pub mod config;
mod grid;
mod playback;
mod rule;
mod simulation;
mod store;

pub use grid::{Cell, Grid, Loc, Neighborhood};
pub use playback::{PlayHandle, Playback};
pub use rule::{step, Conway, Rule, RuleKind, Seeds};
pub use simulation::Simulation;
pub use store::GridStore;

use rand::prelude::*;
use rand::rngs::SmallRng;
use rand::SeedableRng;

#[derive(Debug)]
pub struct Random {
    rng: SmallRng,
}

impl Random {
    pub fn new() -> Self {
        Self {
            rng: SmallRng::from_rng(&mut rand::rng()),
        }
    }

    /// Reproducible sequence, for tests and demos.
    pub fn from_seed(seed: u64) -> Self {
        Self {
            rng: SmallRng::seed_from_u64(seed),
        }
    }

    pub fn next_bool(&mut self, p: f64) -> bool {
        self.rng.random_bool(p)
    }
}

impl Default for Random {
    fn default() -> Self {
        Self::new()
    }
}
