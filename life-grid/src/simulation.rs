use crate::config::{RANDOM_FILL_DENSITY, TICK_INTERVAL};
use crate::grid::{Grid, Loc};
use crate::playback::{PlayHandle, Playback};
use crate::rule::RuleKind;
use crate::store::GridStore;
use crate::Random;
use log::info;
use std::sync::Arc;
use std::time::Instant;

/// The grid plus everything the controls act on: the selected rule and
/// the play state. All calls come from one thread, one at a time.
#[derive(Debug)]
pub struct Simulation {
    store: GridStore,
    rule: RuleKind,
    playback: Playback,
    play: Option<PlayHandle>,
    rand: Random,
}

impl Simulation {
    pub fn new(rand: Random) -> Self {
        Self::with_store(GridStore::new(), rand)
    }

    pub fn with_store(store: GridStore, rand: Random) -> Self {
        Self {
            store,
            rule: RuleKind::default(),
            playback: Playback::new(TICK_INTERVAL),
            play: None,
            rand,
        }
    }

    pub fn grid(&self) -> &Grid {
        self.store.current()
    }

    pub fn snapshot(&self) -> Arc<Grid> {
        self.store.snapshot()
    }

    pub fn generation(&self) -> u64 {
        self.store.generation()
    }

    pub fn rule(&self) -> RuleKind {
        self.rule
    }

    pub fn set_rule(&mut self, rule: RuleKind) {
        if rule != self.rule {
            info!("Rule: {rule}");
            self.rule = rule;
        }
    }

    pub fn cycle_rule(&mut self) {
        self.set_rule(self.rule.next_rule());
    }

    pub fn is_playing(&self) -> bool {
        self.playback.is_playing()
    }

    pub fn next_tick(&self) -> Option<Instant> {
        self.playback.next_tick()
    }

    pub fn step_once(&mut self) {
        self.store.step(&self.rule);
    }

    pub fn toggle(&mut self, loc: Loc) {
        self.store.toggle(loc);
    }

    pub fn play(&mut self, now: Instant) {
        info!("Play ({} every {:?})", self.rule, self.playback.interval());
        self.play = Some(self.playback.play(now));
    }

    pub fn stop(&mut self) {
        if let Some(handle) = self.play.take() {
            handle.cancel();
            info!("Stop at generation {}", self.generation());
        }
    }

    pub fn toggle_play(&mut self, now: Instant) {
        if self.is_playing() {
            self.stop();
        } else {
            self.play(now);
        }
    }

    pub fn reset(&mut self) {
        self.store.reset();
        info!("Reset");
    }

    pub fn randomize(&mut self) {
        self.store.randomize(&mut self.rand, RANDOM_FILL_DENSITY);
        info!(
            "Random fill: population {}",
            self.store.current().population()
        );
    }

    /// Steps if a tick is due. Returns whether the grid changed.
    pub fn on_tick(&mut self, now: Instant) -> bool {
        if self.playback.poll(now) {
            self.step_once();
            true
        } else {
            false
        }
    }
}
