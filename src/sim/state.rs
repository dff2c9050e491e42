//! Game state and core simulation types
//!
//! One `GameState` lives for as long as the gameplay screen is loaded.

use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::craft::Craft;
use super::drone::Drone;
use super::level;
use super::stars::Starfield;
use crate::consts::*;

/// Things that happened during a tick, for audio and presentation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameEvent {
    /// A drone spotted the craft; the game freezes for [`LOST_PAUSE_SECS`]
    Spotted { drone: usize },
    /// The craft reached the exit of `level`
    LevelCleared { level: u32 },
    /// A level began, either fresh or as a retry after being spotted
    LevelStarted { level: u32, retry: bool },
}

/// Complete gameplay state (deterministic for a given seed and input stream)
#[derive(Debug, Clone)]
pub struct GameState {
    /// Run seed for reproducibility
    pub seed: u64,
    /// Run RNG; drives layouts, sweeps and the starfield
    pub rng: Pcg32,
    /// Current level index (0-based)
    pub level: u32,
    /// Whether the current level was restarted after being spotted
    pub retry: bool,
    /// Seconds left in the post-spotted freeze (0 = running)
    pub pause: f32,
    /// Simulation tick counter
    pub time_ticks: u64,
    /// Player craft
    pub craft: Craft,
    /// Drone pool, only `enabled` slots are live
    pub drones: [Drone; MAX_DRONES],
    /// Background decoration
    pub stars: Starfield,
    /// Events since the last drain
    pub events: Vec<GameEvent>,
}

impl GameState {
    /// Create a new run with the given seed, starting on `start_level`
    pub fn new(seed: u64, start_level: u32) -> Self {
        let mut rng = Pcg32::seed_from_u64(seed);
        let stars = Starfield::scatter(&mut rng);
        let mut state = Self {
            seed,
            rng,
            level: start_level,
            retry: false,
            pause: 0.0,
            time_ticks: 0,
            craft: Craft::default(),
            drones: std::array::from_fn(|_| Drone::default()),
            stars,
            events: Vec::new(),
        };
        state.start_level(false);
        state
    }

    /// (Re)start the current level.
    ///
    /// A retry keeps the drone layout and only resamples phase and angle.
    pub fn start_level(&mut self, retry: bool) {
        self.retry = retry;
        self.pause = 0.0;
        self.craft.reset();
        level::configure(&mut self.drones, self.level, retry, &mut self.rng);

        log::info!(
            "Level {} {} with {} drones",
            self.level,
            if retry { "retry" } else { "start" },
            self.active_drones().count()
        );
        self.events.push(GameEvent::LevelStarted {
            level: self.level,
            retry,
        });
    }

    /// Enabled drones with their slot index
    pub fn active_drones(&self) -> impl Iterator<Item = (usize, &Drone)> {
        self.drones.iter().enumerate().filter(|(_, d)| d.enabled)
    }

    /// Frozen after being spotted?
    pub fn is_paused(&self) -> bool {
        self.pause > PAUSE_EPSILON
    }

    /// Take the events produced since the last call
    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }
}
