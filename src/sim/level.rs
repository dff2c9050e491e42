//! Level layouts
//!
//! The first levels are hand-authored tables; everything after is rolled
//! from the run's RNG. Retrying a level keeps its layout and only reshuffles
//! where each drone is in its bob and sweep.

use glam::Vec2;
use rand::Rng;
use serde::{Deserialize, Serialize};

use super::drone::Drone;
use crate::consts::MAX_DRONES;

/// Static description of one drone in a level layout
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DroneConfig {
    pub x: f32,
    pub y: f32,
    pub timemin: f32,
    pub timemax: f32,
    pub span: f32,
    pub length: f32,
    pub rotspeed: f32,
    pub deviation: f32,
    pub speed: f32,
}

impl DroneConfig {
    /// An enabled drone with this layout. Phase, angle and timer are left at
    /// zero for the caller to randomize.
    pub fn spawn(&self) -> Drone {
        Drone {
            enabled: true,
            pos: Vec2::new(self.x, self.y),
            counter: 0.0,
            angle: 0.0,
            left: 0.0,
            rotspeed: self.rotspeed,
            span: self.span,
            length: self.length,
            deviation: self.deviation,
            speed: self.speed,
            timemin: self.timemin,
            timemax: self.timemax,
        }
    }
}

#[allow(clippy::too_many_arguments)]
const fn drone(
    x: f32,
    y: f32,
    timemin: f32,
    timemax: f32,
    span: f32,
    length: f32,
    rotspeed: f32,
    deviation: f32,
    speed: f32,
) -> DroneConfig {
    DroneConfig {
        x,
        y,
        timemin,
        timemax,
        span,
        length,
        rotspeed,
        deviation,
        speed,
    }
}

/// Hand-authored layouts, indexed by level
pub const LEVELS: [&[DroneConfig]; 4] = [
    // A single drone low over the houses; the sky route is safe
    &[drone(0.5, 0.85, 2.0, 4.0, 0.2, 0.2, 0.5, 0.03, 1.0)],
    &[
        drone(0.35, 0.45, 2.0, 4.0, 0.25, 0.25, 0.6, 0.04, 1.2),
        drone(0.7, 0.6, 1.5, 3.0, 0.2, 0.3, 0.5, 0.05, 0.8),
    ],
    &[
        drone(0.3, 0.3, 1.5, 3.5, 0.22, 0.25, 0.7, 0.03, 1.5),
        drone(0.55, 0.7, 2.0, 3.0, 0.3, 0.28, 0.5, 0.06, 1.0),
        drone(0.8, 0.35, 1.0, 2.5, 0.18, 0.3, 0.8, 0.04, 0.9),
    ],
    &[
        drone(0.3, 0.5, 1.5, 3.0, 0.25, 0.3, 0.6, 0.05, 1.1),
        drone(0.5, 0.25, 1.0, 2.0, 0.2, 0.25, 0.9, 0.03, 1.4),
        drone(0.65, 0.75, 2.0, 4.0, 0.3, 0.33, 0.5, 0.06, 0.7),
        drone(0.85, 0.45, 1.0, 2.5, 0.22, 0.3, 0.7, 0.04, 1.2),
    ],
];

/// Sweep speed for generated drones
pub const GENERATED_ROTSPEED: f32 = 0.6;

/// Authored layout for a level, if there is one
pub fn authored(level: u32) -> Option<&'static [DroneConfig]> {
    LEVELS.get(level as usize).copied()
}

/// Roll a layout for a level past the authored ones
pub fn generate<R: Rng + ?Sized>(level: u32, rng: &mut R) -> Vec<DroneConfig> {
    let count = (level as usize).min(MAX_DRONES);
    (0..count)
        .map(|_| {
            let timemin = rng.random_range(1.0..=5.0);
            drone(
                rng.random_range(0.4..=0.8),
                rng.random_range(0.1..=0.9),
                timemin,
                timemin + rng.random_range(0.0..=4.0),
                rng.random_range(0.1..=0.33),
                rng.random_range(0.1..=0.33),
                GENERATED_ROTSPEED,
                rng.random_range(0.0..=0.08),
                rng.random_range(0.5..=2.0),
            )
        })
        .collect()
}

/// Set up the drone pool for `level`.
///
/// On a first visit the layout is replaced (authored table or generated) and
/// every drone gets a fresh phase, angle and sweep timer. On a retry only
/// phase and angle are resampled.
pub fn configure<R: Rng + ?Sized>(
    drones: &mut [Drone; MAX_DRONES],
    level: u32,
    retry: bool,
    rng: &mut R,
) {
    if !retry {
        let generated;
        let layout = match authored(level) {
            Some(layout) => layout,
            None => {
                generated = generate(level, rng);
                &generated[..]
            }
        };

        for drone in drones.iter_mut() {
            *drone = Drone::default();
        }
        for (slot, config) in drones.iter_mut().zip(layout) {
            *slot = config.spawn();
            slot.reseed_timer(rng);
        }
    }

    for drone in drones.iter_mut().filter(|d| d.enabled) {
        drone.randomize_phase(rng);
    }
}
