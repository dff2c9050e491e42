//! Sleigh Run - gamestates for a small holiday arcade game
//!
//! Core modules:
//! - `sim`: Deterministic simulation (craft motion, drone sweeps, hit detection, levels)
//! - `gamestate`: Screen lifecycle contract and the screens themselves
//! - `renderer`: Draw list handed to the host for rendering
//! - `input`: Key events to held controls
//! - `audio`: Sound cues and gain state
//! - `settings`: Player preferences

pub mod audio;
pub mod gamestate;
pub mod input;
pub mod renderer;
pub mod settings;
pub mod sim;

pub use settings::Settings;

use glam::Vec2;

/// Game configuration constants
pub mod consts {
    /// Fixed simulation timestep. Craft motion constants are applied once per
    /// tick, so they are only correct at this rate.
    pub const SIM_DT: f32 = 1.0 / 60.0;

    /// Playfield aspect ratio (width / height). Normalized y distances are
    /// scaled by this to look isotropic on screen.
    pub const ASPECT: f32 = 16.0 / 9.0;

    /// Maximum number of drone slots
    pub const MAX_DRONES: usize = 16;

    /// Number of decorative stars
    pub const NUM_STARS: usize = 42;

    /// Craft spawn point
    pub const CRAFT_START_X: f32 = 0.055;
    pub const CRAFT_START_Y: f32 = 0.7;
    pub const CRAFT_START_ROT: f32 = -std::f32::consts::FRAC_PI_2;

    /// Craft speed limits (signed, along heading)
    pub const CRAFT_MIN_SPEED: f32 = -0.5;
    pub const CRAFT_MAX_SPEED: f32 = 1.0;

    /// Seconds the game freezes after the craft is spotted
    pub const LOST_PAUSE_SECS: f32 = 2.4;

    /// Pause time at or below this counts as expired. Summing `SIM_DT` in f32
    /// leaves a few microseconds behind after a full freeze.
    pub const PAUSE_EPSILON: f32 = 1e-4;

    /// Exit region: past this x and above this y
    pub const EXIT_MIN_X: f32 = 0.99;
    pub const EXIT_MAX_Y: f32 = 0.2;
}

/// Wrap an angle to [0, 2π)
#[inline]
pub fn wrap_angle(mut angle: f32) -> f32 {
    use std::f32::consts::TAU;
    while angle < 0.0 {
        angle += TAU;
    }
    while angle >= TAU {
        angle -= TAU;
    }
    angle
}

/// Unit direction for a heading in normalized playfield space.
///
/// The y component is stretched by the aspect ratio so that the direction
/// looks the same length on screen regardless of heading.
#[inline]
pub fn heading_vector(theta: f32) -> Vec2 {
    Vec2::new(theta.cos(), theta.sin() * consts::ASPECT)
}
