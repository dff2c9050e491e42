//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Fixed timestep only
//! - Seeded RNG only
//! - Stable iteration order (by drone slot)
//! - No rendering, audio or host dependencies

pub mod craft;
pub mod drone;
pub mod geometry;
pub mod level;
pub mod stars;
pub mod state;
pub mod tick;

pub use craft::{BODY_SAMPLES, Controls, Craft};
pub use drone::Drone;
pub use geometry::{Triangle, is_inside_triangle, triangle_area};
pub use level::{DroneConfig, LEVELS};
pub use stars::{Star, Starfield};
pub use state::{GameEvent, GameState};
pub use tick::tick;
