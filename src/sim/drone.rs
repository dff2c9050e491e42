//! Sweeping drones and their searchlight cones
//!
//! A drone hovers at an anchor, bobbing vertically, and swings a triangular
//! cone back and forth. The sweep direction is carried by the sign of the
//! `left` countdown: positive sweeps the angle down, negative sweeps it up.
//! When the countdown runs out a new duration and direction are drawn.

use glam::Vec2;
use rand::Rng;
use serde::{Deserialize, Serialize};

use super::craft::Craft;
use super::geometry::Triangle;
use crate::heading_vector;

/// One drone slot
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Drone {
    /// Inactive slots are skipped by update, draw and collision
    pub enabled: bool,
    /// Anchor position (normalized)
    pub pos: Vec2,
    /// Phase accumulator, seconds since enabled (plus random start)
    pub counter: f32,
    /// Cone center direction (radians, unwrapped)
    pub angle: f32,
    /// Signed sweep countdown (seconds)
    pub left: f32,
    /// Sweep angular speed (radians/sec)
    pub rotspeed: f32,
    /// Cone half-angle (radians)
    pub span: f32,
    /// Cone reach (normalized units)
    pub length: f32,
    /// Vertical bob amplitude
    pub deviation: f32,
    /// Vertical bob frequency
    pub speed: f32,
    /// Sweep duration window (seconds)
    pub timemin: f32,
    pub timemax: f32,
}

impl Drone {
    /// Current vertical bob offset
    #[inline]
    pub fn bob(&self) -> f32 {
        (self.counter * self.speed).cos() * self.deviation
    }

    /// Where the cone starts this instant
    #[inline]
    pub fn eye(&self) -> Vec2 {
        Vec2::new(self.pos.x, self.pos.y + self.bob())
    }

    /// The searchlight cone at this instant
    pub fn cone(&self) -> Triangle {
        let eye = self.eye();
        Triangle::new(
            eye,
            eye + heading_vector(self.angle - self.span) * self.length,
            eye + heading_vector(self.angle + self.span) * self.length,
        )
    }

    /// Draw a new sweep duration in [timemin, timemax] with a random direction
    pub fn reseed_timer<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        let duration = rng.random_range(self.timemin..=self.timemax);
        self.left = if rng.random_bool(0.5) {
            duration
        } else {
            -duration
        };
    }

    /// Pick a fresh bob phase and sweep angle
    pub fn randomize_phase<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        self.counter = rng.random_range(0.0..std::f32::consts::TAU);
        self.angle = rng.random_range(0.0..std::f32::consts::TAU);
    }

    /// Advance the bob phase and the sweep by `dt` seconds.
    ///
    /// Returns true when the sweep timer ran out and was reseeded.
    pub fn update<R: Rng + ?Sized>(&mut self, dt: f32, rng: &mut R) -> bool {
        self.counter += dt;

        if self.left > 0.0 {
            self.left -= dt;
            self.angle -= dt * self.rotspeed;
            if self.left <= 0.0 {
                self.reseed_timer(rng);
                return true;
            }
        } else if self.left < 0.0 {
            self.left += dt;
            self.angle += dt * self.rotspeed;
            if self.left >= 0.0 {
                self.reseed_timer(rng);
                return true;
            }
        }
        false
    }

    /// Whether any part of the craft is inside this drone's cone
    pub fn spots(&self, craft: &Craft) -> bool {
        self.cone().contains_any(&craft.body_points())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use rand::SeedableRng;
    use rand_pcg::Pcg32;
    use std::f32::consts::PI;

    fn test_drone() -> Drone {
        Drone {
            enabled: true,
            pos: Vec2::new(0.5, 0.5),
            counter: 0.0,
            angle: PI / 2.0,
            left: 1.0,
            rotspeed: 0.5,
            span: 0.3,
            length: 0.2,
            deviation: 0.0,
            speed: 1.0,
            timemin: 1.0,
            timemax: 2.0,
        }
    }

    #[test]
    fn test_positive_timer_sweeps_down() {
        let mut rng = Pcg32::seed_from_u64(1);
        let mut drone = test_drone();
        let reseeded = drone.update(0.1, &mut rng);
        assert!(!reseeded);
        assert!((drone.left - 0.9).abs() < 1e-6);
        assert!((drone.angle - (PI / 2.0 - 0.05)).abs() < 1e-6);
        assert!((drone.counter - 0.1).abs() < 1e-6);
    }

    #[test]
    fn test_negative_timer_sweeps_up() {
        let mut rng = Pcg32::seed_from_u64(1);
        let mut drone = Drone {
            left: -1.0,
            ..test_drone()
        };
        drone.update(0.1, &mut rng);
        assert!((drone.left + 0.9).abs() < 1e-6);
        assert!((drone.angle - (PI / 2.0 + 0.05)).abs() < 1e-6);
    }

    #[test]
    fn test_zero_timer_holds_still() {
        let mut rng = Pcg32::seed_from_u64(1);
        let mut drone = Drone {
            left: 0.0,
            ..test_drone()
        };
        assert!(!drone.update(0.1, &mut rng));
        assert_eq!(drone.angle, PI / 2.0);
        assert_eq!(drone.left, 0.0);
    }

    #[test]
    fn test_cone_geometry() {
        let drone = Drone {
            angle: 0.0,
            span: 0.0,
            ..test_drone()
        };
        let cone = drone.cone();
        assert_eq!(cone.a, Vec2::new(0.5, 0.5));
        assert!((cone.b.x - 0.7).abs() < 1e-6);
        assert!((cone.b.y - 0.5).abs() < 1e-6);
    }

    #[test]
    fn test_bob_moves_eye() {
        let drone = Drone {
            deviation: 0.1,
            counter: 0.0,
            ..test_drone()
        };
        // cos(0) = 1, so the eye sits one deviation below the anchor
        assert!((drone.eye().y - 0.6).abs() < 1e-6);
        let drone = Drone {
            counter: PI,
            ..drone
        };
        assert!((drone.eye().y - 0.4).abs() < 1e-6);
    }

    #[test]
    fn test_spots_craft_at_centroid() {
        let drone = test_drone();
        let craft = Craft {
            pos: drone.cone().centroid(),
            rot: 0.0,
            speed: 0.0,
        };
        assert!(drone.spots(&craft));
    }

    #[test]
    fn test_misses_distant_craft() {
        let drone = test_drone();
        let craft = Craft {
            pos: Vec2::new(0.05, 0.05),
            rot: PI,
            speed: 0.0,
        };
        assert!(!drone.spots(&craft));
    }

    #[test]
    fn test_nose_alone_can_be_spotted() {
        // Cone pointing straight down from (0.5, 0.5); craft tail left of it,
        // nose poking in.
        let drone = test_drone();
        let tip = drone.cone().centroid();
        let craft = Craft {
            pos: Vec2::new(tip.x - 0.14, tip.y),
            rot: 0.0,
            speed: 0.0,
        };
        assert!(!drone.cone().contains(craft.pos));
        assert!(drone.spots(&craft));
    }

    proptest! {
        #[test]
        fn prop_reseed_within_window(
            seed in any::<u64>(),
            timemin in 0.1f32..5.0,
            extra in 0.0f32..4.0,
            left in prop_oneof![0.001f32..0.5, -0.5f32..-0.001],
        ) {
            let mut rng = Pcg32::seed_from_u64(seed);
            let timemax = timemin + extra;
            let mut drone = Drone { left, timemin, timemax, ..test_drone() };
            let reseeded = drone.update(0.5, &mut rng);
            prop_assert!(reseeded);
            prop_assert!(drone.left.abs() >= timemin && drone.left.abs() <= timemax);
        }

        #[test]
        fn prop_sweep_changes_angle_by_rotspeed(
            left in 0.5f32..5.0,
            rotspeed in 0.0f32..2.0,
            dt in 0.001f32..0.4,
        ) {
            let mut rng = Pcg32::seed_from_u64(0);
            let mut drone = Drone { left, rotspeed, ..test_drone() };
            let before = drone.angle;
            drone.update(dt, &mut rng);
            prop_assert!((before - drone.angle - dt * rotspeed).abs() < 1e-4);
        }
    }
}
