//! Player craft motion model
//!
//! Motion constants are per tick, not per second. At the fixed 60 Hz
//! [`SIM_DT`](crate::consts::SIM_DT) this matches the intended feel; running
//! the model at another rate changes handling.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::{heading_vector, wrap_angle};

/// Speed gained per tick while accelerating
pub const ACCELERATION: f32 = 0.03;
/// Speed lost per tick while braking and still moving forward
pub const BRAKE_FORWARD: f32 = 0.02;
/// Speed lost per tick while braking from rest or reversing
pub const BRAKE_REVERSE: f32 = 0.01;
/// Per-tick speed damping
pub const DAMPING: f32 = 0.975;
/// Speed to playfield units per tick
pub const POSITION_SCALE: f32 = 0.005;
/// Heading change per tick while turning
pub const TURN_RATE: f32 = 0.025;

/// Held controls for a single tick
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Controls {
    pub accelerate: bool,
    pub brake: bool,
    pub left: bool,
    pub right: bool,
}

pub const BODY_SAMPLE_COUNT: usize = 7;

/// Craft body sample points as (along heading, across heading) offsets.
///
/// Tail to nose, with the mid-body pairs widened to either side. Any of them
/// entering a drone cone counts as being spotted.
pub const BODY_SAMPLES: [(f32, f32); BODY_SAMPLE_COUNT] = [
    (0.0, 0.0),
    (0.14, 0.0),
    (0.07, 0.0),
    (0.035, 0.02),
    (0.035, -0.02),
    (0.105, 0.02),
    (0.105, -0.02),
];

/// The player-controlled sleigh
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Craft {
    /// Normalized playfield position
    pub pos: Vec2,
    /// Heading (radians)
    pub rot: f32,
    /// Signed speed along heading
    pub speed: f32,
}

impl Default for Craft {
    fn default() -> Self {
        Self {
            pos: Vec2::new(CRAFT_START_X, CRAFT_START_Y),
            rot: CRAFT_START_ROT,
            speed: 0.0,
        }
    }
}

impl Craft {
    /// Put the craft back on the spawn point
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Advance one tick of motion
    pub fn integrate(&mut self, controls: &Controls) {
        let mut dspeed = 0.0;
        if controls.accelerate {
            dspeed += ACCELERATION;
        }
        if controls.brake {
            dspeed -= if self.speed > 0.0 {
                BRAKE_FORWARD
            } else {
                BRAKE_REVERSE
            };
        }
        self.speed = (self.speed + dspeed).clamp(CRAFT_MIN_SPEED, CRAFT_MAX_SPEED);
        self.speed *= DAMPING;

        self.pos += Vec2::new(self.rot.cos(), self.rot.sin()) * self.speed * POSITION_SCALE;

        let mut dangle = 0.0;
        if controls.left {
            dangle -= TURN_RATE;
        }
        if controls.right {
            dangle += TURN_RATE;
        }
        self.rot = wrap_angle(self.rot + dangle);

        self.pos = self.pos.clamp(Vec2::ZERO, Vec2::ONE);
    }

    /// World positions of the body samples used for hit detection
    pub fn body_points(&self) -> [Vec2; BODY_SAMPLE_COUNT] {
        let forward = heading_vector(self.rot);
        let side = heading_vector(self.rot + std::f32::consts::FRAC_PI_2);
        BODY_SAMPLES.map(|(along, across)| self.pos + forward * along + side * across)
    }

    /// Whether the craft is in the level exit region
    pub fn at_exit(&self) -> bool {
        self.pos.x > EXIT_MIN_X && self.pos.y < EXIT_MAX_Y
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use std::f32::consts::TAU;

    #[test]
    fn test_reset() {
        let mut craft = Craft {
            pos: Vec2::new(0.5, 0.5),
            rot: 1.0,
            speed: 0.7,
        };
        craft.reset();
        assert_eq!(craft.pos, Vec2::new(0.055, 0.7));
        assert_eq!(craft.rot, -std::f32::consts::FRAC_PI_2);
        assert_eq!(craft.speed, 0.0);
    }

    #[test]
    fn test_accelerate_single_tick() {
        let mut craft = Craft {
            pos: Vec2::new(0.5, 0.5),
            rot: 0.0,
            speed: 0.0,
        };
        craft.integrate(&Controls {
            accelerate: true,
            ..Default::default()
        });
        assert!((craft.speed - 0.03 * 0.975).abs() < 1e-6);
        assert!((craft.pos.x - (0.5 + 0.03 * 0.975 * 0.005)).abs() < 1e-6);
        assert!((craft.pos.y - 0.5).abs() < 1e-6);
    }

    #[test]
    fn test_brake_from_rest_reverses() {
        let mut craft = Craft::default();
        craft.integrate(&Controls {
            brake: true,
            ..Default::default()
        });
        assert!((craft.speed - (-0.01 * 0.975)).abs() < 1e-6);
    }

    #[test]
    fn test_damping_without_input() {
        let mut craft = Craft {
            speed: 0.8,
            ..Default::default()
        };
        craft.integrate(&Controls::default());
        assert!((craft.speed - 0.78).abs() < 1e-6);
    }

    #[test]
    fn test_top_speed_settles_below_limit() {
        let mut craft = Craft::default();
        let held = Controls {
            accelerate: true,
            ..Default::default()
        };
        for _ in 0..500 {
            craft.integrate(&held);
        }
        // Clamped to 1.0, then damped
        assert!((craft.speed - 0.975).abs() < 1e-5);
    }

    #[test]
    fn test_turn_wraps_from_spawn_heading() {
        let mut craft = Craft::default();
        craft.integrate(&Controls {
            left: true,
            ..Default::default()
        });
        let expected = TAU - std::f32::consts::FRAC_PI_2 - TURN_RATE;
        assert!((craft.rot - expected).abs() < 1e-5);
    }

    #[test]
    fn test_body_points_follow_heading() {
        let craft = Craft {
            pos: Vec2::new(0.3, 0.5),
            rot: 0.0,
            speed: 0.0,
        };
        let points = craft.body_points();
        assert_eq!(points[0], craft.pos);
        assert!((points[1].x - 0.44).abs() < 1e-6);
        assert!((points[1].y - 0.5).abs() < 1e-6);
        // Lateral offsets are perpendicular (vertical at heading 0)
        assert!((points[3].x - 0.335).abs() < 1e-5);
        assert!((points[3].y - (0.5 + 0.02 * crate::consts::ASPECT)).abs() < 1e-5);
        assert!((points[4].y - (0.5 - 0.02 * crate::consts::ASPECT)).abs() < 1e-5);
    }

    #[test]
    fn test_at_exit() {
        let mut craft = Craft::default();
        craft.pos = Vec2::new(0.995, 0.1);
        assert!(craft.at_exit());
        craft.pos = Vec2::new(0.995, 0.3);
        assert!(!craft.at_exit());
        craft.pos = Vec2::new(0.98, 0.1);
        assert!(!craft.at_exit());
    }

    fn controls() -> impl Strategy<Value = Controls> {
        (any::<bool>(), any::<bool>(), any::<bool>(), any::<bool>()).prop_map(
            |(accelerate, brake, left, right)| Controls {
                accelerate,
                brake,
                left,
                right,
            },
        )
    }

    proptest! {
        #[test]
        fn prop_motion_stays_in_bounds(
            x in 0.0f32..=1.0,
            y in 0.0f32..=1.0,
            rot in 0.0f32..TAU,
            inputs in prop::collection::vec(controls(), 1..400),
        ) {
            let mut craft = Craft { pos: Vec2::new(x, y), rot, speed: 0.0 };
            for input in &inputs {
                craft.integrate(input);
                prop_assert!(craft.speed >= CRAFT_MIN_SPEED && craft.speed <= CRAFT_MAX_SPEED);
                prop_assert!((0.0..=1.0).contains(&craft.pos.x));
                prop_assert!((0.0..=1.0).contains(&craft.pos.y));
                prop_assert!(craft.rot >= 0.0 && craft.rot < TAU);
            }
        }
    }
}
