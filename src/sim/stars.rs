//! Twinkling background stars (cosmetic only)

use glam::Vec2;
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::consts::NUM_STARS;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Star {
    pub pos: Vec2,
    pub counter: f32,
    pub speed: f32,
    pub size: f32,
    pub deviation: f32,
}

impl Star {
    /// Brightness multiplier for tinting
    pub fn shininess(&self) -> f32 {
        (1.0 - ((self.counter * 4.2).cos() + 1.0) * 0.1) * 0.8
    }

    /// Rotation of the star sprite
    pub fn sway(&self) -> f32 {
        self.counter.sin() * self.deviation
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Starfield {
    pub stars: Vec<Star>,
}

impl Starfield {
    /// Scatter a fresh sky
    pub fn scatter<R: Rng + ?Sized>(rng: &mut R) -> Self {
        let stars = (0..NUM_STARS)
            .map(|_| Star {
                pos: Vec2::new(rng.random::<f32>(), rng.random::<f32>()),
                counter: rng.random::<f32>() * std::f32::consts::PI,
                size: rng.random::<f32>() * 0.5 + 0.75,
                speed: rng.random::<f32>() * 0.1 + 1.0,
                deviation: rng.random::<f32>(),
            })
            .collect();
        Self { stars }
    }

    pub fn update(&mut self, dt: f32) {
        for star in &mut self.stars {
            star.counter += dt * star.speed;
        }
    }
}
