//! Draw command builders for the gameplay screen

use glam::Vec2;
use std::f32::consts::{FRAC_PI_2, PI, TAU};

use super::vertex::{Vertex, colors};
use super::{Sprite, Viewport};
use crate::gamestate::Handle;
use crate::sim::{Craft, Drone, Star};

/// Craft bitmap pivot (pixels)
pub const CRAFT_PIVOT: Vec2 = Vec2::new(70.0, 80.0);

/// Searchlight cone as a single shaded triangle, bright at the drone
pub fn drone_cone(drone: &Drone, viewport: &Viewport, alert: bool) -> [Vertex; 3] {
    let [tip, left, right] = drone.cone().vertices();
    let (eye, edge) = if alert {
        (colors::CONE_ALERT, colors::CONE_ALERT)
    } else {
        (colors::CONE_EYE, colors::CONE_EDGE)
    };
    [
        Vertex::at(viewport.to_pixels(tip), eye),
        Vertex::at(viewport.to_pixels(left), edge),
        Vertex::at(viewport.to_pixels(right), edge),
    ]
}

/// Whether the craft sprite must be mirrored to stay upright
pub fn craft_flipped(rot: f32) -> bool {
    ((rot + FRAC_PI_2) % TAU).abs() > PI
}

pub fn craft_sprite(craft: &Craft, bitmap: Handle, viewport: &Viewport) -> Sprite {
    Sprite {
        bitmap,
        pivot: CRAFT_PIVOT,
        pos: viewport.to_pixels(craft.pos),
        scale: Vec2::ONE,
        angle: craft.rot,
        tint: colors::WHITE,
        flip_vertical: craft_flipped(craft.rot),
    }
}

/// A twinkling star; `size` is the bitmap size used to center the pivot
pub fn star_sprite(star: &Star, bitmap: Handle, size: Vec2, viewport: &Viewport) -> Sprite {
    let shine = star.shininess();
    Sprite {
        bitmap,
        pivot: size / 2.0,
        pos: viewport.to_pixels(star.pos),
        scale: Vec2::splat(star.size),
        angle: star.sway(),
        tint: [shine, shine, shine, 1.0],
        flip_vertical: false,
    }
}

/// Small debug marker centered on `pos` (pixels)
pub fn marker(pos: Vec2, color: [f32; 4]) -> [Vertex; 3] {
    const R: f32 = 6.0;
    [
        Vertex::at(pos + Vec2::new(0.0, -R), color),
        Vertex::at(pos + Vec2::new(R, R), color),
        Vertex::at(pos + Vec2::new(-R, R), color),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_craft_flip() {
        // Heading right: upright
        assert!(!craft_flipped(0.0));
        // Heading up (spawn heading): upright
        assert!(!craft_flipped(-FRAC_PI_2));
        // Heading left: mirrored
        assert!(craft_flipped(PI));
        // Heading down-left
        assert!(craft_flipped(0.75 * PI));
    }

    #[test]
    fn test_drone_cone_in_pixels() {
        let drone = Drone {
            enabled: true,
            pos: Vec2::new(0.5, 0.5),
            length: 0.1,
            ..Default::default()
        };
        let viewport = Viewport::new(100.0, 100.0);
        let verts = drone_cone(&drone, &viewport, false);
        assert_eq!(verts[0].position, [50.0, 50.0]);
        assert!((verts[1].position[0] - 60.0).abs() < 1e-4);
        assert_eq!(verts[0].color, colors::CONE_EYE);
    }
}
