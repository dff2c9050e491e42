//! Vertex types for 2D rendering

use bytemuck::{Pod, Zeroable};
use glam::Vec2;

/// Simple 2D vertex with pixel position and color
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, Pod, Zeroable)]
pub struct Vertex {
    pub position: [f32; 2],
    pub color: [f32; 4],
}

impl Vertex {
    pub const fn new(x: f32, y: f32, color: [f32; 4]) -> Self {
        Self {
            position: [x, y],
            color,
        }
    }

    pub fn at(pos: Vec2, color: [f32; 4]) -> Self {
        Self::new(pos.x, pos.y, color)
    }
}

/// Raw bytes of a vertex list, ready for a host vertex buffer
pub fn as_bytes(vertices: &[Vertex]) -> &[u8] {
    bytemuck::cast_slice(vertices)
}

/// Colors for game elements
pub mod colors {
    pub const SKY_TOP: [f32; 4] = [0.0, 0.0, 144.0 / 255.0, 1.0];
    pub const SKY_BOTTOM: [f32; 4] = [0.0, 0.0, 192.0 / 255.0, 1.0];
    pub const CONE_EYE: [f32; 4] = [1.0, 1.0, 0.7, 0.55];
    pub const CONE_EDGE: [f32; 4] = [1.0, 1.0, 0.7, 0.05];
    pub const CONE_ALERT: [f32; 4] = [1.0, 0.2, 0.1, 0.6];
    pub const WHITE: [f32; 4] = [1.0, 1.0, 1.0, 1.0];
}
