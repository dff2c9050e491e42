//! Draw lists
//!
//! Screens describe a frame as a list of [`DrawCommand`]s in pixel space;
//! the host walks the list with its own bitmap, shader and text APIs.

pub mod shapes;
pub mod vertex;

pub use vertex::{Vertex, as_bytes, colors};

use glam::Vec2;

use crate::gamestate::Handle;

/// Output size in pixels
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    pub width: f32,
    pub height: f32,
}

impl Default for Viewport {
    fn default() -> Self {
        Self {
            width: 3200.0,
            height: 1800.0,
        }
    }
}

impl Viewport {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// Normalized playfield position to pixels
    #[inline]
    pub fn to_pixels(&self, p: Vec2) -> Vec2 {
        Vec2::new(p.x * self.width, p.y * self.height)
    }

    pub fn center(&self) -> Vec2 {
        Vec2::new(self.width / 2.0, self.height / 2.0)
    }
}

/// Horizontal text alignment
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Align {
    Left,
    Centre,
}

/// A bitmap drawn with a pivot, rotation, scale and tint
#[derive(Debug, Clone, PartialEq)]
pub struct Sprite {
    pub bitmap: Handle,
    /// Pivot inside the bitmap (pixels)
    pub pivot: Vec2,
    /// Where the pivot lands on screen (pixels)
    pub pos: Vec2,
    pub scale: Vec2,
    pub angle: f32,
    pub tint: [f32; 4],
    pub flip_vertical: bool,
}

impl Sprite {
    /// Untransformed bitmap with its top-left corner at `pos`
    pub fn at(bitmap: Handle, pos: Vec2) -> Self {
        Self {
            bitmap,
            pivot: Vec2::ZERO,
            pos,
            scale: Vec2::ONE,
            angle: 0.0,
            tint: colors::WHITE,
            flip_vertical: false,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    /// Full-viewport vertical gradient
    Gradient { top: [f32; 4], bottom: [f32; 4] },
    Sprite(Sprite),
    /// Triangle list (3 vertices per triangle)
    Triangles(Vec<Vertex>),
    Text {
        font: Handle,
        pos: Vec2,
        color: [f32; 4],
        align: Align,
        text: String,
    },
    /// Switch shader for the following commands (None = default)
    UseShader(Option<Handle>),
}

/// A frame's worth of draw commands
#[derive(Debug, Clone, Default)]
pub struct Scene {
    pub viewport: Viewport,
    pub commands: Vec<DrawCommand>,
}

impl Scene {
    pub fn new(viewport: Viewport) -> Self {
        Self {
            viewport,
            commands: Vec::new(),
        }
    }

    pub fn push(&mut self, command: DrawCommand) {
        self.commands.push(command);
    }

    pub fn text(&mut self, font: Handle, pos: Vec2, align: Align, text: impl Into<String>) {
        self.push(DrawCommand::Text {
            font,
            pos,
            color: colors::WHITE,
            align,
            text: text.into(),
        });
    }

    /// Number of triangles across all triangle commands
    pub fn triangle_count(&self) -> usize {
        self.commands
            .iter()
            .map(|c| match c {
                DrawCommand::Triangles(v) => v.len() / 3,
                _ => 0,
            })
            .sum()
    }

    /// Vertex data of every triangle command, packed for a single upload
    pub fn vertex_bytes(&self) -> Vec<u8> {
        self.commands
            .iter()
            .filter_map(|c| match c {
                DrawCommand::Triangles(v) => Some(as_bytes(v)),
                _ => None,
            })
            .flatten()
            .copied()
            .collect()
    }
}
