//! Colors, paints and the recorded draw surface.
//!
//! The drawable never talks to a renderer directly. It emits draw commands
//! into a [`Canvas`], and the host replays them with whatever rasterizer it
//! owns. This keeps the effect deterministic and testable without a display.

use crate::geometry::{round_half_up, Rect};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl Color {
    pub const fn rgb(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b, a: 1.0 }
    }

    pub const fn rgba(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    pub const fn from_hex(hex: u32) -> Self {
        Self {
            r: ((hex >> 16) & 0xFF) as f32 / 255.0,
            g: ((hex >> 8) & 0xFF) as f32 / 255.0,
            b: (hex & 0xFF) as f32 / 255.0,
            a: 1.0,
        }
    }

    /// Same color with the alpha channel replaced.
    pub const fn with_alpha(self, a: f32) -> Self {
        Self {
            r: self.r,
            g: self.g,
            b: self.b,
            a,
        }
    }

    pub const WHITE: Color = Color::rgb(1.0, 1.0, 1.0);
    pub const BLACK: Color = Color::rgb(0.0, 0.0, 0.0);
    pub const TRANSPARENT: Color = Color::rgba(0.0, 0.0, 0.0, 0.0);
}

impl Default for Color {
    fn default() -> Self {
        Self::TRANSPARENT
    }
}

/// Fill paint: an opaque color plus an integer alpha channel in 0..=255.
///
/// Alpha lives on the paint rather than the color so that per-frame opacity
/// scaling rounds through the 0..=255 integer domain.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Paint {
    color: Color,
    alpha: u8,
}

impl Paint {
    /// Paint from a color; the color's own alpha becomes the paint alpha.
    pub fn new(color: Color) -> Self {
        Self {
            color,
            alpha: round_half_up(color.a * 255.0) as u8,
        }
    }

    pub fn with_alpha(mut self, alpha: u8) -> Self {
        self.alpha = alpha;
        self
    }

    pub fn alpha(&self) -> u8 {
        self.alpha
    }

    pub fn color(&self) -> Color {
        self.color
    }

    /// Resolve to a drawable color at the given 0..=255 alpha.
    pub fn color_at_alpha(&self, alpha: u8) -> Color {
        self.color.with_alpha(alpha as f32 / 255.0)
    }
}

/// One recorded draw operation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DrawCommand {
    Rect { rect: Rect, color: Color },
}

/// Recorded display list the drawable paints into each frame.
#[derive(Debug, Default)]
pub struct Canvas {
    commands: Vec<DrawCommand>,
}

impl Canvas {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(commands: usize) -> Self {
        Self {
            commands: Vec::with_capacity(commands),
        }
    }

    /// Drop all recorded commands, keeping the allocation.
    pub fn clear(&mut self) {
        self.commands.clear();
    }

    pub fn draw_rect(&mut self, rect: Rect, color: Color) {
        self.commands.push(DrawCommand::Rect { rect, color });
    }

    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }
}
