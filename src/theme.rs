//! Theme values resolved by the host and injected at construction.

use crate::paint::Color;

/// Resolved theme attributes for the underline background.
///
/// `hint_color` carries its own alpha: the default line is drawn at the hint
/// color's intrinsic opacity, further scaled when the widget is disabled.
/// `density` converts dp-specified sizes and accelerations into host pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Theme {
    pub hint_color: Color,
    pub accent_color: Color,
    pub error_color: Color,
    pub disabled_alpha: f32,
    pub density: f32,
}

impl Theme {
    /// Light theme defaults: 38% black hint, pink A200 accent, red 500 error.
    pub const LIGHT: Self = Self {
        hint_color: Color::rgba(0.0, 0.0, 0.0, 0.38),
        accent_color: Color::from_hex(0xFF4081),
        error_color: Color::from_hex(0xF44336),
        disabled_alpha: 0.26,
        density: 1.0,
    };

    /// Dark theme defaults: 50% white hint.
    pub const DARK: Self = Self {
        hint_color: Color::rgba(1.0, 1.0, 1.0, 0.50),
        accent_color: Color::from_hex(0xFF4081),
        error_color: Color::from_hex(0xF44336),
        disabled_alpha: 0.30,
        density: 1.0,
    };

    pub fn with_density(mut self, density: f32) -> Self {
        self.density = density;
        self
    }

    pub fn with_accent(mut self, accent: Color) -> Self {
        self.accent_color = accent;
        self
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::LIGHT
    }
}
