//! Material underline background for text-input widgets.
//!
//! Two stacked lines at the bottom of the widget: a thin default line drawn
//! at the hint color that is always present, and a thicker activated band the
//! ripples sweep across in the accent (or error) color. The host drives the
//! drawable through the [`Drawable`] hooks; everything else is derived.

use crate::drawable::{Drawable, StateFlags};
use crate::geometry::{round_half_up, Padding, Rect};
use crate::paint::{Canvas, Paint};
use crate::ripple::RipplePool;
use crate::theme::Theme;

const INTRINSIC_WIDTH_DP: f32 = 20.0;
const INTRINSIC_HEIGHT_DP: f32 = 24.0;

const INTRINSIC_PADDING_HORIZONTAL_DP: f32 = 4.0;
const INTRINSIC_PADDING_TOP_DP: f32 = 4.0;
const INTRINSIC_PADDING_BOTTOM_DP: f32 = 13.0;

const DRAWING_RECT_TOP_FROM_BOTTOM_DP: f32 = 6.0;
const DEFAULT_HEIGHT_DP: f32 = 1.0;
const ACTIVATED_HEIGHT_DP: f32 = 2.0;

/// Animated underline background drawable.
#[derive(Debug)]
pub struct UnderlineBackground {
    theme: Theme,

    padding: Padding,
    intrinsic_width: f32,
    intrinsic_height: f32,
    drawing_rect_top_from_bottom: f32,
    default_height: f32,
    activated_height: f32,

    // The hint color's own alpha, as a 0..1 fraction.
    hint_alpha: f32,

    default_rect: Rect,
    activated_rect: Rect,

    state: StateFlags,
    alpha: u8,
    visible: bool,

    ripples: RipplePool,
}

impl UnderlineBackground {
    pub fn new(theme: Theme) -> Self {
        let density = theme.density;

        // Padding offsets truncate; drawn sizes round.
        let padding_horizontal = (INTRINSIC_PADDING_HORIZONTAL_DP * density).floor();
        let padding_top = (INTRINSIC_PADDING_TOP_DP * density).floor();
        let padding_bottom = (INTRINSIC_PADDING_BOTTOM_DP * density).floor();

        Self {
            theme,
            padding: Padding {
                top: padding_top,
                right: padding_horizontal,
                bottom: padding_bottom,
                left: padding_horizontal,
            },
            intrinsic_width: round_half_up(INTRINSIC_WIDTH_DP * density),
            intrinsic_height: round_half_up(INTRINSIC_HEIGHT_DP * density),
            drawing_rect_top_from_bottom: round_half_up(DRAWING_RECT_TOP_FROM_BOTTOM_DP * density),
            default_height: round_half_up(DEFAULT_HEIGHT_DP * density),
            activated_height: round_half_up(ACTIVATED_HEIGHT_DP * density),
            hint_alpha: theme.hint_color.a,
            default_rect: Rect::default(),
            activated_rect: Rect::default(),
            state: StateFlags::empty(),
            alpha: 0xFF,
            visible: true,
            ripples: RipplePool::new(density),
        }
    }

    /// Override the themed padding.
    pub fn with_padding(mut self, padding: Padding) -> Self {
        self.padding = padding;
        self
    }

    pub fn intrinsic_width(&self) -> f32 {
        self.intrinsic_width
    }

    pub fn intrinsic_height(&self) -> f32 {
        self.intrinsic_height
    }

    /// Whether this drawable is in error state. The default is `false`.
    pub fn has_error(&self) -> bool {
        self.state.has_error()
    }

    /// Set whether this drawable is in error state, driven by the hosting
    /// text-input layout rather than the platform state set.
    pub fn set_error(&mut self, error: bool) {
        if self.state.has_error() != error {
            self.state.set(StateFlags::ERROR, error);
            self.ripples.on_state_change(self.state);
        }
    }

    /// Drawable-level alpha applied on top of every color.
    pub fn set_alpha(&mut self, alpha: u8) {
        self.alpha = alpha;
    }

    pub fn alpha(&self) -> u8 {
        self.alpha
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    pub fn state(&self) -> StateFlags {
        self.state
    }

    pub fn ripples(&self) -> &RipplePool {
        &self.ripples
    }

    fn ripple_paint(&self) -> Paint {
        let color = if self.state.has_error() {
            self.theme.error_color
        } else {
            self.theme.accent_color
        };
        let alpha = round_half_up(color.a * f32::from(self.alpha)) as u8;
        Paint::new(color).with_alpha(alpha)
    }

    fn draw_default(&self, canvas: &mut Canvas) {
        let disabled_scale = if self.state.is_enabled() {
            1.0
        } else {
            self.theme.disabled_alpha
        };
        let alpha = round_half_up(disabled_scale * self.hint_alpha * f32::from(self.alpha)) as u8;
        canvas.draw_rect(
            self.default_rect,
            Paint::new(self.theme.hint_color).color_at_alpha(alpha),
        );
    }
}

impl Drawable for UnderlineBackground {
    fn on_bounds_change(&mut self, bounds: Rect) {
        let line_left = bounds.left() + self.padding.left;
        let line_top = bounds.bottom() - self.drawing_rect_top_from_bottom;
        let line_right = bounds.right() - self.padding.right;

        self.default_rect = Rect::from_edges(
            line_left,
            line_top,
            line_right,
            line_top + self.default_height,
        );
        self.activated_rect = Rect::from_edges(
            line_left,
            line_top,
            line_right,
            line_top + self.activated_height,
        );

        self.ripples.on_bounds_change(self.activated_rect);
    }

    fn on_state_change(&mut self, state: StateFlags) -> bool {
        // The host reports enabled/pressed/focused wholesale; the error flag
        // is owned by set_error and survives the recomputation.
        let platform = StateFlags::ENABLED | StateFlags::PRESSED | StateFlags::FOCUSED;
        self.state = (state & platform) | (self.state & StateFlags::ERROR);

        self.ripples.on_state_change(self.state);

        // Be safe.
        true
    }

    fn draw(&mut self, canvas: &mut Canvas) {
        self.draw_default(canvas);
        self.ripples.draw(canvas, &self.ripple_paint());
    }

    fn outline(&self) -> Rect {
        if self.ripples.has_ripple() {
            self.activated_rect
        } else {
            self.default_rect
        }
    }

    fn padding(&self) -> Padding {
        self.padding
    }

    fn jump_to_current_state(&mut self) {
        self.ripples.jump_to_current_state(self.state);
    }

    fn set_visible(&mut self, visible: bool, _restart: bool) -> bool {
        self.ripples.update_ripples();

        let changed = self.visible != visible;
        self.visible = visible;
        if changed && !visible {
            // Nothing animates while hidden; come back in the resting state.
            self.jump_to_current_state();
        }
        changed
    }

    fn set_hotspot(&mut self, x: f32, y: f32) {
        self.ripples.set_hotspot(x, y);
    }

    fn advance_animations(&mut self, dt_ms: f32) -> bool {
        self.ripples.advance_animations(dt_ms)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::paint::{Color, DrawCommand};

    fn background() -> UnderlineBackground {
        let mut background = UnderlineBackground::new(Theme::LIGHT);
        background.on_bounds_change(Rect::new(0.0, 0.0, 100.0, 48.0));
        background
    }

    #[test]
    fn test_line_geometry() {
        let background = background();
        assert_eq!(background.default_rect, Rect::new(4.0, 42.0, 92.0, 1.0));
        assert_eq!(background.activated_rect, Rect::new(4.0, 42.0, 92.0, 2.0));
    }

    #[test]
    fn test_geometry_scales_with_density() {
        let mut background = UnderlineBackground::new(Theme::LIGHT.with_density(1.5));
        background.on_bounds_change(Rect::new(0.0, 0.0, 100.0, 48.0));
        // 4 dp -> 6 px truncated; 6 dp -> 9 px; 1 dp -> 2 px rounded.
        assert_eq!(background.padding().left, 6.0);
        assert_eq!(background.default_rect.top(), 39.0);
        assert_eq!(background.default_rect.height, 2.0);
        assert_eq!(background.activated_rect.height, 3.0);
    }

    #[test]
    fn test_intrinsic_size() {
        let background = UnderlineBackground::new(Theme::LIGHT.with_density(2.0));
        assert_eq!(background.intrinsic_width(), 40.0);
        assert_eq!(background.intrinsic_height(), 48.0);
    }

    #[test]
    fn test_outline_follows_ripples() {
        let mut background = background();
        assert_eq!(background.outline(), background.default_rect);

        background.on_state_change(StateFlags::ENABLED | StateFlags::FOCUSED);
        assert_eq!(background.outline(), background.activated_rect);

        // Exiting-only still reports the activated band.
        background.on_state_change(StateFlags::ENABLED);
        assert_eq!(background.outline(), background.activated_rect);

        while background.advance_animations(16.0) {}
        background.jump_to_current_state();
        assert_eq!(background.outline(), background.default_rect);
    }

    #[test]
    fn test_default_line_alpha() {
        let mut background = background();
        background.on_state_change(StateFlags::ENABLED);

        let mut canvas = Canvas::new();
        background.draw(&mut canvas);
        let DrawCommand::Rect { color, .. } = canvas.commands()[0];
        // hint alpha 0.38 * 255 = 96.9 -> 97.
        assert!((color.a - 97.0 / 255.0).abs() < 1e-6);
    }

    #[test]
    fn test_default_line_alpha_when_disabled() {
        let mut background = background();
        background.on_state_change(StateFlags::empty());

        let mut canvas = Canvas::new();
        background.draw(&mut canvas);
        let DrawCommand::Rect { color, .. } = canvas.commands()[0];
        // 0.26 * 0.38 * 255 = 25.2 -> 25.
        assert!((color.a - 25.0 / 255.0).abs() < 1e-6);
    }

    #[test]
    fn test_error_switches_ripple_paint() {
        let mut background = background();
        background.on_state_change(StateFlags::ENABLED | StateFlags::FOCUSED);
        background.set_error(true);
        background.jump_to_current_state();

        let mut canvas = Canvas::new();
        background.draw(&mut canvas);
        // Default line, then the filled ripple in the error color.
        let DrawCommand::Rect { color, .. } = canvas.commands()[1];
        let error = Theme::LIGHT.error_color;
        assert_eq!((color.r, color.g, color.b), (error.r, error.g, error.b));
    }

    #[test]
    fn test_error_survives_state_recomputation() {
        let mut background = background();
        background.set_error(true);
        background.on_state_change(StateFlags::ENABLED | StateFlags::PRESSED);
        assert!(background.has_error());
    }

    #[test]
    fn test_error_keeps_underline_active() {
        let mut background = background();
        background.on_state_change(StateFlags::ENABLED);
        background.set_error(true);
        assert!(background.ripples().has_ripple());

        background.set_error(false);
        while background.advance_animations(16.0) {}
        background.jump_to_current_state();
        assert!(!background.ripples().has_ripple());
    }

    #[test]
    fn test_becoming_invisible_jumps_to_resting_state() {
        let mut background = background();
        background.on_state_change(StateFlags::ENABLED | StateFlags::FOCUSED);
        assert!(background.ripples().filled_ripple().is_none());

        assert!(background.set_visible(false, false));
        assert!(background.ripples().filled_ripple().is_some());
        assert!(!background.advance_animations(16.0));

        // No change reported when visibility stays the same.
        assert!(!background.set_visible(false, false));
    }

    #[test]
    fn test_disabled_jump_leaves_no_ripple() {
        let mut background = background();
        background.on_state_change(StateFlags::empty());
        background.jump_to_current_state();
        assert!(!background.ripples().has_ripple());
    }

    #[test]
    fn test_draw_is_default_line_then_ripples() {
        let mut background = background();
        background.on_state_change(StateFlags::ENABLED | StateFlags::FOCUSED);
        background.jump_to_current_state();

        let mut canvas = Canvas::new();
        background.draw(&mut canvas);
        assert_eq!(canvas.commands().len(), 2);
        let DrawCommand::Rect { rect, .. } = canvas.commands()[0];
        assert_eq!(rect, background.default_rect);
        let DrawCommand::Rect { rect, .. } = canvas.commands()[1];
        assert_eq!(rect, background.activated_rect);
    }

    #[test]
    fn test_ripples_rescale_on_bounds_change() {
        let mut background = background();
        background.on_state_change(StateFlags::ENABLED | StateFlags::FOCUSED);
        background.jump_to_current_state();

        background.on_bounds_change(Rect::new(0.0, 0.0, 200.0, 48.0));
        let mut canvas = Canvas::new();
        background.draw(&mut canvas);
        let DrawCommand::Rect { rect, .. } = canvas.commands()[1];
        assert_eq!(rect, background.activated_rect);
    }

    #[test]
    fn test_drawable_alpha_scales_everything() {
        let mut background = background();
        background.on_state_change(StateFlags::ENABLED);
        background.set_alpha(128);

        let mut canvas = Canvas::new();
        background.draw(&mut canvas);
        let DrawCommand::Rect { color, .. } = canvas.commands()[0];
        // 0.38 * 128 = 48.6 -> 49.
        assert!((color.a - 49.0 / 255.0).abs() < 1e-6);
    }
}
