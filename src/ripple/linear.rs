//! A single linear ripple sweep.
//!
//! A ripple is two tweened properties: `radius_tween` drives both the sweep
//! radius and the horizontal position from the touch point toward the rect
//! center, and `opacity` fades the fill in and out. Durations come from
//! constant accelerations scaled by display density, so a wider field sweeps
//! longer instead of faster.

use crate::animation::{lerp, AdvanceResult, Easing, Transition, Tween};
use crate::geometry::{round_half_up, Rect};
use crate::paint::{Canvas, Paint};

const WAVE_TOUCH_DOWN_ACCELERATION_DP: f32 = 1024.0;
const WAVE_TOUCH_UP_ACCELERATION_DP: f32 = 3400.0;
const WAVE_OPACITY_DECAY_VELOCITY: f32 = 3.0;

const RIPPLE_ENTER_DELAY_MS: f32 = 80.0;
const OPACITY_ENTER_DURATION_MS: f32 = 120.0;

fn decelerate_easing() -> Easing {
    Easing::log_decelerate(400.0, 1.4, 0.0)
}

/// Compound animation driving one ripple. At most one is live per ripple;
/// installing a new one drops the previous.
#[derive(Debug, Clone, PartialEq)]
struct RippleAnimation {
    radius: Option<Tween>,
    opacity: Option<Tween>,
    /// Whether completion (natural or forced) marks the ripple as ended.
    /// Set for fill/exit animations, not for enter.
    notify_end: bool,
}

impl RippleAnimation {
    fn is_finished(&self) -> bool {
        self.radius.as_ref().is_none_or(Tween::is_finished)
            && self.opacity.as_ref().is_none_or(Tween::is_finished)
    }
}

/// One ripple sweep bounded to a rectangle.
#[derive(Debug, Clone, PartialEq)]
pub struct LinearRipple {
    touch_down_acceleration: f32,
    touch_up_acceleration: f32,

    bounds: Rect,
    starting_position: f32,

    target_position: f32,
    target_radius: f32,

    radius_tween: f32,
    opacity: f32,

    animation: Option<RippleAnimation>,
    animation_ended: bool,
}

impl LinearRipple {
    /// New invisible ripple starting its sweep at `position` (relative to the
    /// rect's left edge).
    pub fn new(bounds: Rect, position: f32, density: f32) -> Self {
        let mut ripple = Self {
            touch_down_acceleration: WAVE_TOUCH_DOWN_ACCELERATION_DP * density,
            touch_up_acceleration: WAVE_TOUCH_UP_ACCELERATION_DP * density,
            bounds: Rect::default(),
            starting_position: position,
            target_position: 0.0,
            target_radius: 0.0,
            radius_tween: 0.0,
            opacity: 0.0,
            animation: None,
            animation_ended: false,
        };
        ripple.on_bounds_change(bounds);
        ripple
    }

    /// Rescale the sweep target after the owning rect changed.
    pub fn on_bounds_change(&mut self, bounds: Rect) {
        self.bounds = bounds;
        self.target_radius = bounds.width / 2.0;
        self.target_position = bounds.left() + self.target_radius;
    }

    /// Start the touch-down sweep: radius and position tween to their
    /// targets after a short delay while opacity fades in.
    pub fn enter(&mut self) {
        self.cancel_animation();

        let radius = Tween::new(
            self.radius_tween,
            1.0,
            Transition::new(self.radius_enter_duration(), Easing::Linear)
                .delay(RIPPLE_ENTER_DELAY_MS),
        );
        let opacity = Tween::new(
            self.opacity,
            1.0,
            Transition::new(OPACITY_ENTER_DURATION_MS, Easing::Linear),
        );
        self.animation = Some(RippleAnimation {
            radius: Some(radius),
            opacity: Some(opacity),
            notify_end: false,
        });
    }

    /// Decelerate the radius to its target while opacity finishes its ramp
    /// to fully visible. No-op on an already filled ripple.
    pub fn fill(&mut self) {
        if self.has_filled() {
            return;
        }

        self.cancel_animation();

        let radius = Tween::new(
            self.radius_tween,
            1.0,
            Transition::new(self.radius_fill_duration(), decelerate_easing()),
        );
        let opacity = Tween::new(
            self.opacity,
            1.0,
            Transition::new(OPACITY_ENTER_DURATION_MS, Easing::Linear),
        );
        self.animation = Some(RippleAnimation {
            radius: Some(radius),
            opacity: Some(opacity),
            notify_end: false,
        });
    }

    /// Fade out, decelerating the radius to its target on the way if it is
    /// not there yet. No-op once the exit has already run to completion.
    pub fn exit(&mut self) {
        if self.has_exited() {
            return;
        }

        self.cancel_animation();

        let radius = (self.radius_tween < 1.0).then(|| {
            Tween::new(
                self.radius_tween,
                1.0,
                Transition::new(self.radius_fill_duration(), decelerate_easing()),
            )
        });
        let opacity = Tween::new(
            self.opacity,
            0.0,
            Transition::new(self.opacity_exit_duration(), Easing::Linear),
        );
        self.animation = Some(RippleAnimation {
            radius,
            opacity: Some(opacity),
            notify_end: true,
        });
    }

    /// Snap to the fully filled state without animating.
    pub fn make_filled(&mut self) {
        self.cancel_animation();
        self.radius_tween = 1.0;
        self.opacity = 1.0;
    }

    /// Reposition the start of the sweep. Only the untweened endpoint moves;
    /// the target stays at the rect center.
    pub fn move_to(&mut self, position: f32) {
        self.starting_position = position;
    }

    fn radius_enter_duration(&self) -> f32 {
        round_half_up(1000.0 * (self.target_radius / self.touch_down_acceleration).sqrt())
    }

    fn radius_fill_duration(&self) -> f32 {
        let remaining = self.target_radius * (1.0 - self.radius_tween);
        round_half_up(
            1000.0
                * (2.0 * remaining / (self.touch_up_acceleration + self.touch_down_acceleration))
                    .sqrt(),
        )
    }

    fn opacity_exit_duration(&self) -> f32 {
        round_half_up(1000.0 * self.opacity / WAVE_OPACITY_DECAY_VELOCITY)
    }

    /// Whether the ripple has settled at the filled values. Checked by the
    /// pool when promoting into the exclusive filled role.
    pub fn has_filled(&self) -> bool {
        self.radius_tween == 1.0 && self.opacity == 1.0
    }

    /// Whether the exit animation has run to completion, naturally or forced
    /// through [`LinearRipple::end_animation`]. The pool prunes on this, so
    /// a ripple exiting from an invisible state still lives for the span of
    /// its animation rather than vanishing between two reconciles.
    pub fn has_exited(&self) -> bool {
        self.animation_ended
    }

    pub fn is_animating(&self) -> bool {
        self.animation.is_some()
    }

    /// Force the current animation to its final values and fire its
    /// completion semantics.
    pub fn end_animation(&mut self) {
        if let Some(mut animation) = self.animation.take() {
            if let Some(radius) = animation.radius.as_mut() {
                radius.finish();
                self.radius_tween = radius.value();
            }
            if let Some(opacity) = animation.opacity.as_mut() {
                opacity.finish();
                self.opacity = opacity.value();
            }
            if animation.notify_end {
                self.animation_ended = true;
            }
        }
    }

    /// Abort the current animation, keeping whatever values it reached.
    pub fn cancel_animation(&mut self) {
        self.animation = None;
    }

    /// Drive the live animation by `dt_ms`. Returns true while the ripple
    /// still needs frames (a value changed or an animation is in flight).
    pub fn advance(&mut self, dt_ms: f32) -> bool {
        let Some(animation) = self.animation.as_mut() else {
            return false;
        };

        let mut changed = false;
        if let Some(radius) = animation.radius.as_mut() {
            if let AdvanceResult::Changed(value) = radius.advance(dt_ms) {
                self.radius_tween = value;
                changed = true;
            }
        }
        if let Some(opacity) = animation.opacity.as_mut() {
            if let AdvanceResult::Changed(value) = opacity.advance(dt_ms) {
                self.opacity = value;
                changed = true;
            }
        }

        if animation.is_finished() {
            let notify = animation.notify_end;
            self.animation = None;
            if notify {
                self.animation_ended = true;
            }
        }

        changed || self.animation.is_some()
    }

    /// Paint the ripple: a full-height span clamped to the rect, at the
    /// paint's alpha scaled by the ripple opacity. Skipped entirely when the
    /// scaled alpha or the radius rounds to zero.
    pub fn draw(&self, canvas: &mut Canvas, paint: &Paint) {
        let alpha = round_half_up(f32::from(paint.alpha()) * self.opacity) as u8;
        let radius = lerp(0.0, self.target_radius, self.radius_tween);
        if alpha == 0 || radius == 0.0 {
            return;
        }

        let position = lerp(self.starting_position, self.target_position, self.radius_tween);
        let left = (position - radius).clamp(self.bounds.left(), self.bounds.right());
        let right = (position + radius).clamp(self.bounds.left(), self.bounds.right());
        canvas.draw_rect(
            Rect::from_edges(left, self.bounds.top(), right, self.bounds.bottom()),
            paint.color_at_alpha(alpha),
        );
    }

    pub fn radius_tween(&self) -> f32 {
        self.radius_tween
    }

    pub fn opacity(&self) -> f32 {
        self.opacity
    }

    pub fn starting_position(&self) -> f32 {
        self.starting_position
    }
}
