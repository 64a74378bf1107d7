//! Externally-clocked scalar tweens.
//!
//! A [`Tween`] never owns a clock. The host accumulates frame time into it
//! through [`Tween::advance`], and the current value is always a pure
//! function of the accumulated elapsed time. This is what keeps the whole
//! effect deterministic and testable without a display.

use super::Transition;

/// Linear interpolation; `t` may exceed [0, 1].
pub fn lerp(from: f32, to: f32, t: f32) -> f32 {
    from + (to - from) * t
}

/// Result of advancing a tween, indicating whether the value changed.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum AdvanceResult {
    /// Value did not change (still delayed, finished, or same sample).
    NoChange,
    /// Value changed to a new value.
    Changed(f32),
}

impl AdvanceResult {
    pub fn is_changed(&self) -> bool {
        matches!(self, AdvanceResult::Changed(_))
    }
}

/// One animated scalar property.
#[derive(Debug, Clone, PartialEq)]
pub struct Tween {
    start: f32,
    target: f32,
    current: f32,
    elapsed_ms: f32,
    transition: Transition,
}

impl Tween {
    /// Start a tween at `start`, heading for `target`.
    ///
    /// A tween with no delay and no duration completes immediately: the
    /// current value snaps to the target at construction.
    pub fn new(start: f32, target: f32, transition: Transition) -> Self {
        let immediate = transition.delay_ms + transition.duration_ms <= 0.0;
        Self {
            start,
            target,
            current: if immediate { target } else { start },
            elapsed_ms: 0.0,
            transition,
        }
    }

    /// Accumulate `dt_ms` of frame time and resample the value.
    pub fn advance(&mut self, dt_ms: f32) -> AdvanceResult {
        if self.is_finished() {
            return AdvanceResult::NoChange;
        }

        self.elapsed_ms += dt_ms;
        let value = self.value_at(self.elapsed_ms);
        if value != self.current {
            self.current = value;
            AdvanceResult::Changed(value)
        } else {
            AdvanceResult::NoChange
        }
    }

    // Pure sample of the tween at a given elapsed time.
    fn value_at(&self, elapsed_ms: f32) -> f32 {
        let active_ms = elapsed_ms - self.transition.delay_ms;
        if active_ms <= 0.0 {
            return self.start;
        }
        let t = if self.transition.duration_ms <= 0.0 {
            1.0
        } else {
            (active_ms / self.transition.duration_ms).min(1.0)
        };
        lerp(self.start, self.target, self.transition.easing.evaluate(t))
    }

    /// Jump to the final value, as if the full duration had elapsed.
    pub fn finish(&mut self) {
        self.elapsed_ms = self.transition.delay_ms + self.transition.duration_ms;
        self.current = self.target;
    }

    pub fn is_finished(&self) -> bool {
        self.elapsed_ms >= self.transition.delay_ms + self.transition.duration_ms
    }

    pub fn value(&self) -> f32 {
        self.current
    }

    pub fn target(&self) -> f32 {
        self.target
    }
}
