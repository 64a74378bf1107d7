//! Easing curves for ripple transitions.

/// Easing function mapping elapsed fraction to eased fraction.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Easing {
    /// Constant speed.
    Linear,
    /// Smooth logarithmic deceleration.
    LogDecelerate(LogDecelerate),
}

impl Easing {
    pub fn log_decelerate(base: f32, time_scale: f32, drift: f32) -> Self {
        Easing::LogDecelerate(LogDecelerate::new(base, time_scale, drift))
    }

    /// Evaluate at elapsed fraction `t` in [0, 1].
    pub fn evaluate(&self, t: f32) -> f32 {
        match self {
            Easing::Linear => t,
            Easing::LogDecelerate(curve) => curve.evaluate(t),
        }
    }
}

/// Deceleration curve `1 - base^(-t / time_scale) + drift * t`, rescaled so
/// the output is exactly 1 at `t = 1`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LogDecelerate {
    base: f32,
    drift: f32,
    // Reciprocal, so evaluation multiplies instead of dividing.
    time_scale: f32,
    output_scale: f32,
}

impl LogDecelerate {
    pub fn new(base: f32, time_scale: f32, drift: f32) -> Self {
        let mut curve = Self {
            base,
            drift,
            time_scale: 1.0 / time_scale,
            output_scale: 1.0,
        };
        curve.output_scale = 1.0 / curve.compute(1.0);
        curve
    }

    fn compute(&self, t: f32) -> f32 {
        1.0 - self.base.powf(-t * self.time_scale) + self.drift * t
    }

    pub fn evaluate(&self, t: f32) -> f32 {
        self.compute(t) * self.output_scale
    }
}
