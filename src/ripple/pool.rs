//! Role-based orchestration of ripples.
//!
//! A ripple moves through four roles: at most one `entering` (touch down),
//! any number `filling` (released toward focus), at most one `filled`
//! (settled, covering the rect) and any number `exiting` (fading out).
//! The filled role is exclusive: once a ripple settles, every other ripple
//! is ended and dropped, and only the filled one is drawn.
//!
//! Roles are reconciled lazily, on state changes and before drawing, by
//! [`RipplePool::update_ripples`]: ripples whose animations have reached the
//! filled values are promoted, and ripples that finished exiting are pruned.

use smallvec::SmallVec;

use crate::drawable::StateFlags;
use crate::geometry::Rect;
use crate::paint::{Canvas, Paint};

use super::linear::LinearRipple;

/// Upper bound on concurrently animating ripples; creation beyond it is
/// refused rather than queued.
pub const MAX_RIPPLES: usize = 10;

/// Owns every live ripple and applies widget state transitions to them.
#[derive(Debug, Default)]
pub struct RipplePool {
    density: f32,
    activated_rect: Rect,

    pending_position: Option<f32>,

    entering: Option<LinearRipple>,
    filling: SmallVec<[LinearRipple; MAX_RIPPLES]>,
    filled: Option<LinearRipple>,
    exiting: SmallVec<[LinearRipple; MAX_RIPPLES]>,
}

impl RipplePool {
    pub fn new(density: f32) -> Self {
        Self {
            density,
            ..Self::default()
        }
    }

    /// Store the new ripple band and renotify every live ripple, in every
    /// role, before the next draw.
    pub fn on_bounds_change(&mut self, activated_rect: Rect) {
        self.activated_rect = activated_rect;
        for ripple in self.iter_mut() {
            ripple.on_bounds_change(activated_rect);
        }
    }

    /// Apply a recomputed widget state to the pool.
    pub fn on_state_change(&mut self, state: StateFlags) {
        self.update_ripples();

        // Branch into states and operate on each non-exiting group.
        if !state.is_enabled() || (!state.is_pressed() && !state.is_focused() && !state.has_error())
        {
            // Disabled, or enabled and unpressed and unfocused.
            self.exit_ripples();
        } else if state.is_pressed() {
            // Enter a new ripple unless one is entering or settled; filling
            // and filled ripples are left untouched.
            if self.entering.is_none() && self.filled.is_none() {
                self.create_and_enter_ripple();
            }
        } else {
            // Enabled, unpressed, focused or error.
            if self.entering.is_some() {
                self.fill_entering_ripple();
            }
            // Ensure a filling or filled ripple.
            if self.filling.is_empty() && self.filled.is_none() {
                self.create_filling_ripple();
            }
        }
    }

    /// Reconcile roles: promote a ripple that has reached the filled values
    /// into the exclusive filled slot, otherwise prune exited ripples.
    pub fn update_ripples(&mut self) {
        if self.filled.is_none() && self.entering.as_ref().is_some_and(LinearRipple::has_filled) {
            self.filled = self.entering.take();
        }
        if self.filled.is_none() {
            if let Some(index) = self.filling.iter().position(LinearRipple::has_filled) {
                self.filled = Some(self.filling.remove(index));
            }
        }

        if self.filled.is_some() {
            // Clear every ripple except the filled one.
            self.remove_entering_ripple();
            self.remove_filling_ripples();
            self.remove_exiting_ripples();
        } else {
            self.exiting.retain(|ripple| !ripple.has_exited());
        }
    }

    fn remove_entering_ripple(&mut self) {
        if let Some(mut ripple) = self.entering.take() {
            ripple.end_animation();
        }
    }

    fn remove_filling_ripples(&mut self) {
        for mut ripple in self.filling.drain(..) {
            ripple.end_animation();
        }
    }

    fn remove_filled_ripple(&mut self) {
        self.filled = None;
    }

    fn remove_exiting_ripples(&mut self) {
        for mut ripple in self.exiting.drain(..) {
            ripple.end_animation();
        }
    }

    fn exit_ripple(&mut self, mut ripple: LinearRipple) {
        ripple.exit();
        self.exiting.push(ripple);
    }

    /// Move every non-exiting ripple into the exiting role.
    fn exit_ripples(&mut self) {
        if let Some(ripple) = self.entering.take() {
            self.exit_ripple(ripple);
        }

        let filling = std::mem::take(&mut self.filling);
        for ripple in filling {
            self.exit_ripple(ripple);
        }

        if let Some(ripple) = self.filled.take() {
            self.exit_ripple(ripple);
        }
    }

    /// Create a ripple at the pending hotspot position, or the rect center
    /// when none was reported. Refused when too many ripples are alive.
    fn create_ripple(&mut self) -> Option<LinearRipple> {
        if self.filling.len() + self.exiting.len() >= MAX_RIPPLES {
            log::warn!("too many ripples alive, skipping ripple creation");
            return None;
        }

        let position = self
            .pending_position
            .take()
            .unwrap_or_else(|| self.activated_rect.center_x());
        Some(LinearRipple::new(self.activated_rect, position, self.density))
    }

    fn create_and_enter_ripple(&mut self) {
        debug_assert!(
            self.entering.is_none(),
            "create_and_enter_ripple() while a ripple is already entering"
        );

        if let Some(mut ripple) = self.create_ripple() {
            ripple.enter();
            self.entering = Some(ripple);
        }
    }

    fn fill_ripple(&mut self, mut ripple: LinearRipple) {
        ripple.fill();
        self.filling.push(ripple);
    }

    fn fill_entering_ripple(&mut self) {
        debug_assert!(
            self.entering.is_some(),
            "fill_entering_ripple() without an entering ripple"
        );

        if let Some(ripple) = self.entering.take() {
            self.fill_ripple(ripple);
        }
    }

    fn create_filling_ripple(&mut self) {
        if let Some(ripple) = self.create_ripple() {
            self.fill_ripple(ripple);
        }
    }

    fn create_filled_ripple(&mut self) {
        if let Some(mut ripple) = self.create_ripple() {
            ripple.make_filled();
            self.filled = Some(ripple);
        }
    }

    /// Record the interaction coordinate for the next ripple, or move the
    /// entering ripple's start to it. The pending position is consumed by
    /// the next ripple created.
    pub fn set_hotspot(&mut self, x: f32, _y: f32) {
        let x = x - self.activated_rect.left();
        match self.entering.as_mut() {
            Some(ripple) => ripple.move_to(x),
            None => self.pending_position = Some(x),
        }
    }

    /// Snap to the state's resting appearance without animating: every
    /// transition is ended, and a pressed or focused widget keeps a single
    /// filled ripple.
    pub fn jump_to_current_state(&mut self, state: StateFlags) {
        self.update_ripples();

        self.remove_entering_ripple();
        self.remove_filling_ripples();
        self.remove_exiting_ripples();

        if state.is_enabled() && (state.is_pressed() || state.is_focused()) {
            if self.filled.is_none() {
                self.create_filled_ripple();
            }
        } else {
            self.remove_filled_ripple();
        }
    }

    /// Whether any role is occupied, exiting-only included.
    pub fn has_ripple(&self) -> bool {
        self.entering.is_some()
            || !self.filling.is_empty()
            || self.filled.is_some()
            || !self.exiting.is_empty()
    }

    /// Drive every live animation by `dt_ms`. Returns true while any ripple
    /// still needs frames.
    pub fn advance_animations(&mut self, dt_ms: f32) -> bool {
        let mut animating = false;
        for ripple in self.iter_mut() {
            animating |= ripple.advance(dt_ms);
        }
        animating
    }

    /// Draw the frame: a filled ripple alone, otherwise exiting ripples
    /// (oldest first), then filling ripples, then the entering ripple on
    /// top.
    pub fn draw(&mut self, canvas: &mut Canvas, paint: &Paint) {
        self.update_ripples();

        if let Some(ripple) = &self.filled {
            ripple.draw(canvas, paint);
        } else {
            for ripple in &self.exiting {
                ripple.draw(canvas, paint);
            }
            for ripple in &self.filling {
                ripple.draw(canvas, paint);
            }
            if let Some(ripple) = &self.entering {
                ripple.draw(canvas, paint);
            }
        }
    }

    fn iter_mut(&mut self) -> impl Iterator<Item = &mut LinearRipple> + '_ {
        self.entering
            .iter_mut()
            .chain(self.filling.iter_mut())
            .chain(self.filled.iter_mut())
            .chain(self.exiting.iter_mut())
    }

    pub fn entering_ripple(&self) -> Option<&LinearRipple> {
        self.entering.as_ref()
    }

    pub fn filled_ripple(&self) -> Option<&LinearRipple> {
        self.filled.as_ref()
    }

    pub fn filling_count(&self) -> usize {
        self.filling.len()
    }

    pub fn exiting_count(&self) -> usize {
        self.exiting.len()
    }
}
