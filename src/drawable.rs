//! The host-facing drawable surface abstraction.
//!
//! The host view framework owns bounds, widget state, visibility and the
//! frame clock; a [`Drawable`] only reacts to them. State is always reported
//! wholesale: every `on_state_change` carries the complete flag set, and the
//! drawable recomputes its derived state from scratch.

use bitflags::bitflags;

use crate::geometry::{Padding, Rect};
use crate::paint::Canvas;

bitflags! {
    /// Widget state bits reported by the host.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
    pub struct StateFlags: u8 {
        const ENABLED = 0b0001;
        const PRESSED = 0b0010;
        const FOCUSED = 0b0100;
        /// Error display, driven by the text-input layout rather than the
        /// platform state set.
        const ERROR   = 0b1000;
    }
}

impl StateFlags {
    pub fn is_enabled(&self) -> bool {
        self.contains(StateFlags::ENABLED)
    }

    pub fn is_pressed(&self) -> bool {
        self.contains(StateFlags::PRESSED)
    }

    pub fn is_focused(&self) -> bool {
        self.contains(StateFlags::FOCUSED)
    }

    pub fn has_error(&self) -> bool {
        self.contains(StateFlags::ERROR)
    }
}

/// A stateful background the host renders behind a widget.
///
/// One interface, no hierarchy: hosts call these hooks from their own
/// bounds/state/draw callbacks. All methods are synchronous and run on the
/// host's render thread.
pub trait Drawable {
    /// The widget bounds changed; recompute geometry.
    fn on_bounds_change(&mut self, bounds: Rect);

    /// The widget state set changed. Returns whether the drawable's
    /// appearance may have changed and a redraw is needed.
    fn on_state_change(&mut self, state: StateFlags) -> bool;

    /// Record this frame's draw commands.
    fn draw(&mut self, canvas: &mut Canvas);

    /// The rect the host should use for shadow/elevation clipping.
    fn outline(&self) -> Rect;

    /// Content insets the host should apply around the widget.
    fn padding(&self) -> Padding;

    /// Snap every running transition to its final state, without animating.
    fn jump_to_current_state(&mut self);

    /// Visibility changed. Returns whether the visibility actually changed.
    fn set_visible(&mut self, visible: bool, restart: bool) -> bool;

    /// Report the interaction coordinate seeding the next ripple.
    fn set_hotspot(&mut self, x: f32, y: f32);

    /// Drive animations by `dt_ms` milliseconds of frame time. Returns true
    /// while anything is still animating and the host should keep drawing.
    fn advance_animations(&mut self, dt_ms: f32) -> bool;
}
