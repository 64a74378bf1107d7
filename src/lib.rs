//! Animated Material-style underline background for text-input widgets.
//!
//! The effect is a thin baseline underline plus an accent-colored ripple
//! band that sweeps in from the touch point on press, fills while focused,
//! and fades out on release or blur. It is implemented as a host-agnostic
//! drawable: the host view framework reports bounds, state and frame time,
//! and replays the recorded draw commands with its own renderer.
//!
//! ## Example
//! ```
//! use linea::prelude::*;
//!
//! let mut background = UnderlineBackground::new(Theme::LIGHT);
//! background.on_bounds_change(Rect::new(0.0, 0.0, 200.0, 48.0));
//! background.on_state_change(StateFlags::ENABLED | StateFlags::PRESSED);
//!
//! // Per frame: advance animations by the frame delta, then draw.
//! let mut canvas = Canvas::new();
//! while background.advance_animations(16.0) {
//!     canvas.clear();
//!     background.draw(&mut canvas);
//! }
//! ```

pub mod animation;
pub mod drawable;
pub mod geometry;
pub mod paint;
pub mod ripple;
pub mod theme;
pub mod underline;

pub use drawable::{Drawable, StateFlags};
pub use geometry::{Padding, Rect};
pub use paint::{Canvas, Color, DrawCommand, Paint};
pub use ripple::{LinearRipple, RipplePool, MAX_RIPPLES};
pub use theme::Theme;
pub use underline::UnderlineBackground;

pub mod prelude {
    pub use crate::animation::{Easing, Transition, Tween};
    pub use crate::drawable::{Drawable, StateFlags};
    pub use crate::geometry::{Padding, Rect};
    pub use crate::paint::{Canvas, Color, DrawCommand, Paint};
    pub use crate::theme::Theme;
    pub use crate::underline::UnderlineBackground;
}
