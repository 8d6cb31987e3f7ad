//! Rollclock UI: paints a `ClockFace` through the engine and wires the
//! ticker to the window lifecycle.
//!
//! # Quick start
//!
//! ```rust,ignore
//! use rollclock_ui::Application;
//!
//! Application::new()
//!     .title("Rolling Clock")
//!     .size(400.0, 800.0)
//!     .font(std::fs::read("DejaVuSans.ttf")?)
//!     .run()?;
//! ```

pub mod app;
pub mod painter;
pub mod scene;

pub use app::Application;

/// Everything an embedding binary needs.
pub mod prelude {
    pub use crate::app::Application;
    pub use crate::painter::Painter;
    pub use crate::scene::UiScene;

    pub use rollclock_core::{FaceStyle, FixedTimeSource, SystemTimeSource, Time, TimeSource};
    pub use rollclock_engine::coords::{CornerRadii, Rect, Vec2};
    pub use rollclock_engine::paint::Color;
    pub use rollclock_engine::text::FontId;
}
