//! Color model shared between UI and renderers.
//!
//! Colors are linear, premultiplied RGBA; geometry lives in `coords`.

mod color;

pub use color::Color;
