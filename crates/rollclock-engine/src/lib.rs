//! Rollclock engine crate.
//!
//! Window runtime, GPU device and the small set of renderers the clock face
//! needs (rounded rectangles and text). Knows nothing about clocks.

pub mod core;
pub mod device;
pub mod time;
pub mod window;

pub mod coords;
pub mod logging;
pub mod paint;
pub mod render;
pub mod scene;
pub mod text;
