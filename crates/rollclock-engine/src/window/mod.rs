//! Window + runtime loop.
//!
//! Owns the `winit` EventLoop and Windows, wires them to the GPU layer and
//! reports window lifecycle to the application.

mod runtime;

pub use runtime::{Runtime, RuntimeConfig};
