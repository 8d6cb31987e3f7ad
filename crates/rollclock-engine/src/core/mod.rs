//! Contract between the window runtime and the application layer.
//!
//! The runtime drives window lifecycle and frames; the application only sees
//! the callbacks below and a per-frame context.

mod app;
mod ctx;

pub use app::{App, AppControl};
pub use ctx::{FrameCtx, WindowCtx};
