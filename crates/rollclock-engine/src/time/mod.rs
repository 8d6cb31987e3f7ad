//! Frame timing.
//!
//! One `FrameClock` per window; `tick()` once per rendered frame yields the
//! `FrameTime` that drives animation stepping.

mod frame_clock;

pub use frame_clock::{FrameClock, FrameTime};
