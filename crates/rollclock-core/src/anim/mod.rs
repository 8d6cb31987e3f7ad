//! Animation primitives.
//!
//! A renderer keeps the last value it drew, asks for a new target whenever
//! state changes, and steps the animation once per frame:
//!
//! ```
//! use rollclock_core::anim::{AnimatedValue, Easing, MotionSpec};
//! use std::time::Duration;
//!
//! let mut offset = AnimatedValue::new(0.0);
//! offset.animate_to(40.0, MotionSpec::tween(Duration::from_millis(300), Easing::LINEAR_OUT_SLOW_IN));
//! offset.advance(1.0 / 60.0);
//! assert!(offset.value() > 0.0 && offset.value() < 40.0);
//! ```

mod color;
mod easing;
mod spring;
mod value;

pub use color::{rgb, AnimatedColor, Rgba};
pub use easing::Easing;
pub use spring::{
    Spring, DAMPING_RATIO_LOW_BOUNCY, DAMPING_RATIO_NO_BOUNCY, STIFFNESS_LOW, STIFFNESS_MEDIUM,
};
pub use value::{AnimatedValue, MotionSpec};
