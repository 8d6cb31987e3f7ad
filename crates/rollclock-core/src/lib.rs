//! Rolling clock core.
//!
//! Owns everything about the clock that does not touch a window or a GPU:
//! - sampling wall-clock time (`time`)
//! - splitting a time into six digit slots (`digit`)
//! - choosing the offset and animation curve per slot (`policy`)
//! - generic value/color animation (`anim`)
//! - the per-frame face description handed to a renderer (`face`)
//! - the 1 Hz ticker that publishes the latest time (`state`)

pub mod anim;
pub mod digit;
pub mod face;
pub mod policy;
pub mod state;
pub mod time;

pub use digit::{DigitPosition, DigitRange, DigitSlot};
pub use face::{CellFrame, ClockFace, ColumnFrame, DigitColumn, FaceFrame, FaceStyle};
pub use policy::{AnimationCurve, AnimationIntent, DigitPolicy};
pub use state::{ClockError, ClockState};
pub use time::{FixedTimeSource, SystemTimeSource, Time, TimeError, TimeSource};
