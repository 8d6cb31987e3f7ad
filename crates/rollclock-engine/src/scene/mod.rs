//! Draw stream recorded by the UI and consumed by the renderers.
//!
//! Items paint back-to-front by z-index; equal z keeps push order, so
//! the result is the same every frame for the same pushes.

mod cmd;
mod key;
mod list;
mod z_index;

pub mod shapes;

pub use cmd::DrawCmd;
pub use key::SortKey;
pub use list::{DrawItem, DrawList};
pub use shapes::{RoundedRectCmd, TextCmd};
pub use z_index::ZIndex;
