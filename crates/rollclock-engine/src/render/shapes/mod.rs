//! Shape renderers.

mod atlas;
mod common;

pub mod rounded_rect;
pub mod text;
