use super::shapes::{RoundedRectCmd, TextCmd};

/// Renderer-agnostic draw command.
///
/// Each variant has a push helper in `scene::shapes` and a matching renderer
/// in `render::shapes`.
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCmd {
    RoundedRect(RoundedRectCmd),
    Text(TextCmd),
}
