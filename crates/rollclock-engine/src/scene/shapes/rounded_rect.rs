use crate::coords::{CornerRadii, Rect};
use crate::paint::Color;
use crate::scene::{DrawCmd, DrawList, ZIndex};

/// Solid rounded rectangle.
#[derive(Debug, Clone, PartialEq)]
pub struct RoundedRectCmd {
    pub rect: Rect,
    pub radii: CornerRadii,
    pub color: Color,
}

impl DrawList {
    #[inline]
    pub fn push_rounded_rect(&mut self, z: ZIndex, rect: Rect, radii: CornerRadii, color: Color) {
        self.push(z, DrawCmd::RoundedRect(RoundedRectCmd { rect, radii, color }));
    }
}
