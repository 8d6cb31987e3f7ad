use rollclock_engine::coords::{CornerRadii, Rect, Vec2};
use rollclock_engine::paint::Color;
use rollclock_engine::scene::{DrawList, ZIndex};
use rollclock_engine::text::{FontId, FontSystem};

/// Drawing surface for one frame.
///
/// Wraps the engine's `DrawList`; every call paints above the previous one.
pub struct Painter<'a> {
    draw_list: &'a mut DrawList,
    font_system: &'a FontSystem,
    z: i32,
}

impl<'a> Painter<'a> {
    pub fn new(draw_list: &'a mut DrawList, font_system: &'a FontSystem) -> Self {
        Self { draw_list, font_system, z: 0 }
    }

    /// Size of one line of `text` in logical pixels.
    pub fn measure_text(&self, text: &str, font: FontId, size: f32) -> Vec2 {
        self.font_system.measure_text(text, font, size)
    }

    // ── drawing ───────────────────────────────────────────────────────────

    /// Rounded rectangle with per-corner radii.
    pub fn fill_rounded_rect_corners(&mut self, rect: Rect, radii: CornerRadii, color: Color) {
        let z = self.next_z();
        self.draw_list.push_rounded_rect(z, rect, radii, color);
    }

    /// Text at `origin` (top-left of the line box).
    pub fn text(&mut self, text: impl Into<String>, font: FontId, size: f32, color: Color, origin: Vec2) {
        let z = self.next_z();
        self.draw_list.push_text(z, text, font, size, color, origin);
    }

    /// `text` centered inside `rect`.
    pub fn text_centered(&mut self, text: &str, font: FontId, size: f32, color: Color, rect: Rect) {
        let extent = self.measure_text(text, font, size);
        let origin = rect.center() - extent * 0.5;
        self.text(text, font, size, color, origin);
    }

    #[inline]
    fn next_z(&mut self) -> ZIndex {
        let z = ZIndex::new(self.z);
        self.z += 1;
        z
    }
}
