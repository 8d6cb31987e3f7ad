use rollclock_core::{ColumnFrame, FaceFrame, FaceStyle};
use rollclock_engine::coords::{CornerRadii, Rect, Vec2, Viewport};
use rollclock_engine::paint::Color;
use rollclock_engine::scene::DrawList;
use rollclock_engine::text::{FontId, FontLoadError, FontSystem};

use crate::painter::Painter;

/// Owns the fonts and the draw list that survive across frames.
///
/// Both fields are public so the application can split-borrow them when
/// handing the list to the renderers.
#[derive(Debug, Default)]
pub struct UiScene {
    pub font_system: FontSystem,
    /// Draw list populated by the most recent [`frame`](Self::frame) call.
    pub draw_list: DrawList,
}

impl UiScene {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn load_font(&mut self, data: &[u8]) -> Result<FontId, FontLoadError> {
        self.font_system.load_font(data)
    }

    /// Records `face` centered in `viewport`.
    ///
    /// Cells outside the viewport are skipped. Without a font only the cells
    /// are drawn.
    pub fn frame(
        &mut self,
        face: &FaceFrame,
        style: &FaceStyle,
        font: Option<FontId>,
        viewport: Viewport,
    ) -> &mut DrawList {
        self.draw_list.clear();

        let origin = Vec2::new(
            ((viewport.width - face.width) * 0.5).round(),
            ((viewport.height - face.height) * 0.5).round(),
        );
        let visible = Rect::new(0.0, 0.0, viewport.width, viewport.height);
        let text_color = Color::from_srgb_array(style.text_color);

        let mut painter = Painter::new(&mut self.draw_list, &self.font_system);
        for column in &face.columns {
            paint_column(&mut painter, column, face, origin, visible, font, style.font_size, text_color);
        }

        &mut self.draw_list
    }
}

#[allow(clippy::too_many_arguments)]
fn paint_column(
    painter: &mut Painter<'_>,
    column: &ColumnFrame,
    face: &FaceFrame,
    origin: Vec2,
    visible: Rect,
    font: Option<FontId>,
    font_size: f32,
    text_color: Color,
) {
    let last = column.cells.len().saturating_sub(1);
    for (row, cell) in column.cells.iter().enumerate() {
        let rect = Rect::new(origin.x + column.x, origin.y + cell.y, face.cell_size, face.cell_size);
        if !rect.overlaps(visible) {
            continue;
        }

        painter.fill_rounded_rect_corners(
            rect,
            cell_radii(row, last, face.corner_radius),
            Color::from_srgb_array(cell.color),
        );
        if let Some(font) = font {
            painter.text_centered(&cell.value.to_string(), font, font_size, text_color, rect);
        }
    }
}

/// Only the column's ends are rounded, so the column reads as one strip.
fn cell_radii(row: usize, last: usize, radius: f32) -> CornerRadii {
    let mut radii = CornerRadii::zero();
    if row == 0 {
        radii = radii.max(CornerRadii::top(radius));
    }
    if row == last {
        radii = radii.max(CornerRadii::bottom(radius));
    }
    radii
}
