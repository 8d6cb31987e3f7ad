//! Clock face: six animated digit columns and the per-frame description a
//! renderer paints.
//!
//! Layout (logical pixels, origin top-left of the face):
//! - columns sit side by side, each `cell_size` wide with `column_padding` on both sides
//! - a `group_spacing` gap follows the hours and minutes groups
//! - the face is one cell tall; every column is vertically centered on that
//!   row and then shifted by its animated offset, so the active digit rests in it

use crate::anim::{rgb, AnimatedColor, AnimatedValue, Rgba};
use crate::digit::{DigitPosition, DigitRange, DigitSlot};
use crate::policy::{AnimationIntent, DigitPolicy};
use crate::time::Time;

/// Visual parameters of the face.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct FaceStyle {
    /// Width and height of one digit cell.
    pub cell_size: f32,
    /// Horizontal space on each side of a column.
    pub column_padding: f32,
    /// Extra gap after the hours and minutes groups.
    pub group_spacing: f32,
    /// Column corner radius as a fraction of `cell_size`.
    pub corner_fraction: f32,
    pub font_size: f32,
    pub active_color: Rgba,
    pub inactive_color: Rgba,
    pub text_color: Rgba,
    pub background: Rgba,
}

impl FaceStyle {
    #[inline]
    pub fn corner_radius(&self) -> f32 {
        self.cell_size * self.corner_fraction
    }

    #[inline]
    pub fn policy(&self) -> DigitPolicy {
        DigitPolicy::new(self.cell_size)
    }

    #[inline]
    fn column_stride(&self) -> f32 {
        self.cell_size + 2.0 * self.column_padding
    }

    fn cell_color(&self, active: bool) -> Rgba {
        if active { self.active_color } else { self.inactive_color }
    }
}

impl Default for FaceStyle {
    fn default() -> Self {
        Self {
            cell_size: 40.0,
            column_padding: 4.0,
            group_spacing: 16.0,
            corner_fraction: 0.25,
            font_size: 20.0,
            active_color: rgb(0x6200EE),
            inactive_color: rgb(0x3700B3),
            text_color: rgb(0xFFFFFF),
            background: rgb(0x121217),
        }
    }
}

// ── frame description ─────────────────────────────────────────────────────

/// One digit cell as it should be painted this frame.
#[derive(Debug, Clone, PartialEq)]
pub struct CellFrame {
    pub value: u8,
    /// Top edge in face coordinates, offset already applied.
    pub y: f32,
    pub color: Rgba,
    pub active: bool,
}

/// One column as it should be painted this frame.
#[derive(Debug, Clone, PartialEq)]
pub struct ColumnFrame {
    pub position: DigitPosition,
    /// Left edge of the cells in face coordinates.
    pub x: f32,
    /// Current animated offset.
    pub offset: f32,
    /// Cells from range minimum (top) to maximum (bottom).
    pub cells: Vec<CellFrame>,
}

impl ColumnFrame {
    /// Top edge of the whole column.
    pub fn top(&self) -> f32 {
        self.cells.first().map_or(0.0, |c| c.y)
    }
}

/// Renderer-agnostic description of the whole face for one frame.
#[derive(Debug, Clone, PartialEq)]
pub struct FaceFrame {
    pub width: f32,
    pub height: f32,
    pub cell_size: f32,
    pub corner_radius: f32,
    pub columns: Vec<ColumnFrame>,
}

// ── column ────────────────────────────────────────────────────────────────

/// Animated state of one digit position.
#[derive(Debug, Clone)]
pub struct DigitColumn {
    position: DigitPosition,
    range: DigitRange,
    current: u8,
    offset: AnimatedValue,
    cells: Vec<AnimatedColor>,
}

impl DigitColumn {
    /// Column resting on `slot` with no animation pending.
    pub fn new(slot: DigitSlot, style: &FaceStyle) -> Self {
        let intent = style.policy().compute_intent(slot);
        let cells = slot
            .range
            .iter()
            .map(|row| AnimatedColor::new(style.cell_color(slot.is_active(row))))
            .collect();

        Self {
            position: slot.position,
            range: slot.range,
            current: slot.value,
            offset: AnimatedValue::new(intent.target_offset),
            cells,
        }
    }

    #[inline]
    pub fn position(&self) -> DigitPosition {
        self.position
    }

    #[inline]
    pub fn current(&self) -> u8 {
        self.current
    }

    #[inline]
    pub fn offset(&self) -> f32 {
        self.offset.value()
    }

    #[inline]
    pub fn target_offset(&self) -> f32 {
        self.offset.target()
    }

    /// Moves the column to `slot.value`.
    ///
    /// Returns the intent used, or `None` when the value did not change.
    pub fn set_value(&mut self, slot: DigitSlot, style: &FaceStyle) -> Option<AnimationIntent> {
        debug_assert_eq!(slot.position, self.position);
        if slot.value == self.current {
            return None;
        }

        let policy = style.policy();
        let intent = policy.compute_intent(slot);
        self.offset.animate_to(intent.target_offset, intent.curve.motion());

        let color_motion = policy.color_motion();
        for (row, cell) in self.range.iter().zip(&mut self.cells) {
            cell.animate_to(style.cell_color(slot.is_active(row)), color_motion);
        }

        self.current = slot.value;
        Some(intent)
    }

    pub fn advance(&mut self, dt: f32) {
        self.offset.advance(dt);
        for cell in &mut self.cells {
            cell.advance(dt);
        }
    }

    pub fn is_settled(&self) -> bool {
        self.offset.is_settled() && self.cells.iter().all(AnimatedColor::is_settled)
    }

    fn frame(&self, x: f32, style: &FaceStyle) -> ColumnFrame {
        let size = style.cell_size;
        let offset = self.offset.value();
        let column_height = self.range.len() as f32 * size;
        let top = (size - column_height) / 2.0 + offset;

        let cells = self
            .range
            .iter()
            .zip(&self.cells)
            .enumerate()
            .map(|(i, (value, color))| CellFrame {
                value,
                y: top + i as f32 * size,
                color: color.value(),
                active: value == self.current,
            })
            .collect();

        ColumnFrame { position: self.position, x, offset, cells }
    }
}

// ── face ──────────────────────────────────────────────────────────────────

/// Six digit columns driven by successive [`Time`] values.
#[derive(Debug, Clone)]
pub struct ClockFace {
    style: FaceStyle,
    time: Time,
    columns: [DigitColumn; 6],
}

impl ClockFace {
    /// Face showing `initial` at rest.
    pub fn new(style: FaceStyle, initial: Time) -> Self {
        let columns = initial.slots().map(|slot| DigitColumn::new(slot, &style));
        Self { style, time: initial, columns }
    }

    #[inline]
    pub fn time(&self) -> Time {
        self.time
    }

    #[inline]
    pub fn style(&self) -> &FaceStyle {
        &self.style
    }

    #[inline]
    pub fn column(&self, position: DigitPosition) -> &DigitColumn {
        &self.columns[position.index()]
    }

    /// Applies a new time; returns the positions that started moving.
    pub fn update(&mut self, time: Time) -> Vec<(DigitPosition, AnimationIntent)> {
        if time == self.time {
            return Vec::new();
        }

        let changed = self.style.policy().changed_slots(self.time, time);
        for &(position, intent) in &changed {
            let slot = time.slot(position);
            self.columns[position.index()].set_value(slot, &self.style);
            log::trace!("{position:?} -> {} ({:?})", slot.value, intent.curve);
        }

        log::trace!("face {} -> {time}: {} column(s) moving", self.time, changed.len());
        self.time = time;
        changed
    }

    pub fn advance(&mut self, dt: f32) {
        for column in &mut self.columns {
            column.advance(dt);
        }
    }

    pub fn is_settled(&self) -> bool {
        self.columns.iter().all(DigitColumn::is_settled)
    }

    /// Bounding box of the resting row: `(width, height)`.
    pub fn size(&self) -> (f32, f32) {
        let s = &self.style;
        let width = 6.0 * s.column_stride() + 2.0 * s.group_spacing;
        (width, s.cell_size)
    }

    pub fn frame(&self) -> FaceFrame {
        let s = &self.style;
        let (width, height) = self.size();

        let mut x = 0.0;
        let mut columns = Vec::with_capacity(self.columns.len());
        for column in &self.columns {
            columns.push(column.frame(x + s.column_padding, s));
            x += s.column_stride();
            if column.position.ends_group() {
                x += s.group_spacing;
            }
        }

        FaceFrame {
            width,
            height,
            cell_size: s.cell_size,
            corner_radius: s.corner_radius(),
            columns,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::policy::AnimationCurve;

    const FRAME: f32 = 1.0 / 60.0;

    fn t(h: u32, m: u32, s: u32) -> Time {
        Time::new(h, m, s).unwrap()
    }

    fn settle(face: &mut ClockFace) {
        for _ in 0..600 {
            face.advance(FRAME);
            if face.is_settled() {
                return;
            }
        }
        panic!("face did not settle");
    }

    fn active_cell(col: &ColumnFrame) -> &CellFrame {
        col.cells.iter().find(|c| c.active).unwrap()
    }

    // ── construction ──────────────────────────────────────────────────────

    #[test]
    fn new_face_is_at_rest() {
        let face = ClockFace::new(FaceStyle::default(), t(12, 34, 56));
        assert!(face.is_settled());
        assert_eq!(face.time(), t(12, 34, 56));
        assert_eq!(face.column(DigitPosition::SecondOnes).current(), 6);
    }

    #[test]
    fn size_includes_padding_and_spacers() {
        let face = ClockFace::new(FaceStyle::default(), Time::MIDNIGHT);
        assert_eq!(face.size(), (6.0 * 48.0 + 32.0, 40.0));
    }

    // ── layout ────────────────────────────────────────────────────────────

    #[test]
    fn active_cell_rests_on_the_row() {
        let face = ClockFace::new(FaceStyle::default(), t(23, 59, 59));
        let frame = face.frame();
        assert_eq!(frame.columns.len(), 6);
        for col in &frame.columns {
            assert_eq!(active_cell(col).y, 0.0, "{:?}", col.position);
        }
    }

    #[test]
    fn column_x_positions() {
        let frame = ClockFace::new(FaceStyle::default(), Time::MIDNIGHT).frame();
        let xs: Vec<f32> = frame.columns.iter().map(|c| c.x).collect();
        assert_eq!(xs, [4.0, 52.0, 116.0, 164.0, 228.0, 276.0]);
    }

    #[test]
    fn cells_stack_top_to_bottom() {
        let frame = ClockFace::new(FaceStyle::default(), t(0, 0, 3)).frame();
        let col = &frame.columns[5];
        assert_eq!(col.cells.len(), 10);
        assert_eq!(col.top(), -120.0);
        for pair in col.cells.windows(2) {
            assert_eq!(pair[1].y - pair[0].y, 40.0);
            assert_eq!(pair[1].value, pair[0].value + 1);
        }
    }

    #[test]
    fn frame_colors_follow_active_flag() {
        let style = FaceStyle::default();
        let frame = ClockFace::new(style, t(1, 2, 3)).frame();
        for col in &frame.columns {
            for cell in &col.cells {
                let expected = if cell.active { style.active_color } else { style.inactive_color };
                assert_eq!(cell.color, expected);
            }
        }
    }

    // ── updates ───────────────────────────────────────────────────────────

    #[test]
    fn update_moves_only_changed_columns() {
        let mut face = ClockFace::new(FaceStyle::default(), t(12, 34, 56));
        let changed = face.update(t(12, 34, 57));
        assert_eq!(changed.len(), 1);
        assert_eq!(changed[0].0, DigitPosition::SecondOnes);
        assert_eq!(changed[0].1.curve, AnimationCurve::Continuous);

        assert!(face.column(DigitPosition::MinuteOnes).is_settled());
        assert!(!face.column(DigitPosition::SecondOnes).is_settled());
    }

    #[test]
    fn update_reports_the_policy_transitions() {
        let style = FaceStyle::default();
        let mut face = ClockFace::new(style, t(12, 59, 59));
        let expected = style.policy().changed_slots(t(12, 59, 59), t(13, 0, 0));
        assert_eq!(face.update(t(13, 0, 0)), expected);
        assert_eq!(expected.len(), 5);
        for (position, intent) in expected {
            assert_eq!(face.column(position).target_offset(), intent.target_offset);
        }
    }

    #[test]
    fn tick_slides_in_tween_time() {
        let mut face = ClockFace::new(FaceStyle::default(), t(12, 34, 56));
        face.update(t(12, 34, 57));
        let col = face.column(DigitPosition::SecondOnes);
        assert_eq!(col.target_offset(), 40.0 * (4.5 - 7.0));

        for _ in 0..19 {
            face.advance(FRAME);
        }
        let frame = face.frame();
        assert_eq!(active_cell(&frame.columns[5]).y, 0.0);
        assert_eq!(active_cell(&frame.columns[5]).value, 7);
    }

    #[test]
    fn rollover_bounces_past_rest() {
        let mut face = ClockFace::new(FaceStyle::default(), t(23, 59, 59));
        let changed = face.update(Time::MIDNIGHT);
        assert_eq!(changed.len(), 6);
        assert!(changed.iter().all(|(_, i)| i.curve == AnimationCurve::BounceReset));

        let target = face.column(DigitPosition::SecondOnes).target_offset();
        assert_eq!(target, 180.0);
        let mut peak = f32::MIN;
        for _ in 0..120 {
            face.advance(FRAME);
            peak = peak.max(face.column(DigitPosition::SecondOnes).offset());
        }
        assert!(peak > target, "expected overshoot, peak {peak}");

        settle(&mut face);
        assert_eq!(face.column(DigitPosition::SecondOnes).offset(), target);
    }

    #[test]
    fn repeated_time_is_ignored() {
        let mut face = ClockFace::new(FaceStyle::default(), t(5, 5, 5));
        assert!(face.update(t(5, 5, 5)).is_empty());
        assert!(face.is_settled());
    }

    #[test]
    fn colors_settle_on_new_active_cell() {
        let style = FaceStyle::default();
        let mut face = ClockFace::new(style, t(0, 0, 1));
        face.update(t(0, 0, 2));
        settle(&mut face);
        let frame = face.frame();
        let col = &frame.columns[5];
        assert_eq!(col.cells[2].color, style.active_color);
        assert_eq!(col.cells[1].color, style.inactive_color);
        assert!(col.cells[2].active && !col.cells[1].active);
    }
}
