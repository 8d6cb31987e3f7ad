//! Shelf packing for the glyph atlas.

/// Top-left corner of an allocated region, in texels.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub(super) struct AtlasSlot {
    pub x: u32,
    pub y: u32,
}

/// Row-based packer: regions fill a shelf left to right and a new shelf
/// starts below the tallest region of the previous one.
///
/// Once a region fails to fit vertically the packer reports full and refuses
/// all further requests until [`reset`](Self::reset).
#[derive(Debug)]
pub(super) struct ShelfPacker {
    size: u32,
    padding: u32,
    cursor_x: u32,
    cursor_y: u32,
    row_height: u32,
    full: bool,
}

impl ShelfPacker {
    pub(super) fn new(size: u32, padding: u32) -> Self {
        Self {
            size,
            padding,
            cursor_x: padding,
            cursor_y: padding,
            row_height: 0,
            full: false,
        }
    }

    #[inline]
    pub(super) fn size(&self) -> u32 {
        self.size
    }

    #[inline]
    pub(super) fn is_full(&self) -> bool {
        self.full
    }

    pub(super) fn reset(&mut self) {
        *self = Self::new(self.size, self.padding);
    }

    pub(super) fn allocate(&mut self, w: u32, h: u32) -> Option<AtlasSlot> {
        if self.full || w + 2 * self.padding > self.size {
            return None;
        }

        if self.cursor_x + w + self.padding > self.size {
            self.cursor_y += self.row_height + self.padding;
            self.cursor_x = self.padding;
            self.row_height = 0;
        }

        if self.cursor_y + h + self.padding > self.size {
            self.full = true;
            return None;
        }

        let slot = AtlasSlot { x: self.cursor_x, y: self.cursor_y };
        self.cursor_x += w + self.padding;
        self.row_height = self.row_height.max(h);
        Some(slot)
    }

    /// Normalized `(uv_min, uv_max)` for a `w × h` region at `slot`.
    pub(super) fn uv(&self, slot: AtlasSlot, w: u32, h: u32) -> ([f32; 2], [f32; 2]) {
        let s = self.size as f32;
        (
            [slot.x as f32 / s, slot.y as f32 / s],
            [(slot.x + w) as f32 / s, (slot.y + h) as f32 / s],
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fills_a_shelf_then_wraps() {
        let mut p = ShelfPacker::new(32, 1);
        assert_eq!(p.allocate(10, 5), Some(AtlasSlot { x: 1, y: 1 }));
        assert_eq!(p.allocate(10, 8), Some(AtlasSlot { x: 12, y: 1 }));
        // 23 + 10 + 1 > 32: next shelf starts under the tallest region.
        assert_eq!(p.allocate(10, 3), Some(AtlasSlot { x: 1, y: 10 }));
    }

    #[test]
    fn reports_full_and_stays_full() {
        let mut p = ShelfPacker::new(16, 1);
        assert!(p.allocate(14, 14).is_some());
        assert!(p.allocate(14, 2).is_none());
        assert!(p.is_full());
        assert!(p.allocate(1, 1).is_none());

        p.reset();
        assert!(!p.is_full());
        assert_eq!(p.allocate(1, 1), Some(AtlasSlot { x: 1, y: 1 }));
    }

    #[test]
    fn rejects_regions_wider_than_the_atlas() {
        let mut p = ShelfPacker::new(16, 1);
        assert!(p.allocate(15, 1).is_none());
        assert!(!p.is_full());
    }

    #[test]
    fn uv_is_normalized() {
        let p = ShelfPacker::new(64, 0);
        let (min, max) = p.uv(AtlasSlot { x: 16, y: 32 }, 16, 8);
        assert_eq!(min, [0.25, 0.5]);
        assert_eq!(max, [0.5, 0.625]);
        assert_eq!(p.size(), 64);
    }
}
