use super::Vec2;

/// Axis-aligned rectangle in logical pixels (top-left origin).
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct Rect {
    pub origin: Vec2,
    pub size: Vec2,
}

impl Rect {
    #[inline]
    pub const fn new(x: f32, y: f32, w: f32, h: f32) -> Self {
        Self {
            origin: Vec2::new(x, y),
            size: Vec2::new(w, h),
        }
    }

    #[inline]
    pub fn max(self) -> Vec2 {
        self.origin + self.size
    }

    #[inline]
    pub fn center(self) -> Vec2 {
        self.origin + self.size * 0.5
    }

    #[inline]
    pub fn is_empty(self) -> bool {
        self.size.x <= 0.0 || self.size.y <= 0.0
    }

    #[inline]
    pub fn is_finite(self) -> bool {
        self.origin.is_finite() && self.size.is_finite()
    }

    /// Normalizes the rectangle so width/height are non-negative.
    #[inline]
    pub fn normalized(self) -> Self {
        let (mut x, mut y) = (self.origin.x, self.origin.y);
        let (mut w, mut h) = (self.size.x, self.size.y);
        if w < 0.0 {
            x += w;
            w = -w;
        }
        if h < 0.0 {
            y += h;
            h = -h;
        }
        Rect::new(x, y, w, h)
    }

    /// True when the two rects share a region of positive area.
    #[inline]
    pub fn overlaps(self, other: Rect) -> bool {
        let a = self.normalized();
        let b = other.normalized();
        let (a_max, b_max) = (a.max(), b.max());
        a.origin.x < b_max.x && b.origin.x < a_max.x && a.origin.y < b_max.y && b.origin.y < a_max.y
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn r(x: f32, y: f32, w: f32, h: f32) -> Rect { Rect::new(x, y, w, h) }

    // ── normalized ────────────────────────────────────────────────────────

    #[test]
    fn normalized_positive_is_identity() {
        let rect = r(1.0, 2.0, 10.0, 20.0);
        assert_eq!(rect.normalized(), rect);
    }

    #[test]
    fn normalized_flips_negative_extent() {
        let n = r(10.0, 10.0, -4.0, -3.0).normalized();
        assert_eq!(n, r(6.0, 7.0, 4.0, 3.0));
    }

    // ── overlaps ──────────────────────────────────────────────────────────

    #[test]
    fn overlapping_rects() {
        assert!(r(0.0, 0.0, 10.0, 10.0).overlaps(r(5.0, 5.0, 10.0, 10.0)));
        assert!(r(0.0, 0.0, 100.0, 100.0).overlaps(r(10.0, 10.0, 1.0, 1.0)));
    }

    #[test]
    fn touching_edges_do_not_overlap() {
        assert!(!r(0.0, 0.0, 10.0, 10.0).overlaps(r(10.0, 0.0, 10.0, 10.0)));
        assert!(!r(0.0, 0.0, 10.0, 10.0).overlaps(r(0.0, -10.0, 10.0, 10.0)));
    }

    #[test]
    fn disjoint_rects() {
        assert!(!r(0.0, 0.0, 5.0, 5.0).overlaps(r(20.0, 20.0, 5.0, 5.0)));
    }

    // ── misc ──────────────────────────────────────────────────────────────

    #[test]
    fn center_and_max() {
        let rect = r(10.0, 20.0, 40.0, 40.0);
        assert_eq!(rect.center(), Vec2::new(30.0, 40.0));
        assert_eq!(rect.max(), Vec2::new(50.0, 60.0));
    }

    #[test]
    fn is_empty_zero_size() {
        assert!(r(0.0, 0.0, 0.0, 5.0).is_empty());
        assert!(!r(0.0, 0.0, 1.0, 1.0).is_empty());
    }
}
