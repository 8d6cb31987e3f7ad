/// Per-corner radii for a rounded rectangle (logical pixels).
///
/// Order: top-left, top-right, bottom-right, bottom-left.
/// Negative values are treated as zero by renderers.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct CornerRadii {
    pub top_left: f32,
    pub top_right: f32,
    pub bottom_right: f32,
    pub bottom_left: f32,
}

impl CornerRadii {
    #[inline]
    pub const fn new(top_left: f32, top_right: f32, bottom_right: f32, bottom_left: f32) -> Self {
        Self { top_left, top_right, bottom_right, bottom_left }
    }

    #[inline]
    pub const fn all(r: f32) -> Self {
        Self::new(r, r, r, r)
    }

    #[inline]
    pub const fn zero() -> Self {
        Self::all(0.0)
    }

    /// Rounds only the two top corners.
    #[inline]
    pub const fn top(r: f32) -> Self {
        Self::new(r, r, 0.0, 0.0)
    }

    /// Rounds only the two bottom corners.
    #[inline]
    pub const fn bottom(r: f32) -> Self {
        Self::new(0.0, 0.0, r, r)
    }

    /// Per-corner maximum of two radii sets.
    #[inline]
    pub fn max(self, other: Self) -> Self {
        Self::new(
            self.top_left.max(other.top_left),
            self.top_right.max(other.top_right),
            self.bottom_right.max(other.bottom_right),
            self.bottom_left.max(other.bottom_left),
        )
    }

    /// Shrinks radii so adjacent corners never overlap on a `w`x`h` rect.
    pub fn clamped_to(self, w: f32, h: f32) -> Self {
        let limit = (w.min(h) * 0.5).max(0.0);
        let c = |r: f32| r.clamp(0.0, limit);
        Self::new(c(self.top_left), c(self.top_right), c(self.bottom_right), c(self.bottom_left))
    }

    #[inline]
    pub fn to_array(self) -> [f32; 4] {
        [self.top_left, self.top_right, self.bottom_right, self.bottom_left]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn top_and_bottom_merge_to_all() {
        assert_eq!(CornerRadii::top(10.0).max(CornerRadii::bottom(10.0)), CornerRadii::all(10.0));
    }

    #[test]
    fn clamp_limits_to_half_short_side() {
        let r = CornerRadii::all(30.0).clamped_to(40.0, 100.0);
        assert_eq!(r, CornerRadii::all(20.0));
        let r = CornerRadii::new(-1.0, 5.0, 5.0, 5.0).clamped_to(40.0, 40.0);
        assert_eq!(r.top_left, 0.0);
    }
}
